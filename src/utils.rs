use crate::error::{CsvToolError, CsvToolResult};
use std::io::Write;

#[allow(unused_variables)]
pub fn write_to_stdout(src: &str) -> CsvToolResult<()> {
    #[cfg(not(test))]
    write!(std::io::stdout(), "{}", src)
        .map_err(|err| CsvToolError::io_error(err, "Failed to write to stdout"))?;
    std::io::stdout()
        .flush()
        .map_err(|err| CsvToolError::io_error(err, "Failed to flush stdout"))?;

    Ok(())
}

#[allow(unused_variables)]
pub(crate) fn write_to_stderr(src: &str) -> CsvToolResult<()> {
    #[cfg(not(test))]
    write!(std::io::stderr(), "{}", src)
        .map_err(|err| CsvToolError::io_error(err, "Failed to write to stderr"))?;
    std::io::stderr()
        .flush()
        .map_err(|err| CsvToolError::io_error(err, "Failed to flush stderr"))?;

    Ok(())
}

/// Read a line into input
///
/// Return : read byte count, 0 means end of input
#[cfg(feature = "cli")]
pub(crate) fn read_stdin_until_eof(strip_newline: bool, input: &mut String) -> CsvToolResult<usize> {
    let read_byte = std::io::stdin()
        .read_line(input)
        .map_err(|err| CsvToolError::io_error(err, "Failed to read stdin from source"))?;
    if strip_newline && (input.ends_with('\n') || input.ends_with("\r\n")) {
        *input = input.trim().to_owned();
    }
    Ok(read_byte)
}

/// Split a line by spaces while keeping single quoted chunks
///
/// A backslash escapes the next quote.
pub fn tokens_with_quote(source: &str) -> Vec<String> {
    let mut tokens = vec![];
    let mut on_quote = false;
    let mut quoted = false;
    let mut escaped = false;
    let mut chunk = String::new();
    for ch in source.chars() {
        match ch {
            '\\' if !escaped => {
                escaped = true;
                continue;
            }
            '\'' if !escaped => {
                on_quote = !on_quote;
                quoted = true;
                continue;
            }
            ' ' if !on_quote && !escaped => {
                if !chunk.is_empty() || quoted {
                    tokens.push(std::mem::take(&mut chunk));
                }
                quoted = false;
                continue;
            }
            _ => (),
        }
        escaped = false;
        chunk.push(ch);
    }
    if !chunk.is_empty() || quoted {
        tokens.push(chunk);
    }
    tokens
}

/// Split a line into commands by semicolons outside single quotes
///
/// Quotes and escapes are kept so each command can be tokenized afterwards.
/// Blank commands are dropped.
pub fn split_commands(source: &str) -> Vec<String> {
    let mut commands = vec![];
    let mut on_quote = false;
    let mut escaped = false;
    let mut chunk = String::new();
    for ch in source.chars() {
        match ch {
            '\\' if !escaped => escaped = true,
            '\'' if !escaped => on_quote = !on_quote,
            ';' if !on_quote && !escaped => {
                commands.push(std::mem::take(&mut chunk));
                continue;
            }
            _ => escaped = false,
        }
        chunk.push(ch);
    }
    commands.push(chunk);
    commands.retain(|c| !c.trim().is_empty());
    commands
}
