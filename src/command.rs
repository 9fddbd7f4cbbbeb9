#[cfg(feature = "cli")]
use crate::cli::help;
use crate::error::{CsvToolError, CsvToolResult};
use crate::processor::Processor;
use crate::utils;
use crate::view;
use std::path::Path;
use std::str::FromStr;

/// Nesting limit of "execute" inside scripts
const MAX_EXECUTE_DEPTH: usize = 16;

#[derive(PartialEq, Debug, Clone)]
pub enum CommandType {
    #[cfg(feature = "cli")]
    Version,
    #[cfg(feature = "cli")]
    Help,
    Import,
    Export,
    Print,
    PrintDraft,
    EditCell,
    EditDraft,
    AddRow,
    ClearDraft,
    DeleteRow,
    Execute,
    Exit,
    None(String),
}

impl CommandType {
    pub fn from_str(src: &str) -> Self {
        match src.to_lowercase().trim() {
            #[cfg(feature = "cli")]
            "version" | "v" => Self::Version,
            #[cfg(feature = "cli")]
            "help" | "h" => Self::Help,
            "import" | "i" => Self::Import,
            "export" | "x" => Self::Export,
            "print" | "p" => Self::Print,
            "print-draft" | "pd" => Self::PrintDraft,
            "edit" | "edit-cell" | "e" => Self::EditCell,
            "draft" | "d" => Self::EditDraft,
            "add-row" | "commit" | "ar" => Self::AddRow,
            "clear-draft" | "cd" => Self::ClearDraft,
            "delete-row" | "dr" => Self::DeleteRow,
            "execute" | "ex" => Self::Execute,
            "exit" | "quit" | "q" => Self::Exit,
            _ => Self::None(src.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub command_type: CommandType,
    pub arguments: Vec<String>,
}

impl Default for Command {
    fn default() -> Self {
        Self {
            command_type: CommandType::Print,
            arguments: vec![],
        }
    }
}

impl FromStr for Command {
    type Err = CsvToolError;

    fn from_str(src: &str) -> CsvToolResult<Self> {
        let mut tokens = utils::tokens_with_quote(src.trim()).into_iter();
        let command = tokens
            .next()
            .ok_or_else(|| CsvToolError::Command("Command is empty".to_string()))?;
        Ok(Self {
            command_type: CommandType::from_str(&command),
            arguments: tokens.collect(),
        })
    }
}

impl Processor {
    /// Execute given command
    pub fn execute_command(&mut self, command: &Command) -> CsvToolResult<()> {
        match &command.command_type {
            #[cfg(feature = "cli")]
            CommandType::Version => help::print_version(),
            #[cfg(feature = "cli")]
            CommandType::Help => self.print_help_from_args(&command.arguments)?,
            CommandType::None(src) => {
                return Err(CsvToolError::Command(format!("No such command \"{src}\"")))
            }
            CommandType::Import => self.import_file_from_args(&command.arguments)?,
            CommandType::Export => self.export_from_args(&command.arguments)?,
            CommandType::Print => utils::write_to_stdout(&view::render_grid(self.grid()))?,
            CommandType::PrintDraft => utils::write_to_stdout(&view::render_draft(self.grid()))?,
            CommandType::EditCell => self.edit_cell_from_args(&command.arguments)?,
            CommandType::EditDraft => self.edit_draft_from_args(&command.arguments)?,
            CommandType::AddRow => {
                let row_index = self.commit_draft()?;
                self.log(&format!("New row added to \"{}\"\n", row_index))?;
            }
            CommandType::ClearDraft => {
                self.clear_draft();
                self.log("Draft cleared\n")?;
            }
            CommandType::DeleteRow => self.delete_row_from_args(&command.arguments)?,
            CommandType::Execute => self.execute_from_file(&command.arguments)?,
            // NOTE
            // This is handled by the command loop
            CommandType::Exit => (),
        }
        Ok(())
    }

    fn import_file_from_args(&mut self, args: &[String]) -> CsvToolResult<()> {
        if args.is_empty() {
            return Err(CsvToolError::Command(
                "You have to specify a file name to import from".to_string(),
            ));
        }
        // File names may contain spaces
        let file = args.join(" ");
        self.import_from_file(Path::new(&file))?;
        self.log(&format!(
            "File \"{}\" imported ( {} rows )\n",
            file,
            self.grid().get_row_count()
        ))?;
        Ok(())
    }

    fn export_from_args(&mut self, args: &[String]) -> CsvToolResult<()> {
        let target = if args.is_empty() {
            None
        } else {
            Some(args.join(" "))
        };
        let path = self.export(target.as_deref().map(Path::new))?;
        self.log(&format!("File exported to \"{}\"\n", path.display()))?;
        Ok(())
    }

    fn edit_cell_from_args(&mut self, args: &[String]) -> CsvToolResult<()> {
        if args.is_empty() {
            return Err(CsvToolError::Command("Edit needs coordinate".to_string()));
        }

        let (row, column) = args[0].split_once(',').ok_or_else(|| {
            CsvToolError::Command(
                "Cell coordinate should be in a form of \"row,column\"".to_string(),
            )
        })?;
        let row = parse_row_number(row)?;
        let column = self.resolve_column(column)?;
        let value = args[1..].join(" ");

        self.edit_cell(row, &column, &value)?;
        self.log(&format!(
            "Cell \"({},{})\" content changed to \"{}\"\n",
            row, column, value
        ))?;
        Ok(())
    }

    fn edit_draft_from_args(&mut self, args: &[String]) -> CsvToolResult<()> {
        if args.is_empty() {
            return Err(CsvToolError::Command("Draft needs a column".to_string()));
        }
        let column = self.resolve_column(&args[0])?;
        let value = args[1..].join(" ");

        self.edit_draft(&column, &value)?;
        self.log(&format!("Draft \"{}\" set to \"{}\"\n", column, value))?;
        Ok(())
    }

    fn delete_row_from_args(&mut self, args: &[String]) -> CsvToolResult<()> {
        if args.is_empty() {
            return Err(CsvToolError::Command(
                "Delete-row needs row number".to_string(),
            ));
        }
        let row = parse_row_number(&args[0])?;
        self.delete_row(row)?;
        self.log(&format!("A row removed from \"{}\"\n", row))?;
        Ok(())
    }

    #[cfg(feature = "cli")]
    fn print_help_from_args(&mut self, args: &[String]) -> CsvToolResult<()> {
        if args.is_empty() {
            help::print_help_text()?;
        } else {
            help::print_command_help(&CommandType::from_str(&args[0]))?;
        }
        Ok(())
    }

    /// Run commands from a script file
    ///
    /// Commands are separated by lines or semicolons. Lines starting with '#'
    /// are ignored. Execution stops at the first failure.
    pub fn execute_from_file(&mut self, args: &[String]) -> CsvToolResult<()> {
        if args.is_empty() {
            return Err(CsvToolError::Command(
                "Execute needs a file to read from".to_string(),
            ));
        }
        if self.execute_depth >= MAX_EXECUTE_DEPTH {
            return Err(CsvToolError::Command(format!(
                "Execute is nested deeper than {} levels",
                MAX_EXECUTE_DEPTH
            )));
        }
        let file = &args[0];
        let content = std::fs::read_to_string(file).map_err(|err| {
            CsvToolError::io_error(
                err,
                &format!("Failed to read file \"{}\" for execution", file),
            )
        })?;
        self.execute_depth += 1;
        let result = self.execute_script(&content);
        self.execute_depth -= 1;
        result
    }

    pub fn execute_script(&mut self, script: &str) -> CsvToolResult<()> {
        for (idx, line) in script.lines().enumerate() {
            if line.trim_start().starts_with('#') {
                continue;
            }
            for comm in utils::split_commands(line) {
                let command = comm.parse::<Command>()?;
                if command.command_type == CommandType::Exit {
                    return Ok(());
                }
                if let Err(err) = self.execute_command(&command) {
                    utils::write_to_stderr(&format!(
                        "Line : {} -> Failed to execute command : \"{}\"\n",
                        idx + 1,
                        comm.trim()
                    ))?;
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Column by name, or by index when no such name exists
    fn resolve_column(&self, src: &str) -> CsvToolResult<String> {
        let headers = self.grid().get_headers();
        if headers.iter().any(|h| h == src) {
            return Ok(src.to_string());
        }
        src.parse::<usize>()
            .ok()
            .and_then(|index| headers.get(index))
            .cloned()
            .ok_or_else(|| CsvToolError::InvalidColumn(format!("Column : \"{}\" is not valid", src)))
    }
}

fn parse_row_number(src: &str) -> CsvToolResult<usize> {
    src.trim()
        .parse::<usize>()
        .map_err(|_| CsvToolError::Command(format!("\"{}\" is not a valid row number", src)))
}
