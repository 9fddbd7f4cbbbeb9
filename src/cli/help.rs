use crate::utils;
use crate::{CommandType, CsvToolResult};

const BINARY_HELP: &str = include_str!("../help/bin.txt");
const HELP_TEXT: &str = include_str!("../help/all.txt");

pub fn print_binary_help_text() -> CsvToolResult<()> {
    utils::write_to_stdout(BINARY_HELP)
}

pub fn print_help_text() -> CsvToolResult<()> {
    utils::write_to_stdout(HELP_TEXT)
}

pub fn print_version() {
    println!("csvtool, {}", env!("CARGO_PKG_VERSION"));
}

pub fn print_command_help(command: &CommandType) -> CsvToolResult<()> {
    let out = match command {
        CommandType::Version => "version (v)\n    Print version\n",
        CommandType::Help => "help (h) [command]\n    Print help, optionally for a single command\n",
        CommandType::Import => {
            "import (i) <file>\n    Import a csv file. First record is used as header\n"
        }
        CommandType::Export => {
            "export (x) [file]\n    Export to a file. Defaults to \"edited_data.csv\" in export directory\n"
        }
        CommandType::Print => "print (p)\n    Print rows with row and column numbers\n",
        CommandType::PrintDraft => "print-draft (pd)\n    Print values of the new row draft\n",
        CommandType::EditCell => {
            "edit (e) <row>,<column> [value]\n    Set a cell. Column is a name or a column number\n"
        }
        CommandType::EditDraft => {
            "draft (d) <column> [value]\n    Set a value of the new row draft\n"
        }
        CommandType::AddRow => {
            "add-row (ar, commit)\n    Append the draft as a new row. Every column should be set\n"
        }
        CommandType::ClearDraft => "clear-draft (cd)\n    Discard the new row draft\n",
        CommandType::DeleteRow => "delete-row (dr) <row>\n    Remove a row\n",
        CommandType::Execute => {
            "execute (ex) <file>\n    Execute commands from a file, separated by lines or ';'\n"
        }
        CommandType::Exit => "exit (quit, q)\n    Exit the prompt\n",
        CommandType::None(_) => "No such command to print a help message.\n",
    };
    utils::write_to_stdout(out)
}
