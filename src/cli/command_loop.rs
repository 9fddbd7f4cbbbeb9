use crate::cli::parse::{FlagType, Parser};
use crate::config::Config;
use crate::{cli::help, utils, Command, CommandType, CsvToolResult, Processor};
use std::path::PathBuf;

const SCRIPT_EXTENSION: &str = "csvt";

pub fn start_main_loop() -> CsvToolResult<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let flags = Parser::new().parse_from_vec(&args[..]);
    let mut config = Config::from_env();

    // Set temporary variables
    let mut command_exit = false;
    let mut import = None;
    let mut execute = None;
    let mut command = None;

    for item in flags.iter() {
        match item.ftype {
            FlagType::Version => help::print_version(),
            FlagType::Help => help::print_binary_help_text()?,
            FlagType::Argument => {
                // If given file is a script, execute it
                let path = std::path::Path::new(&item.option);
                if path.extension().is_some_and(|ext| ext == SCRIPT_EXTENSION) {
                    execute.replace(item.option.clone());
                    command_exit = true;
                } else {
                    import.replace(item.option.clone());
                }
            }
            FlagType::Command => {
                if !item.option.is_empty() {
                    command.replace(item.option.clone());
                    command_exit = true;
                } else {
                    utils::write_to_stderr("WRN : Command is empty thus not executed\n")?;
                }
            }
            FlagType::Out => {
                if !item.option.is_empty() {
                    config.export_dir = PathBuf::from(&item.option);
                } else {
                    utils::write_to_stderr("WRN : Out directory is empty thus not applied\n")?;
                }
            }
            FlagType::NoLog => config.print_logs = false,
            FlagType::None => {
                utils::write_to_stderr(&format!("WRN : Unknown flag \"{}\"\n", item.option))?
            }
        }

        if item.early_exit {
            return Ok(());
        }
    }

    let mut command_loop = CommandLoop::new(config);

    if let Some(import) = import.as_ref() {
        feed_import(import, &mut command_loop)?;
    }
    if let Some(execute) = execute.as_ref() {
        feed_execute(execute, &mut command_loop)?;
    }
    if let Some(cmd) = command.as_ref() {
        feed_command(cmd, &mut command_loop)?;
    }

    if command_exit {
        return Ok(());
    }
    // Handle error inside loop
    if let Some(err) = command_loop.start_loop().err() {
        eprintln!("{}", err);
    }

    Ok(())
}

fn feed_import(file: &str, command_loop: &mut CommandLoop) -> CsvToolResult<()> {
    let command = Command {
        command_type: CommandType::Import,
        arguments: vec![file.to_string()],
    };
    if let Err(err) = command_loop.feed_command(&command, true) {
        eprintln!("{}", err);
    }
    Ok(())
}

fn feed_execute(file: &str, command_loop: &mut CommandLoop) -> CsvToolResult<()> {
    let command = Command {
        command_type: CommandType::Execute,
        arguments: vec![file.to_string()],
    };
    if let Err(err) = command_loop.feed_command(&command, true) {
        eprintln!("{}", err);
    }
    Ok(())
}

fn feed_command(commands: &str, command_loop: &mut CommandLoop) -> CsvToolResult<()> {
    for command in utils::split_commands(commands) {
        let command = command.parse::<Command>()?;
        if command.command_type == CommandType::Exit {
            break;
        }
        if let Err(err) = command_loop.feed_command(&command, true) {
            eprintln!("{}", err);
            return Ok(());
        }
    }

    Ok(())
}

pub struct CommandLoop {
    processor: Processor,
}

impl CommandLoop {
    pub fn new(config: Config) -> Self {
        Self {
            processor: Processor::with_config(config),
        }
    }

    pub fn feed_command(&mut self, command: &Command, panic: bool) -> CsvToolResult<()> {
        self.execute_command(command, panic)
    }

    /// Start a loop until exit
    fn start_loop(&mut self) -> CsvToolResult<()> {
        let mut command = Command::default();
        utils::write_to_stdout("Csvtool, a csv editor. Type \"help\" for commands\n")?;
        let mut read_byte = 1;
        while read_byte != 0 && CommandType::Exit != command.command_type {
            utils::write_to_stdout(">> ")?;
            let mut input = String::new();
            read_byte = utils::read_stdin_until_eof(true, &mut input)?;
            if input.trim().is_empty() {
                continue;
            }
            command = match input.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    utils::write_to_stderr(&(err.to_string() + "\n"))?;
                    continue;
                }
            };
            self.execute_command(&command, false)?;
        }
        Ok(())
    }

    /// Errors are printed instead of returned unless panic is set
    fn execute_command(&mut self, command: &Command, panic: bool) -> CsvToolResult<()> {
        tracing::debug!(?command, "Executing command");

        if let Err(err) = self.processor.execute_command(command) {
            if panic {
                return Err(err);
            } else {
                utils::write_to_stderr(&(err.to_string() + "\n"))?;
            }
        }
        Ok(())
    }
}
