pub mod command_loop;
pub mod help;
pub mod logging;
pub mod parse;

pub use command_loop::CommandLoop;
pub use parse::{Flag, FlagType, Parser};
