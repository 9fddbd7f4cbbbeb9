//! Csvtool, import, edit and export csv rows
//!
//! ### Install
//!
//! ```bash
//! cargo install csvtool --locked
//! ```
//!
//! ### Binary usage
//!
//! ```bash
//! # Print help
//! csvtool --help
//!
//! # Start a prompt, optionally with initial import
//! csvtool
//! csvtool file.csv
//!
//! # Execute commands without opening a prompt
//! csvtool file.csv --command 'edit 0,age 31;export'
//!
//! # Execute a script, ".csvt" extension is required
//! csvtool script.csvt
//! ```
//!
//! ### Prompt commands
//!
//! ```bash
//! # Import a file
//! >> import people.csv
//!
//! # Print rows
//! >> print
//!
//! # Edit a cell by row number and column name or number
//! >> edit 0,age 31
//!
//! # Fill every column of a new row then append it
//! >> draft name 'Carol Smith'
//! >> draft age 41
//! >> add-row
//!
//! # Delete a row
//! >> delete-row 1
//!
//! # Export to "edited_data.csv" or to a given file
//! >> export
//! >> export other.csv
//! ```
//!
//! ### Library usage
//!
//! ```
//! use csvtool::Processor;
//!
//! let mut processor = Processor::new();
//! processor.import_from_bytes(b"name,age\nAlice,30\n").unwrap();
//! processor.edit_cell(0, "age", "31").unwrap();
//! processor.edit_draft("name", "Bob").unwrap();
//! processor.edit_draft("age", "25").unwrap();
//! processor.commit_draft().unwrap();
//! assert_eq!(
//!     processor.get_data_as_text().unwrap(),
//!     "name,age\r\nAlice,31\r\nBob,25\r\n"
//! );
//! ```

#[cfg(test)]
mod test;

#[cfg(feature = "cli")]
pub mod cli;

pub(crate) mod command;
pub(crate) mod utils;

pub mod config;
pub(crate) mod error;
pub mod export;
pub(crate) mod grid;
pub mod ingest;
pub(crate) mod models;
pub(crate) mod processor;
pub mod view;

// ----------
// RE-EXPORTS

#[cfg(feature = "cli")]
pub use cli::command_loop::start_main_loop;
pub use command::{Command, CommandType};
pub use config::Config;
pub use error::{CsvToolError, CsvToolResult, IoErrorWithMeta};
pub use export::{EXPORT_FILE_NAME, EXPORT_MIME};
pub use grid::Grid;
pub use ingest::Ingested;
pub use models::Row;
pub use processor::{IngestTicket, Processor};
