use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::{CsvToolError, CsvToolResult};
use crate::export::{self, EXPORT_FILE_NAME};
use crate::grid::Grid;
use crate::ingest::{self, Ingested};
use crate::models::Row;
use crate::utils;

/// Handle of a started import
///
/// Only the most recently started import may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestTicket {
    generation: u64,
}

impl IngestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

pub struct Processor {
    pub(crate) file: Option<PathBuf>,
    pub(crate) config: Config,
    pub(crate) execute_depth: usize,
    grid: Grid,
    generation: u64,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            file: None,
            config,
            execute_depth: 0,
            grid: Grid::new(),
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn source_file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Start an import
    ///
    /// Any ticket handed out before this one becomes stale.
    pub fn begin_ingest(&mut self) -> IngestTicket {
        self.generation += 1;
        debug!(generation = self.generation, "Import started");
        IngestTicket {
            generation: self.generation,
        }
    }

    /// Apply the outcome of an import
    ///
    /// Grid is replaced only when the ticket is current and parsing succeeded.
    /// Otherwise grid stays untouched.
    pub fn complete_ingest(
        &mut self,
        ticket: IngestTicket,
        result: CsvToolResult<Ingested>,
    ) -> CsvToolResult<()> {
        if ticket.generation != self.generation {
            warn!(
                ticket = ticket.generation,
                current = self.generation,
                "Discarding superseded import"
            );
            return Err(CsvToolError::Stale {
                ticket: ticket.generation,
                current: self.generation,
            });
        }
        match result {
            Ok(data) => {
                info!(
                    columns = data.headers.len(),
                    rows = data.rows.len(),
                    "Import completed"
                );
                self.grid.load(data);
                Ok(())
            }
            Err(err) => {
                error!(%err, "Error parsing CSV file");
                Err(err)
            }
        }
    }

    pub fn import_from_bytes(&mut self, bytes: &[u8]) -> CsvToolResult<()> {
        let ticket = self.begin_ingest();
        self.complete_ingest(ticket, ingest::ingest(bytes))
    }

    pub fn import_from_file(&mut self, path: &Path) -> CsvToolResult<()> {
        if path.extension().map_or(true, |ext| !ext.eq_ignore_ascii_case("csv")) {
            warn!(path = %path.display(), "Importing a file without csv extension");
        }
        let bytes = std::fs::read(path).map_err(|err| {
            CsvToolError::io_error(err, &format!("Failed to read file \"{}\"", path.display()))
        })?;
        let ticket = self.begin_ingest();
        self.complete_ingest(ticket, ingest::ingest(&bytes))?;
        self.file.replace(path.to_owned());
        Ok(())
    }

    pub fn edit_cell(&mut self, row_index: usize, header: &str, value: &str) -> CsvToolResult<()> {
        self.grid.edit_cell(row_index, header, value)
    }

    pub fn edit_draft(&mut self, header: &str, value: &str) -> CsvToolResult<()> {
        self.grid.edit_draft(header, value)
    }

    pub fn commit_draft(&mut self) -> CsvToolResult<usize> {
        self.grid.commit_draft()
    }

    pub fn clear_draft(&mut self) {
        self.grid.clear_draft();
    }

    pub fn delete_row(&mut self, row_index: usize) -> CsvToolResult<Row> {
        self.grid.delete_row(row_index)
    }

    pub fn get_data_as_text(&self) -> CsvToolResult<String> {
        export::to_csv_string(self.grid.get_headers(), self.grid.get_rows())
    }

    /// Export to given path or to the default file in export directory
    ///
    /// Return : written path
    pub fn export(&self, path: Option<&Path>) -> CsvToolResult<PathBuf> {
        let path = match path {
            Some(path) => path.to_owned(),
            None => self.config.export_dir.join(EXPORT_FILE_NAME),
        };
        export::write_to_file(&path, self.grid.get_headers(), self.grid.get_rows())?;
        Ok(path)
    }

    /// Print a success message unless logs are turned off
    pub(crate) fn log(&self, msg: &str) -> CsvToolResult<()> {
        if self.config.print_logs {
            utils::write_to_stdout(msg)?;
        }
        Ok(())
    }
}
