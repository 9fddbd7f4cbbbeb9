use std::path::Path;

use tracing::info;

use crate::error::{CsvToolError, CsvToolResult};
use crate::models::Row;

/// File name used when no export target is given
pub const EXPORT_FILE_NAME: &str = "edited_data.csv";
/// Content type of exported csv
pub const EXPORT_MIME: &str = "text/csv;charset=utf-8;";

/// Serialize rows in header order
///
/// Header record comes first and every record ends with CRLF. Without
/// headers there is nothing to write.
pub fn to_csv_string(headers: &[String], rows: &[Row]) -> CsvToolResult<String> {
    if headers.is_empty() {
        return Ok(String::new());
    }
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(vec![]);

    writer.write_record(headers).map_err(CsvToolError::from_csv)?;
    for row in rows {
        writer
            .write_record(row.to_vector(headers))
            .map_err(CsvToolError::from_csv)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| CsvToolError::io_error(err.into_error(), "Failed to flush csv writer"))?;
    String::from_utf8(bytes).map_err(|err| CsvToolError::Parse(err.to_string()))
}

pub fn write_to_file(path: &Path, headers: &[String], rows: &[Row]) -> CsvToolResult<()> {
    let csv = to_csv_string(headers, rows)?;
    std::fs::write(path, csv.as_bytes()).map_err(|err| {
        CsvToolError::io_error(err, &format!("Failed to write file \"{}\"", path.display()))
    })?;
    info!(path = %path.display(), rows = rows.len(), "Exported csv");
    Ok(())
}
