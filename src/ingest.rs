//! Csv ingestion
//!
//! Converts raw bytes of an uploaded file into headers and rows. The first
//! record is always treated as the header record.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{CsvToolError, CsvToolResult};
use crate::models::Row;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Result of a successful parse
#[derive(Debug, Clone, PartialEq)]
pub struct Ingested {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

/// Parse csv bytes into headers and rows
///
/// Fully blank lines are skipped. Records shorter than the header are padded
/// with empty values and longer records lose their surplus fields, so every
/// returned row has exactly the header keys.
pub fn ingest(bytes: &[u8]) -> CsvToolResult<Ingested> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let raw_headers = reader.headers().map_err(CsvToolError::from_csv)?.clone();
    if raw_headers.is_empty() {
        return Err(CsvToolError::Parse(
            "Given file does not have a header".to_string(),
        ));
    }
    let headers = unique_headers(raw_headers.iter());

    let mut rows = vec![];
    for record in reader.records() {
        let record = record.map_err(CsvToolError::from_csv)?;
        if record.len() != headers.len() {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            warn!(
                line,
                fields = record.len(),
                columns = headers.len(),
                "Record length does not match header"
            );
        }
        rows.push(Row::from_record(&headers, record.iter()));
    }

    debug!(columns = headers.len(), rows = rows.len(), "Parsed csv");
    Ok(Ingested { headers, rows })
}

/// Rename repeated header names as "name_1", "name_2" ...
fn unique_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut headers = vec![];
    for name in raw {
        let mut candidate = name.to_string();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}_{}", name, suffix);
            suffix += 1;
        }
        seen.insert(candidate.clone());
        headers.push(candidate);
    }
    headers
}
