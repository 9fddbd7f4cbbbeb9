use tracing::debug;

use crate::error::{CsvToolError, CsvToolResult};
use crate::ingest::Ingested;
use crate::models::Row;

/// Editable session state
///
/// Owns headers, rows and the draft row of the "add new row" form. Every
/// mutation goes through this struct so that each row keeps exactly the
/// header keys.
#[derive(Debug, Default, Clone)]
pub struct Grid {
    headers: Vec<String>,
    rows: Vec<Row>,
    draft: Row,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace headers and rows with freshly ingested data
    ///
    /// This is the only way headers change. A pending draft belongs to the old
    /// schema thus it is dropped.
    pub(crate) fn load(&mut self, data: Ingested) {
        self.headers = data.headers;
        self.rows = data.rows;
        self.draft.clear();
    }

    pub fn get_headers(&self) -> &[String] {
        &self.headers
    }

    pub fn get_rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn get_row(&self, row_index: usize) -> Option<&Row> {
        self.rows.get(row_index)
    }

    pub fn get_row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn get_column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn get_cell(&self, row_index: usize, header: &str) -> Option<&str> {
        self.rows.get(row_index)?.get_value(header)
    }

    pub fn get_draft(&self) -> &Row {
        &self.draft
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn edit_cell(&mut self, row_index: usize, header: &str, value: &str) -> CsvToolResult<()> {
        self.check_header(header)?;
        let len = self.rows.len();
        let row = self
            .rows
            .get_mut(row_index)
            .ok_or(CsvToolError::OutOfRange { index: row_index, len })?;
        row.insert_value(header, value);
        Ok(())
    }

    /// Set a draft value
    ///
    /// Other draft columns may stay unset.
    pub fn edit_draft(&mut self, header: &str, value: &str) -> CsvToolResult<()> {
        self.check_header(header)?;
        self.draft.insert_value(header, value);
        Ok(())
    }

    /// Append draft to the end of rows
    ///
    /// Every column must have been given a value, an empty one included. A
    /// column that was never set blocks the commit.
    pub fn commit_draft(&mut self) -> CsvToolResult<usize> {
        if self.headers.is_empty() {
            return Err(CsvToolError::Validation("No csv is loaded".to_string()));
        }
        if self.draft.len() != self.headers.len() {
            let missing = self
                .headers
                .iter()
                .filter(|h| !self.draft.contains_key(h))
                .map(|h| format!("\"{}\"", h))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(CsvToolError::Validation(format!(
                "Please fill in all fields before adding a new row. Missing : {}",
                missing
            )));
        }
        let row = std::mem::take(&mut self.draft);
        self.rows.push(row);
        debug!(row_count = self.rows.len(), "Draft committed");
        Ok(self.rows.len() - 1)
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    pub fn delete_row(&mut self, row_index: usize) -> CsvToolResult<Row> {
        if row_index >= self.rows.len() {
            return Err(CsvToolError::OutOfRange {
                index: row_index,
                len: self.rows.len(),
            });
        }
        Ok(self.rows.remove(row_index))
    }

    fn check_header(&self, header: &str) -> CsvToolResult<()> {
        if !self.headers.iter().any(|h| h == header) {
            return Err(CsvToolError::InvalidColumn(format!(
                "Column : \"{}\" is not valid",
                header
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs.iter().copied().collect()
    }

    fn grid(rows: Vec<Row>) -> Grid {
        let mut grid = Grid::new();
        grid.load(Ingested {
            headers: vec!["name".to_string(), "age".to_string()],
            rows,
        });
        grid
    }

    fn assert_rows_match_headers(grid: &Grid) {
        for row in grid.get_rows() {
            assert!(row.matches_headers(grid.get_headers()));
        }
    }

    #[test]
    fn test_commit_incomplete_draft_is_rejected() {
        let mut grid = grid(vec![]);
        grid.edit_draft("name", "Alice").unwrap();

        let result = grid.commit_draft();

        assert!(matches!(result, Err(CsvToolError::Validation(_))));
        assert_eq!(grid.get_row_count(), 0);
        assert_eq!(grid.get_draft(), &row(&[("name", "Alice")]));
    }

    #[test]
    fn test_commit_complete_draft_appends_and_resets() {
        let mut grid = grid(vec![row(&[("name", "Bob"), ("age", "25")])]);
        grid.edit_draft("name", "Alice").unwrap();
        grid.edit_draft("age", "30").unwrap();

        assert_eq!(grid.commit_draft().unwrap(), 1);
        assert_eq!(grid.get_row(1), Some(&row(&[("name", "Alice"), ("age", "30")])));
        assert!(grid.get_draft().is_empty());
        assert_rows_match_headers(&grid);
    }

    #[test]
    fn test_commit_accepts_explicit_empty_value() {
        let mut grid = grid(vec![]);
        grid.edit_draft("name", "Alice").unwrap();
        grid.edit_draft("age", "").unwrap();
        assert!(grid.commit_draft().is_ok());
        assert_eq!(grid.get_cell(0, "age"), Some(""));
    }

    #[test]
    fn test_commit_without_loaded_csv_is_rejected() {
        let mut grid = Grid::new();

        let result = grid.commit_draft();

        assert!(matches!(result, Err(CsvToolError::Validation(_))));
        assert_eq!(grid.get_row_count(), 0);
    }

    #[test]
    fn test_edit_draft_unknown_column() {
        let mut grid = grid(vec![]);
        let result = grid.edit_draft("email", "a@b.c");
        assert!(matches!(result, Err(CsvToolError::InvalidColumn(_))));
        assert!(grid.get_draft().is_empty());
    }

    #[test]
    fn test_delete_row_preserves_order() {
        let a = row(&[("name", "A"), ("age", "1")]);
        let b = row(&[("name", "B"), ("age", "2")]);
        let c = row(&[("name", "C"), ("age", "3")]);
        let mut grid = grid(vec![a.clone(), b.clone(), c.clone()]);

        assert_eq!(grid.delete_row(1).unwrap(), b);
        assert_eq!(grid.get_rows(), &[a, c]);
    }

    #[test]
    fn test_delete_row_out_of_range() {
        let mut grid = grid(vec![row(&[("name", "A"), ("age", "1")])]);
        let result = grid.delete_row(1);
        assert!(matches!(
            result,
            Err(CsvToolError::OutOfRange { index: 1, len: 1 })
        ));
        assert_eq!(grid.get_row_count(), 1);
    }

    #[test]
    fn test_edit_cell() {
        let mut grid = grid(vec![row(&[("name", "Alice"), ("age", "30")])]);
        grid.edit_cell(0, "age", "31").unwrap();

        assert_eq!(grid.get_rows(), &[row(&[("name", "Alice"), ("age", "31")])]);
        assert_eq!(grid.get_headers(), &["name", "age"]);
    }

    #[test]
    fn test_edit_cell_rejects_bad_target() {
        let mut grid = grid(vec![row(&[("name", "Alice"), ("age", "30")])]);
        assert!(matches!(
            grid.edit_cell(3, "age", "31"),
            Err(CsvToolError::OutOfRange { index: 3, len: 1 })
        ));
        assert!(matches!(
            grid.edit_cell(0, "email", "x"),
            Err(CsvToolError::InvalidColumn(_))
        ));
        assert_eq!(grid.get_cell(0, "age"), Some("30"));
        assert_rows_match_headers(&grid);
    }

    #[test]
    fn test_mixed_operations_keep_row_schema() {
        let mut grid = grid(vec![
            row(&[("name", "A"), ("age", "1")]),
            row(&[("name", "B"), ("age", "2")]),
        ]);
        grid.edit_cell(1, "name", "Bee").unwrap();
        grid.edit_draft("age", "3").unwrap();
        let _ = grid.commit_draft();
        grid.edit_draft("name", "C").unwrap();
        grid.commit_draft().unwrap();
        grid.delete_row(0).unwrap();
        let _ = grid.edit_cell(5, "age", "9");

        assert_eq!(grid.get_row_count(), 2);
        assert_rows_match_headers(&grid);
    }

    #[test]
    fn test_load_drops_draft() {
        let mut grid = grid(vec![]);
        grid.edit_draft("name", "Alice").unwrap();
        grid.load(Ingested {
            headers: vec!["id".to_string()],
            rows: vec![],
        });
        assert!(grid.get_draft().is_empty());
        assert_eq!(grid.get_headers(), &["id"]);
    }
}
