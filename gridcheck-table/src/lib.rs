//! Column-oriented reads over captured table snapshots.
//!
//! A [`TableSnapshot`] is a point-in-time copy of a rendered table: the header
//! labels in visual order plus the body rows' cell texts. The driver layer
//! captures one whenever a scenario needs table data; this crate only answers
//! queries against it and holds no state between calls.
//!
//! Header matching is forgiving about presentation: labels are compared after
//! trimming surrounding whitespace and lowercasing, so `"  Status "` resolves
//! the column rendered as `"STATUS"`. Resolution looks at headers only, never
//! at body content.
//!
//! ```rust
//! use gridcheck_table::TableSnapshot;
//!
//! let table = TableSnapshot::new(
//!     vec!["ID".into(), "Name".into(), "Status".into()],
//!     vec![
//!         vec!["1".into(), "Alice".into(), "Active".into()],
//!         vec!["2".into(), "Bob".into(), "Inactive".into()],
//!     ],
//! );
//!
//! assert_eq!(table.column("name").unwrap(), vec!["Alice", "Bob"]);
//! assert_eq!(table.cell("Status", 1).unwrap(), "Inactive");
//! ```
use thiserror::Error;

/// Errors produced while querying a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The requested label matched no header, in any case/whitespace variant.
    #[error("column \"{0}\" not found")]
    ColumnNotFound(String),

    /// An explicit row index fell outside the captured body.
    #[error("row index {index} is out of range ({rows} rows)")]
    RowIndexOutOfRange { index: usize, rows: usize },
}

/// Resolve a header label to its positional column index.
///
/// Both sides are normalised (trim + lowercase) before comparison. The scan is
/// left to right, so if a table renders duplicate header labels the first
/// occurrence wins.
pub fn resolve_column_index(headers: &[String], label: &str) -> Result<usize, TableError> {
    let wanted = normalize(label);
    headers
        .iter()
        .position(|h| normalize(h) == wanted)
        .ok_or_else(|| TableError::ColumnNotFound(label.to_string()))
}

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Read-only copy of a rendered table, captured at query time.
///
/// Rows are not guaranteed to all have the same width; a partially rendered
/// table can legitimately produce short rows and queries treat the missing
/// cells as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSnapshot {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableSnapshot {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Header labels in visual column order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of captured body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every row's cell under the given header, preserving row order.
    ///
    /// Rows too short to reach the resolved column contribute an empty string
    /// rather than an error.
    pub fn column(&self, label: &str) -> Result<Vec<String>, TableError> {
        let idx = resolve_column_index(&self.headers, label)?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(idx).cloned().unwrap_or_default())
            .collect())
    }

    /// The single cell at `row_index` under the given header.
    pub fn cell(&self, label: &str, row_index: usize) -> Result<String, TableError> {
        let idx = resolve_column_index(&self.headers, label)?;
        if row_index >= self.rows.len() {
            return Err(TableError::RowIndexOutOfRange {
                index: row_index,
                rows: self.rows.len(),
            });
        }
        Ok(self.rows[row_index].get(idx).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> TableSnapshot {
        TableSnapshot::new(
            strings(&["ID", "Name", "Status"]),
            vec![
                strings(&["1", "Alice", "Active"]),
                strings(&["2", "Bob", "Inactive"]),
            ],
        )
    }

    #[test]
    fn resolves_case_and_whitespace_insensitively() {
        let headers = strings(&["  Telegram ID ", "Username", "TCA$H Balance"]);
        assert_eq!(resolve_column_index(&headers, "telegram id").unwrap(), 0);
        assert_eq!(resolve_column_index(&headers, " USERNAME").unwrap(), 1);
        assert_eq!(resolve_column_index(&headers, "tca$h balance").unwrap(), 2);
    }

    #[test]
    fn duplicate_headers_resolve_to_first_occurrence() {
        let headers = strings(&["Status", "Name", "status"]);
        assert_eq!(resolve_column_index(&headers, "Status").unwrap(), 0);
    }

    #[test]
    fn unknown_label_is_column_not_found() {
        let err = resolve_column_index(&strings(&["ID", "Name"]), "Missing").unwrap_err();
        assert_eq!(err, TableError::ColumnNotFound("Missing".into()));
    }

    #[test]
    fn column_preserves_row_order_and_length() {
        let table = sample();
        assert_eq!(table.column("name").unwrap(), vec!["Alice", "Bob"]);
        assert_eq!(table.column("ID").unwrap().len(), table.row_count());
    }

    #[test]
    fn column_on_empty_body_returns_empty() {
        let table = TableSnapshot::new(strings(&["ID", "Name"]), vec![]);
        assert!(table.column("Name").unwrap().is_empty());
    }

    #[test]
    fn short_rows_yield_empty_cells_instead_of_failing() {
        let table = TableSnapshot::new(
            strings(&["ID", "Name", "Status"]),
            vec![strings(&["1", "Alice", "Active"]), strings(&["2"])],
        );
        assert_eq!(table.column("Status").unwrap(), vec!["Active", ""]);
        assert_eq!(table.cell("Status", 1).unwrap(), "");
    }

    #[test]
    fn cell_matches_column_at_every_valid_index() {
        let table = sample();
        let all = table.column("Status").unwrap();
        for (i, value) in all.iter().enumerate() {
            assert_eq!(&table.cell("Status", i).unwrap(), value);
        }
        assert_eq!(table.cell("Status", 1).unwrap(), "Inactive");
    }

    #[test]
    fn out_of_range_row_index_is_rejected() {
        let table = sample();
        assert_eq!(
            table.cell("ID", 5).unwrap_err(),
            TableError::RowIndexOutOfRange { index: 5, rows: 2 }
        );
    }

    #[test]
    fn missing_column_reported_before_row_bounds() {
        let table = sample();
        assert_eq!(
            table.cell("Missing", 99).unwrap_err(),
            TableError::ColumnNotFound("Missing".into())
        );
    }
}
