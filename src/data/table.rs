//! In-memory trajectory table.

use crate::error::{PlotError, Result};
use std::path::PathBuf;

/// Column holding the first position coordinate.
pub const X_COLUMN: &str = "X(m)";
/// Column holding the second position coordinate.
pub const Y_COLUMN: &str = "Y(m)";

/// A loaded CSV table, keyed by column name.
///
/// Cells are kept as trimmed text and converted to numbers on lookup, so
/// columns that are never plotted may hold anything.
#[derive(Debug, Clone)]
pub struct TrajectoryTable {
    /// Path to the source file.
    pub file_path: PathBuf,
    headers: Vec<String>,
    columns: Vec<Vec<String>>,
}

impl TrajectoryTable {
    /// Create a table from a header row and column-major cells.
    pub fn new(file_path: PathBuf, headers: Vec<String>, columns: Vec<Vec<String>>) -> Self {
        Self {
            file_path,
            headers,
            columns,
        }
    }

    /// Column names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map(Vec::len).unwrap_or(0)
    }

    /// Check whether a column exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Raw cell text for a column.
    pub fn column(&self, name: &str) -> Result<&[String]> {
        self.headers
            .iter()
            .position(|h| h == name)
            .map(|idx| self.columns[idx].as_slice())
            .ok_or_else(|| PlotError::missing_column(name))
    }

    /// Parse a column as `f64` values, in row order.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        self.column(name)?
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                cell.parse::<f64>().map_err(|_| PlotError::InvalidValue {
                    column: name.to_string(),
                    row: i + 1,
                    value: cell.clone(),
                })
            })
            .collect()
    }
}
