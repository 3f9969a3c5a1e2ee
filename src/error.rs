//! Error types for Rocketplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Rocketplot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur in Rocketplot.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Column missing from the table header.
    #[error("Column not found: {column}")]
    MissingColumn {
        /// Requested column name.
        column: String,
    },

    /// A cell in a numeric column could not be parsed.
    #[error("Invalid value {value:?} in column {column} at row {row}")]
    InvalidValue {
        /// Column the cell belongs to.
        column: String,
        /// Data row number, starting at 1 for the first row after the header.
        row: usize,
        /// Raw cell text.
        value: String,
    },

    /// Malformed CSV input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PlotError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a MissingColumn error.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }
}
