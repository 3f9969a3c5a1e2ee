//! Data reading and representation.
//!
//! This module handles reading trajectory CSV files into a table keyed by
//! column name.

mod reader;
mod table;

pub use reader::TrajectoryReader;
pub use table::{TrajectoryTable, X_COLUMN, Y_COLUMN};
