//! CSV trajectory reader.

use super::TrajectoryTable;
use crate::error::{PlotError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Trajectory CSV reader.
#[derive(Debug)]
pub struct TrajectoryReader;

impl TrajectoryReader {
    /// Read a comma-separated file with a header row.
    pub fn read_file(path: &Path) -> Result<TrajectoryTable> {
        let file = File::open(path).map_err(|e| PlotError::file_open(path.to_path_buf(), e))?;
        let table = Self::read_from(file, path)?;

        tracing::debug!(
            "Read {} rows with columns {:?} from {}",
            table.row_count(),
            table.headers(),
            path.display()
        );

        Ok(table)
    }

    /// Read CSV data from any reader. `path` is recorded on the table.
    pub fn read_from<R: Read>(source: R, path: &Path) -> Result<TrajectoryTable> {
        // The simulator pads every field after the first with spaces.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(source);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let mut columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

        for record in reader.records() {
            let record = record?;
            for (column, cell) in columns.iter_mut().zip(record.iter()) {
                column.push(cell.to_string());
            }
        }

        Ok(TrajectoryTable::new(path.to_path_buf(), headers, columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{X_COLUMN, Y_COLUMN};
    use std::io::Write;

    #[test]
    fn reads_padded_simulator_output() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Time(s),X(m),Y(m),Vel-X(m/s),Vel-Y(m/s),Fuel(kg),Mass(kg)").unwrap();
        writeln!(file, "0.00,   0.00,   63780.00,   0.00,   0.00,   500.00,   1000.00").unwrap();
        writeln!(file, "0.10,   1.25,   63781.50,   12.50,   15.00,   495.00,   1000.00").unwrap();
        file.flush().unwrap();

        let table = TrajectoryReader::read_file(file.path()).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.headers().len(), 7);
        assert_eq!(table.numeric_column(X_COLUMN).unwrap(), vec![0.0, 1.25]);
        assert_eq!(table.numeric_column(Y_COLUMN).unwrap(), vec![63780.0, 63781.5]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rocket_simulation.csv");

        match TrajectoryReader::read_file(&path).unwrap_err() {
            PlotError::FileOpen { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn header_only_file_has_no_rows() {
        let table =
            TrajectoryReader::read_from("X(m),Y(m)\n".as_bytes(), Path::new("mem")).unwrap();
        assert_eq!(table.row_count(), 0);
        assert!(table.has_column(Y_COLUMN));
        assert!(table.numeric_column(X_COLUMN).unwrap().is_empty());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = TrajectoryReader::read_from("X(m),Y(m)\n1,2\n3\n".as_bytes(), Path::new("mem"))
            .unwrap_err();
        assert!(matches!(err, PlotError::Csv(_)));
    }
}
