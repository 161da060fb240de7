use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Result, SalesError};

/// One CSV record, as raw text fields.
pub type Row = Vec<String>;

/// Reads CSV rows from a file.
///
/// Every row is returned, including the first (header) row; deciding what to
/// do with the header is up to the caller.
#[derive(Debug, Clone)]
pub struct FileReader {
    path: PathBuf,
}

impl FileReader {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all rows from the file, in file order.
    ///
    /// This never fails: if the file cannot be opened or read, a warning is
    /// logged and no rows are returned. Use [`Self::try_read`] to get the
    /// error instead.
    #[must_use]
    pub fn read(&self) -> Vec<Row> {
        self.try_read().unwrap_or_else(|e| {
            warn!("error reading file: {e}");
            Vec::new()
        })
    }

    /// Reads all rows from the file, in file order.
    ///
    /// Rows may have differing numbers of fields. Quoted fields may contain
    /// commas, and whitespace around each field is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`SalesError::FileAccess`] if the file cannot be opened, or if
    /// any record in it cannot be read.
    pub fn try_read(&self) -> Result<Vec<Row>> {
        let access = |source: csv::Error| SalesError::FileAccess {
            path: self.path.clone(),
            source,
        };
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(access)?;
        let mut rows: Vec<Row> = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(access)?;
            rows.push(record.iter().map(String::from).collect());
        }
        debug!("read {} rows from {}", rows.len(), self.path.display());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_fn_keeps_header_and_file_order() {
        let rows = FileReader::new("testdata/car_sales.csv").read();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0][0], "Manufacturer");
        assert_eq!(rows[1][0], "Toyota");
        assert_eq!(rows[3][0], "Honda");
    }

    #[test]
    fn read_fn_unquotes_fields_containing_separators() {
        let rows = FileReader::new("testdata/car_sales.csv").read();
        assert_eq!(rows[1].len(), 9);
        assert_eq!(rows[1][1], "1,000");
    }

    #[test]
    fn read_fn_returns_no_rows_for_missing_file() {
        let rows = FileReader::new("testdata/no_such_file.csv").read();
        assert!(rows.is_empty());
    }

    #[test]
    fn try_read_fn_returns_file_access_error_for_missing_file() {
        let err = FileReader::new("testdata/no_such_file.csv")
            .try_read()
            .unwrap_err();
        assert!(
            matches!(err, SalesError::FileAccess { ref path, .. } if path.ends_with("no_such_file.csv")),
            "{err:?}"
        );
    }

    #[test]
    fn try_read_fn_accepts_rows_of_differing_lengths() {
        let rows = FileReader::new("testdata/missing_data.csv")
            .try_read()
            .unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].len(), 5);
    }
}
