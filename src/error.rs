use std::path::PathBuf;

use thiserror::Error;

use crate::units::ParseUnitsError;

/// Errors produced while reading and parsing sales data.
#[derive(Debug, Error)]
pub enum SalesError {
    /// The input file could not be opened or read.
    #[error("reading {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A data row has fewer than [`crate::MONTH_COUNT`] sales figures.
    #[error("missing data in row {row:?}: expected {expected} sales figures, found {found}")]
    MissingData {
        row: Vec<String>,
        expected: usize,
        found: usize,
    },

    /// A sales figure is not an integer, even after stripping separators.
    #[error("invalid data format in row {row:?}: bad sales figure {field:?}")]
    InvalidFormat {
        row: Vec<String>,
        field: String,
        #[source]
        source: ParseUnitsError,
    },
}

pub type Result<T> = std::result::Result<T, SalesError>;
