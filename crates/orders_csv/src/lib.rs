//! CSV integration for ordercheck.
//!
//! This crate loads order tables from CSV files and writes the valid and
//! invalid partitions back out.
//!
//! # Example
//!
//! ```no_run
//! use orders_core::InputConfig;
//! use orders_csv::TableReader;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), orders_csv::CsvError> {
//! let reader = TableReader::from_config(&InputConfig::default());
//! let table = reader.read_path(Path::new("amazon_orders.csv"))?;
//! println!("Loaded {} rows", table.len());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use thiserror::Error;

mod reader;
mod writer;

pub use reader::TableReader;
pub use writer::{
    format_error_count, TableWriter, ERROR_DETAILS_COLUMN, VALIDATION_ERRORS_COLUMN,
};

/// Error types specific to CSV operations.
#[derive(Error, Debug)]
pub enum CsvError {
    /// File could not be opened or created
    #[error("Failed to access '{}': {source}", .path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Input is not well-formed CSV
    #[error("Malformed CSV in '{origin}': {source}")]
    Parse {
        /// Name of the input
        origin: String,
        /// Underlying CSV error
        #[source]
        source: csv::Error,
    },

    /// Input has no header row
    #[error("Input '{0}' is empty: a header row is required")]
    MissingHeader(String),

    /// A column name appears more than once in the header
    #[error("Duplicate column '{0}' in header")]
    DuplicateColumn(String),

    /// A data row has more fields than the header
    #[error("Row on line {line} of '{origin}' has {found} fields, header has {expected}")]
    ExtraFields {
        /// Name of the input
        origin: String,
        /// 1-based line in the input
        line: u64,
        /// Header width
        expected: usize,
        /// Fields found on the row
        found: usize,
    },

    /// Writing an output table failed
    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        /// Destination file
        path: PathBuf,
        /// Underlying CSV error
        #[source]
        source: csv::Error,
    },
}

impl CsvError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(origin: impl Into<String>, source: csv::Error) -> Self {
        Self::Parse {
            origin: origin.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
