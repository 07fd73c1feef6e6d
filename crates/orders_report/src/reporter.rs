//! Persistence of the two partitions.

use orders_core::{CheckConfig, OutputConfig};
use orders_csv::{CsvError, TableWriter};
use orders_validator::Partition;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// What happened to one output destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutputStatus {
    /// The file was written with `rows` data rows.
    Written { path: PathBuf, rows: usize },
    /// The partition was empty; the file was not touched.
    Skipped { path: PathBuf },
}

impl OutputStatus {
    pub fn path(&self) -> &Path {
        match self {
            OutputStatus::Written { path, .. } | OutputStatus::Skipped { path } => path,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, OutputStatus::Written { .. })
    }
}

/// Outcome of persisting both partitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersistReport {
    pub valid: OutputStatus,
    pub invalid: OutputStatus,
}

/// Writes the valid and invalid partitions to their destinations.
#[derive(Debug, Clone)]
pub struct Reporter {
    valid_path: PathBuf,
    invalid_path: PathBuf,
    writer: TableWriter,
}

impl Reporter {
    /// Creates a reporter writing with the given delimiter.
    pub fn new(outputs: &OutputConfig, delimiter: u8) -> Self {
        Self {
            valid_path: outputs.valid.clone(),
            invalid_path: outputs.invalid.clone(),
            writer: TableWriter::from_config(outputs).with_delimiter(delimiter),
        }
    }

    /// Creates a reporter that mirrors the input delimiter.
    pub fn from_config(config: &CheckConfig) -> Self {
        Self::new(&config.outputs, config.input.delimiter_byte())
    }

    pub fn valid_path(&self) -> &Path {
        &self.valid_path
    }

    pub fn invalid_path(&self) -> &Path {
        &self.invalid_path
    }

    /// Persists both partitions. An empty partition produces no file.
    ///
    /// `headers` is the input header; both tables keep its column order.
    pub fn persist(&self, headers: &[String], partition: &Partition) -> Result<PersistReport, CsvError> {
        let valid = if partition.valid.is_empty() {
            OutputStatus::Skipped {
                path: self.valid_path.clone(),
            }
        } else {
            let rows = self
                .writer
                .write_valid(&self.valid_path, headers, &partition.valid)?;
            info!("Saved {} valid rows to {}", rows, self.valid_path.display());
            OutputStatus::Written {
                path: self.valid_path.clone(),
                rows,
            }
        };

        let invalid = if partition.invalid.is_empty() {
            OutputStatus::Skipped {
                path: self.invalid_path.clone(),
            }
        } else {
            let rows = self
                .writer
                .write_invalid(&self.invalid_path, headers, &partition.invalid)?;
            info!("Saved {} invalid rows to {}", rows, self.invalid_path.display());
            OutputStatus::Written {
                path: self.invalid_path.clone(),
                rows,
            }
        };

        Ok(PersistReport { valid, invalid })
    }
}
