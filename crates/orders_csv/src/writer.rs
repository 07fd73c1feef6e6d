//! Writing the valid and invalid partitions.

use crate::CsvError;
use csv::WriterBuilder;
use orders_core::{InvalidRow, OutputConfig, RawRow, ValidRow};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Column holding the error-count summary of an invalid row.
pub const VALIDATION_ERRORS_COLUMN: &str = "validation_errors";
/// Optional column listing every failure of an invalid row.
pub const ERROR_DETAILS_COLUMN: &str = "error_details";

/// Renders the error-count annotation, e.g. `"2 error(s)"`.
pub fn format_error_count(count: usize) -> String {
    format!("{} error(s)", count)
}

/// Writes partitions to CSV.
#[derive(Debug, Clone)]
pub struct TableWriter {
    delimiter: u8,
    include_error_details: bool,
}

impl TableWriter {
    /// Creates a comma-separated writer without the details column.
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            include_error_details: false,
        }
    }

    /// Sets the output delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Creates a writer from the output configuration.
    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            include_error_details: config.include_error_details,
            ..Self::new()
        }
    }

    /// Writes valid rows to `path`, creating parent directories.
    ///
    /// Returns the number of rows written.
    pub fn write_valid(
        &self,
        path: &Path,
        headers: &[String],
        rows: &[ValidRow],
    ) -> Result<usize, CsvError> {
        let file = create_file(path)?;
        self.write_valid_to(file, headers, rows)
            .map_err(|e| CsvError::write(path, e))
    }

    /// Writes valid rows to any writer.
    ///
    /// Cells are written as read, in input header order, so extra columns
    /// survive.
    pub fn write_valid_to<W: Write>(
        &self,
        output: W,
        headers: &[String],
        rows: &[ValidRow],
    ) -> Result<usize, csv::Error> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(output);

        let columns = data_columns(headers);
        writer.write_record(&columns)?;
        for row in rows {
            writer.write_record(raw_cells(&columns, &row.raw))?;
        }
        writer.flush()?;

        debug!("Wrote {} valid rows", rows.len());
        Ok(rows.len())
    }

    /// Writes invalid rows to `path`, creating parent directories.
    ///
    /// `headers` is the input header; the original cells are written in that
    /// order followed by the annotation columns.
    pub fn write_invalid(
        &self,
        path: &Path,
        headers: &[String],
        rows: &[InvalidRow],
    ) -> Result<usize, CsvError> {
        let file = create_file(path)?;
        self.write_invalid_to(file, headers, rows)
            .map_err(|e| CsvError::write(path, e))
    }

    /// Writes invalid rows to any writer.
    pub fn write_invalid_to<W: Write>(
        &self,
        output: W,
        headers: &[String],
        rows: &[InvalidRow],
    ) -> Result<usize, csv::Error> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(output);

        let columns = data_columns(headers);

        let mut header_record = columns.clone();
        header_record.push(VALIDATION_ERRORS_COLUMN);
        if self.include_error_details {
            header_record.push(ERROR_DETAILS_COLUMN);
        }
        writer.write_record(&header_record)?;

        for row in rows {
            let mut record = raw_cells(&columns, &row.raw);
            record.push(format_error_count(row.error_count()));
            if self.include_error_details {
                record.push(row.error_details());
            }
            writer.write_record(&record)?;
        }
        writer.flush()?;

        debug!("Wrote {} invalid rows", rows.len());
        Ok(rows.len())
    }
}

impl Default for TableWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Input columns to carry into an output table.
///
/// Annotation columns from an earlier run are replaced, not duplicated.
fn data_columns(headers: &[String]) -> Vec<&str> {
    headers
        .iter()
        .map(String::as_str)
        .filter(|h| *h != VALIDATION_ERRORS_COLUMN && *h != ERROR_DETAILS_COLUMN)
        .collect()
}

/// Cells of `raw` in column order. Absent cells are written empty.
fn raw_cells(columns: &[&str], raw: &RawRow) -> Vec<String> {
    columns
        .iter()
        .map(|c| raw.get(*c).cloned().unwrap_or_default())
        .collect()
}

fn create_file(path: &Path) -> Result<File, CsvError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CsvError::io(parent, e))?;
    }
    File::create(path).map_err(|e| CsvError::io(path, e))
}
