//! Loading order tables from CSV.

use crate::CsvError;
use csv::{ReaderBuilder, Trim};
use orders_core::{InputConfig, RawRow};
use orders_validator::OrderTable;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Reads a CSV file with a header row into an [`OrderTable`].
///
/// A short row keeps its trailing cells absent, so the rules see them as
/// empty. A row wider than the header, or any I/O or parse error, is returned
/// before a single row is handed out.
#[derive(Debug, Clone)]
pub struct TableReader {
    delimiter: u8,
    trim: bool,
}

impl TableReader {
    /// Creates a reader for comma-separated input without trimming.
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            trim: false,
        }
    }

    /// Creates a reader from the input configuration.
    pub fn from_config(config: &InputConfig) -> Self {
        Self {
            delimiter: config.delimiter_byte(),
            trim: config.trim,
        }
    }

    /// Reads the table at `path`.
    pub fn read_path(&self, path: &Path) -> Result<OrderTable, CsvError> {
        info!("Loading CSV file: {}", path.display());

        let file = File::open(path).map_err(|e| CsvError::io(path, e))?;
        let table = self.read_from(file, &path.display().to_string())?;

        info!("Loaded {} rows", table.len());
        Ok(table)
    }

    /// Reads a table from any reader. `origin` names the input in errors.
    pub fn read_from<R: Read>(&self, input: R, origin: &str) -> Result<OrderTable, CsvError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .from_reader(input);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| CsvError::parse(origin, e))?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').to_string())
            .collect();

        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(CsvError::MissingHeader(origin.to_string()));
        }

        let mut seen = HashSet::new();
        for header in &headers {
            if !seen.insert(header.as_str()) {
                return Err(CsvError::DuplicateColumn(header.clone()));
            }
        }
        debug!("Header columns: {}", headers.join(", "));

        let mut table = OrderTable::new(headers.clone());
        for result in reader.records() {
            let record = result.map_err(|e| CsvError::parse(origin, e))?;
            if record.len() > headers.len() {
                return Err(CsvError::ExtraFields {
                    origin: origin.to_string(),
                    line: record.position().map(|p| p.line()).unwrap_or_default(),
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            let row: RawRow = headers
                .iter()
                .cloned()
                .zip(record.iter().map(str::to_string))
                .collect();
            table.add_row(row);
        }

        Ok(table)
    }
}

impl Default for TableReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEADER: &str = "order_id,qty,amount,currency,ship_country,date\n";

    #[test]
    fn test_read_rows_in_order() {
        let data = format!(
            "{HEADER}A1,2,100.0,INR,IN,01-15-24\nA2,-1,50.0,USD,IN,01-15-24\n"
        );
        let table = TableReader::new().read_from(data.as_bytes(), "inline").unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.headers(),
            ["order_id", "qty", "amount", "currency", "ship_country", "date"]
        );
        assert_eq!(table.get_row(0).unwrap()["order_id"], "A1");
        assert_eq!(table.get_row(1).unwrap()["currency"], "USD");
    }

    #[test]
    fn test_header_only() {
        let table = TableReader::new().read_from(HEADER.as_bytes(), "inline").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.headers().len(), 6);
    }

    #[test]
    fn test_empty_input_is_fatal() {
        let result = TableReader::new().read_from("".as_bytes(), "inline");
        assert!(matches!(result, Err(CsvError::MissingHeader(_))));
    }

    #[test]
    fn test_short_row_leaves_cells_absent() {
        let data = format!("{HEADER}A1,2,100.0,INR\nA2,1,5.0,INR,IN,01-15-24\n");
        let table = TableReader::new().read_from(data.as_bytes(), "inline").unwrap();

        assert_eq!(table.len(), 2);
        let short = table.get_row(0).unwrap();
        assert_eq!(short["currency"], "INR");
        assert!(!short.contains_key("ship_country"));
        assert!(!short.contains_key("date"));
        assert_eq!(table.get_row(1).unwrap().len(), 6);
    }

    #[test]
    fn test_wide_row_is_fatal() {
        let data = format!("{HEADER}A1,2,100.0,INR,IN,01-15-24,extra\n");
        let result = TableReader::new().read_from(data.as_bytes(), "inline");
        assert!(matches!(
            result,
            Err(CsvError::ExtraFields { line: 2, expected: 6, found: 7, .. })
        ));
    }

    #[test]
    fn test_duplicate_column_is_fatal() {
        let data = "order_id,qty,qty\nA1,1,2\n";
        let result = TableReader::new().read_from(data.as_bytes(), "inline");
        assert!(matches!(result, Err(CsvError::DuplicateColumn(c)) if c == "qty"));
    }

    #[test]
    fn test_quoted_and_empty_cells() {
        let data = format!("{HEADER}\"A,1\",,\"1,000\",INR,IN,01-15-24\n");
        let table = TableReader::new().read_from(data.as_bytes(), "inline").unwrap();
        let row = table.get_row(0).unwrap();
        assert_eq!(row["order_id"], "A,1");
        assert_eq!(row["qty"], "");
        assert_eq!(row["amount"], "1,000");
    }

    #[test]
    fn test_trim_and_delimiter_from_config() {
        let config = InputConfig {
            delimiter: ';',
            trim: true,
            ..Default::default()
        };
        let data = "order_id;currency\n A1 ; INR \n";
        let table = TableReader::from_config(&config)
            .read_from(data.as_bytes(), "inline")
            .unwrap();
        assert_eq!(table.get_row(0).unwrap()["order_id"], "A1");
        assert_eq!(table.get_row(0).unwrap()["currency"], "INR");
    }

    #[test]
    fn test_byte_order_mark_stripped() {
        let data = format!("\u{feff}{HEADER}");
        let table = TableReader::new().read_from(data.as_bytes(), "inline").unwrap();
        assert_eq!(table.headers()[0], "order_id");
    }

    #[test]
    fn test_missing_file() {
        let result = TableReader::new().read_path(Path::new("no/such/orders.csv"));
        assert!(matches!(result, Err(CsvError::Io { .. })));
    }
}
