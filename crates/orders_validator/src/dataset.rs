//! Order table representation for validation.
//!
//! An [`OrderTable`] is the header row plus the raw data rows, in input order.

use orders_core::{RawRow, ORDER_COLUMNS};

/// An input table of raw rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderTable {
    /// Column names in header order
    headers: Vec<String>,

    /// The data rows
    rows: Vec<RawRow>,
}

impl OrderTable {
    /// Creates a new table with the given header and no rows.
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Creates a new table from a header and rows.
    pub fn from_rows(headers: Vec<String>, rows: Vec<RawRow>) -> Self {
        Self { headers, rows }
    }

    /// Creates a table with the six standard order columns.
    pub fn with_standard_headers(rows: Vec<RawRow>) -> Self {
        Self::from_rows(ORDER_COLUMNS.iter().map(|c| c.to_string()).collect(), rows)
    }

    /// Returns the column names in header order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows in input order.
    pub fn rows(&self) -> impl Iterator<Item = &RawRow> {
        self.rows.iter()
    }

    /// Gets a specific row by index.
    pub fn get_row(&self, index: usize) -> Option<&RawRow> {
        self.rows.get(index)
    }

    /// Adds a row to the table.
    pub fn add_row(&mut self, row: RawRow) {
        self.rows.push(row);
    }
}
