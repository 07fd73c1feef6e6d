//! Stable partitioning of an order table.
//!
//! This module provides the [`Partitioner`] that feeds every row of a table
//! through an [`OrderValidator`] and collects the two partitions.

use crate::{OrderTable, OrderValidator, ValidationError};
use orders_core::{InvalidRow, MarketRules, RawRow, RowOutcome, RunSummary, ValidRow};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Result of partitioning a table.
///
/// Both partitions keep the input order of their rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    /// Rows that passed every rule
    pub valid: Vec<ValidRow>,

    /// Rows that failed at least one rule
    pub invalid: Vec<InvalidRow>,

    /// Number of rows processed
    pub total: usize,
}

impl Partition {
    /// Returns the total/valid/invalid counts.
    pub fn summary(&self) -> RunSummary {
        RunSummary::new(self.valid.len(), self.invalid.len())
    }

    /// Returns true if no row failed.
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// Splits rows into valid and invalid partitions.
///
/// # Example
///
/// ```rust
/// use orders_core::MarketRules;
/// use orders_validator::{OrderTable, Partitioner};
///
/// let partitioner = Partitioner::for_market(&MarketRules::default()).unwrap();
/// let partition = partitioner.partition(&OrderTable::with_standard_headers(Vec::new()));
///
/// assert_eq!(partition.total, 0);
/// assert!(partition.is_clean());
/// ```
#[derive(Debug, Clone)]
pub struct Partitioner {
    validator: OrderValidator,
}

impl Partitioner {
    /// Creates a partitioner around a validator.
    pub fn new(validator: OrderValidator) -> Self {
        Self { validator }
    }

    /// Creates a partitioner with the standard rules for a market.
    pub fn for_market(market: &MarketRules) -> Result<Self, ValidationError> {
        Ok(Self::new(OrderValidator::for_market(market)?))
    }

    /// Returns the underlying validator.
    pub fn validator(&self) -> &OrderValidator {
        &self.validator
    }

    /// Partitions every row of a table.
    pub fn partition(&self, table: &OrderTable) -> Partition {
        self.partition_rows(table.rows())
    }

    /// Partitions an ordered sequence of rows.
    ///
    /// Logs one line per row with its outcome, followed by one line per field
    /// error for invalid rows.
    pub fn partition_rows<'a, I>(&self, rows: I) -> Partition
    where
        I: IntoIterator<Item = &'a RawRow>,
    {
        let start = Instant::now();
        let mut partition = Partition::default();

        for (index, row) in rows.into_iter().enumerate() {
            let row_number = index + 1;
            partition.total += 1;

            match self.validator.validate_row(row_number, row) {
                RowOutcome::Valid(record) => {
                    info!("Row {}: valid - {}", row_number, record.order_id);
                    partition.valid.push(ValidRow {
                        row_number,
                        raw: row.clone(),
                        record,
                    });
                }
                RowOutcome::Invalid(invalid) => {
                    warn!("Row {}: invalid", row_number);
                    for error in &invalid.errors {
                        warn!("Row {}:   {}: {}", row_number, error.field, error.message);
                    }
                    partition.invalid.push(invalid);
                }
            }
        }

        debug!(
            "Partitioned {} rows in {} ms",
            partition.total,
            start.elapsed().as_millis()
        );

        partition
    }
}
