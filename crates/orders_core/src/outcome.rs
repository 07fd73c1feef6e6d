//! Row outcomes and run summaries.
//!
//! A row is classified exactly once into a [`RowOutcome`]. The counts of a
//! whole run are aggregated into a [`RunSummary`], which also decides the
//! process exit status.

use crate::{OrderRecord, RawRow};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the failing column
    pub field: String,

    /// Human-readable failure reason
    pub message: String,
}

impl FieldError {
    /// Creates a new field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A row that passed every field rule.
///
/// The raw fields are what gets persisted; the typed record is what
/// downstream code reads.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRow {
    /// 1-based position of the row in the input table (header excluded)
    pub row_number: usize,

    /// Original raw fields, extra columns included
    pub raw: RawRow,

    /// Normalized record
    pub record: OrderRecord,
}

/// A row that failed one or more field rules.
///
/// Keeps the original raw fields untouched so they can be written back to the
/// invalid-rows table.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidRow {
    /// 1-based position of the row in the input table (header excluded)
    pub row_number: usize,

    /// Original raw fields
    pub raw: RawRow,

    /// Every failing rule, in rule order
    pub errors: Vec<FieldError>,
}

impl InvalidRow {
    /// Returns the number of field errors on this row.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if the given field has at least one error.
    pub fn has_error_for(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Returns all field errors joined as `field: message; ...`.
    pub fn error_details(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Classification result for one input row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// Every rule passed
    Valid(OrderRecord),
    /// At least one rule failed
    Invalid(InvalidRow),
}

impl RowOutcome {
    /// Returns true if the row passed every rule.
    pub fn is_valid(&self) -> bool {
        matches!(self, RowOutcome::Valid(_))
    }

    /// Returns the field errors of the row (empty for valid rows).
    pub fn errors(&self) -> &[FieldError] {
        match self {
            RowOutcome::Valid(_) => &[],
            RowOutcome::Invalid(row) => &row.errors,
        }
    }
}

/// Process exit status of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitStatus {
    /// All rows valid
    Success,
    /// One or more invalid rows were found
    InvalidRows,
}

impl ExitStatus {
    /// Returns the numeric process exit code.
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::InvalidRows => 1,
        }
    }
}

/// Aggregated counts of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of data rows read
    pub total: usize,

    /// Number of rows that passed
    pub valid: usize,

    /// Number of rows that failed
    pub invalid: usize,
}

impl RunSummary {
    /// Creates a summary from valid and invalid counts.
    pub fn new(valid: usize, invalid: usize) -> Self {
        Self {
            total: valid + invalid,
            valid,
            invalid,
        }
    }

    /// Returns true if no invalid rows were found.
    pub fn passed(&self) -> bool {
        self.invalid == 0
    }

    /// Returns the exit status implied by this summary.
    pub fn exit_status(&self) -> ExitStatus {
        if self.passed() {
            ExitStatus::Success
        } else {
            ExitStatus::InvalidRows
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn invalid_row() -> InvalidRow {
        InvalidRow {
            row_number: 2,
            raw: RawRow::new(),
            errors: vec![
                FieldError::new("qty", "must be greater than or equal to 0"),
                FieldError::new("currency", "Currency must be INR"),
            ],
        }
    }

    #[test]
    fn test_field_error_display() {
        let err = FieldError::new("order_id", "must not be empty");
        assert_eq!(err.to_string(), "order_id: must not be empty");
    }

    #[test]
    fn test_invalid_row_helpers() {
        let row = invalid_row();
        assert_eq!(row.error_count(), 2);
        assert!(row.has_error_for("qty"));
        assert!(!row.has_error_for("date"));
        assert_eq!(
            row.error_details(),
            "qty: must be greater than or equal to 0; currency: Currency must be INR"
        );
    }

    #[test]
    fn test_row_outcome_errors() {
        let outcome = RowOutcome::Invalid(invalid_row());
        assert!(!outcome.is_valid());
        assert_eq!(outcome.errors().len(), 2);

        let outcome = RowOutcome::Valid(OrderRecord {
            order_id: "A1".to_string(),
            qty: 2,
            amount: 100.0,
            currency: "INR".to_string(),
            ship_country: "IN".to_string(),
            date: "01-15-24".to_string(),
        });
        assert!(outcome.is_valid());
        assert!(outcome.errors().is_empty());
    }

    #[test]
    fn test_summary_counts_add_up() {
        let summary = RunSummary::new(7, 3);
        assert_eq!(summary.total, 10);
        assert_eq!(summary.valid + summary.invalid, summary.total);
        assert!(!summary.passed());
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(RunSummary::new(5, 0).exit_status(), ExitStatus::Success);
        assert_eq!(RunSummary::new(0, 0).exit_status(), ExitStatus::Success);
        assert_eq!(RunSummary::new(0, 1).exit_status(), ExitStatus::InvalidRows);
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_eq!(ExitStatus::InvalidRows.code(), 1);
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let json = serde_json::to_value(RunSummary::new(1, 1)).unwrap();
        assert_eq!(json["total"], 2);
        assert_eq!(json["valid"], 1);
        assert_eq!(json["invalid"], 1);
    }
}
