//! Integration tests for the validation engine.
//!
//! These tests run realistic order batches through the partitioner and check
//! the classification of every row.

use orders_core::{ExitStatus, FieldError, MarketRules, RawRow, RowOutcome};
use orders_validator::{OrderTable, OrderValidator, Partitioner, Rule, RuleSet};
use pretty_assertions::assert_eq;

fn order(values: [&str; 6]) -> RawRow {
    ["order_id", "qty", "amount", "currency", "ship_country", "date"]
        .iter()
        .zip(values)
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A day's export with a mix of clean and broken rows.
fn daily_export() -> OrderTable {
    OrderTable::with_standard_headers(vec![
        order(["408-1", "1", "499.00", "INR", "IN", "04-30-22"]),
        order(["408-2", "0", "0", "INR", "IN", "04-30-22"]),
        order(["408-3", "2", "1099.5", "INR", "IN", "04-31-22"]),
        order(["", "1", "250", "INR", "IN", "05-01-22"]),
        order(["408-5", "3", "750.25", "USD", "US", "05-01-22"]),
        order(["408-6", "1", "", "INR", "IN", "05-02-22"]),
        order(["408-7", "4", "1200", "INR", "IN", "05-02-22"]),
    ])
}

#[test]
fn test_single_valid_order() {
    let table = OrderTable::with_standard_headers(vec![order([
        "A1", "2", "100.0", "INR", "IN", "01-15-24",
    ])]);

    let partition = Partitioner::for_market(&MarketRules::default())
        .unwrap()
        .partition(&table);

    assert_eq!(partition.valid.len(), 1);
    assert_eq!(partition.valid[0].record.order_id, "A1");
    assert_eq!(partition.summary().exit_status(), ExitStatus::Success);
}

#[test]
fn test_single_invalid_order() {
    let table = OrderTable::with_standard_headers(vec![order([
        "A2", "-1", "50.0", "USD", "IN", "01-15-24",
    ])]);

    let partition = Partitioner::for_market(&MarketRules::default())
        .unwrap()
        .partition(&table);

    assert!(partition.valid.is_empty());
    assert_eq!(partition.invalid.len(), 1);

    let invalid = &partition.invalid[0];
    assert_eq!(invalid.error_count(), 2);
    assert!(invalid.has_error_for("qty"));
    assert!(invalid.has_error_for("currency"));
    assert_eq!(partition.summary().exit_status(), ExitStatus::InvalidRows);
}

#[test]
fn test_daily_export() {
    let partition = Partitioner::for_market(&MarketRules::default())
        .unwrap()
        .partition(&daily_export());

    let valid: Vec<&str> = partition
        .valid
        .iter()
        .map(|r| r.record.order_id.as_str())
        .collect();
    assert_eq!(valid, vec!["408-1", "408-2", "408-7"]);

    let details: Vec<(usize, String)> = partition
        .invalid
        .iter()
        .map(|r| (r.row_number, r.error_details()))
        .collect();
    assert_eq!(
        details,
        vec![
            (3, "date: Date must be in format MM-DD-YY".to_string()),
            (4, "order_id: must not be empty".to_string()),
            (
                5,
                "currency: Currency must be INR; ship_country: Ship country must be IN"
                    .to_string()
            ),
            (6, "amount: must be a valid number".to_string()),
        ]
    );

    let summary = partition.summary();
    assert_eq!(summary.total, 7);
    assert_eq!(summary.valid, 3);
    assert_eq!(summary.invalid, 4);
}

#[test]
fn test_all_rows_invalid() {
    let table = OrderTable::with_standard_headers(vec![
        order(["X1", "1", "1", "EUR", "IN", "01-01-24"]),
        order(["X2", "1", "1", "INR", "DE", "01-01-24"]),
        order(["X3", "1", "1", "INR", "IN", "1/1/24"]),
    ]);

    let partition = Partitioner::for_market(&MarketRules::default())
        .unwrap()
        .partition(&table);

    assert!(partition.valid.is_empty());
    assert_eq!(partition.invalid.len(), 3);
    assert_eq!(partition.total, 3);
}

#[test]
fn test_custom_rule_set() {
    let rules = RuleSet::new()
        .rule("order_id", Rule::NonEmpty)
        .rule("qty", Rule::NonNegativeInteger)
        .rule("amount", Rule::NonNegativeDecimal)
        .rule("currency", Rule::equals("INR", "Currency must be INR"))
        .rule("date", Rule::mm_dd_yy());
    let validator = OrderValidator::new(rules).unwrap();

    // Country is not checked by this rule set.
    let outcome = validator.validate_row(1, &order(["C1", "1", "5", "INR", "US", "07-04-24"]));
    assert!(outcome.is_valid());

    let outcome = validator.validate_row(2, &order(["C2", "1", "5", "inr", "US", "07-04-24"]));
    assert_eq!(
        outcome.errors(),
        &[FieldError::new("currency", "Currency must be INR")]
    );
    assert!(matches!(outcome, RowOutcome::Invalid(_)));
}
