//! Row validation against the order schema.
//!
//! [`OrderValidator`] evaluates every rule of a [`RuleSet`] against a raw row
//! without short-circuiting, so a row reports all of its failing fields.

use crate::rules::{parse_decimal, parse_integer, CompiledRule};
use crate::{RuleSet, ValidationError};
use orders_core::{
    FieldError, InvalidRow, MarketRules, OrderRecord, RawRow, RowOutcome, AMOUNT, CURRENCY, DATE,
    ORDER_ID, QTY, SHIP_COUNTRY,
};

/// Validates raw rows and normalizes the valid ones into [`OrderRecord`]s.
///
/// # Example
///
/// ```rust
/// use orders_core::{MarketRules, RawRow, RowOutcome};
/// use orders_validator::OrderValidator;
///
/// let validator = OrderValidator::for_market(&MarketRules::default()).unwrap();
///
/// let mut row = RawRow::new();
/// row.insert("order_id".to_string(), "A2".to_string());
/// row.insert("qty".to_string(), "-1".to_string());
/// row.insert("amount".to_string(), "50.0".to_string());
/// row.insert("currency".to_string(), "USD".to_string());
/// row.insert("ship_country".to_string(), "IN".to_string());
/// row.insert("date".to_string(), "01-15-24".to_string());
///
/// match validator.validate_row(1, &row) {
///     RowOutcome::Invalid(invalid) => assert_eq!(invalid.error_count(), 2),
///     RowOutcome::Valid(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct OrderValidator {
    rules: RuleSet,
    compiled: Vec<(String, CompiledRule)>,
}

impl OrderValidator {
    /// Creates a validator from a rule set, compiling every pattern up front.
    pub fn new(rules: RuleSet) -> Result<Self, ValidationError> {
        if rules.is_empty() {
            return Err(ValidationError::EmptyRuleSet);
        }

        let compiled = rules
            .iter()
            .map(|rule| CompiledRule::compile(rule).map(|compiled| (rule.field.clone(), compiled)))
            .collect::<Result<Vec<_>, ValidationError>>()?;

        Ok(Self { rules, compiled })
    }

    /// Creates a validator with the standard rules for a market.
    pub fn for_market(market: &MarketRules) -> Result<Self, ValidationError> {
        Self::new(RuleSet::for_market(market))
    }

    /// Returns the rule set in use.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validates a single row.
    ///
    /// `row_number` is the 1-based position of the row and is carried into
    /// the outcome for reporting.
    pub fn validate_row(&self, row_number: usize, row: &RawRow) -> RowOutcome {
        let mut errors: Vec<FieldError> = self
            .compiled
            .iter()
            .filter_map(|(field, rule)| {
                rule.check(row.get(field).map(String::as_str))
                    .err()
                    .map(|message| FieldError::new(field, message))
            })
            .collect();

        if errors.is_empty() {
            match normalize(row) {
                Ok(record) => return RowOutcome::Valid(record),
                Err(err) => errors.push(err),
            }
        }

        RowOutcome::Invalid(InvalidRow {
            row_number,
            raw: row.clone(),
            errors,
        })
    }

    /// Checks that every column referenced by the rules is in the header.
    ///
    /// Returns a list of validation errors. An empty list indicates success.
    pub fn validate_headers(&self, headers: &[String]) -> Vec<ValidationError> {
        self.rules
            .fields()
            .into_iter()
            .filter(|field| !headers.iter().any(|h| h.as_str() == *field))
            .map(ValidationError::missing_column)
            .collect()
    }
}

/// Builds a typed record from a row whose rules all passed.
///
/// Custom rule sets may leave a column unchecked, so conversion failures are
/// reported as field errors rather than assumed impossible.
fn normalize(row: &RawRow) -> Result<OrderRecord, FieldError> {
    let text = |field: &str| {
        row.get(field)
            .cloned()
            .ok_or_else(|| FieldError::new(field, "is missing"))
    };

    let qty = text(QTY)?;
    let qty = parse_integer(&qty)
        .and_then(|n| u64::try_from(n).ok())
        .ok_or_else(|| FieldError::new(QTY, "must be a valid integer"))?;

    let amount = text(AMOUNT)?;
    let amount = parse_decimal(&amount)
        .filter(|n| *n >= 0.0)
        .ok_or_else(|| FieldError::new(AMOUNT, "must be a valid number"))?;

    Ok(OrderRecord {
        order_id: text(ORDER_ID)?,
        qty,
        amount,
        currency: text(CURRENCY)?,
        ship_country: text(SHIP_COUNTRY)?,
        date: text(DATE)?,
    })
}
