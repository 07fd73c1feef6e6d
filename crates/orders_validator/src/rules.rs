//! Field rule definitions and evaluation.
//!
//! This module defines the rules a raw cell can be checked against:
//! - NonEmpty: text must contain something other than whitespace
//! - NonNegativeInteger: integer value, zero or greater
//! - NonNegativeDecimal: finite decimal value, zero or greater
//! - Equals: exact, case-sensitive match against a fixed constant
//! - Date: two-digit `MM-DD-YY` shape that is also a real calendar date

use crate::ValidationError;
use chrono::NaiveDate;
use orders_core::{MarketRules, AMOUNT, CURRENCY, DATE, ORDER_ID, QTY, SHIP_COUNTRY};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Shape of a `MM-DD-YY` date.
pub const DATE_PATTERN: &str = r"^\d{2}-\d{2}-\d{2}$";
/// chrono format of a `MM-DD-YY` date.
pub const DATE_FORMAT: &str = "%m-%d-%y";

const EMPTY_MESSAGE: &str = "must not be empty";
const INTEGER_MESSAGE: &str = "must be a valid integer";
const NUMBER_MESSAGE: &str = "must be a valid number";
const NEGATIVE_MESSAGE: &str = "must be greater than or equal to 0";
const DATE_MESSAGE: &str = "Date must be in format MM-DD-YY";

/// A check applied to a single cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rule {
    /// Value must not be blank
    NonEmpty,

    /// Value must parse as an integer ≥ 0
    NonNegativeInteger,

    /// Value must parse as a finite decimal ≥ 0
    NonNegativeDecimal,

    /// Value must equal a constant exactly
    Equals {
        /// Required value
        expected: String,
        /// Reported message on mismatch
        message: String,
    },

    /// Value must match `pattern` and parse as a date with `format`
    Date {
        /// Regular expression the raw text must match
        pattern: String,
        /// chrono format string
        format: String,
        /// Reported message on failure
        message: String,
    },
}

impl Rule {
    /// Creates an `Equals` rule.
    pub fn equals(expected: impl Into<String>, message: impl Into<String>) -> Self {
        Rule::Equals {
            expected: expected.into(),
            message: message.into(),
        }
    }

    /// Creates the standard `MM-DD-YY` date rule.
    pub fn mm_dd_yy() -> Self {
        Rule::Date {
            pattern: DATE_PATTERN.to_string(),
            format: DATE_FORMAT.to_string(),
            message: DATE_MESSAGE.to_string(),
        }
    }
}

/// A rule bound to a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Column the rule applies to
    pub field: String,

    /// The rule itself
    #[serde(flatten)]
    pub rule: Rule,
}

impl FieldRule {
    /// Creates a new field rule.
    pub fn new(field: impl Into<String>, rule: Rule) -> Self {
        Self {
            field: field.into(),
            rule,
        }
    }
}

/// Ordered list of field rules.
///
/// Rule order only affects the order in which errors are reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: Vec<FieldRule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the standard order rules for a market.
    ///
    /// # Example
    ///
    /// ```rust
    /// use orders_core::MarketRules;
    /// use orders_validator::RuleSet;
    ///
    /// let rules = RuleSet::for_market(&MarketRules::default());
    /// assert_eq!(rules.len(), 6);
    /// ```
    pub fn for_market(market: &MarketRules) -> Self {
        Self::new()
            .rule(ORDER_ID, Rule::NonEmpty)
            .rule(QTY, Rule::NonNegativeInteger)
            .rule(AMOUNT, Rule::NonNegativeDecimal)
            .rule(
                CURRENCY,
                Rule::equals(
                    &market.currency,
                    format!("Currency must be {}", market.currency),
                ),
            )
            .rule(
                SHIP_COUNTRY,
                Rule::equals(
                    &market.ship_country,
                    format!("Ship country must be {}", market.ship_country),
                ),
            )
            .rule(DATE, Rule::mm_dd_yy())
    }

    /// Appends a rule for a column.
    pub fn rule(mut self, field: impl Into<String>, rule: Rule) -> Self {
        self.rules.push(FieldRule::new(field, rule));
        self
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns an iterator over the rules in order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.iter()
    }

    /// Returns the distinct columns referenced by the rules, in rule order.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for rule in &self.rules {
            if !fields.contains(&rule.field.as_str()) {
                fields.push(&rule.field);
            }
        }
        fields
    }
}

/// A rule ready for evaluation, with its pattern compiled.
#[derive(Debug, Clone)]
pub(crate) enum CompiledRule {
    NonEmpty,
    NonNegativeInteger,
    NonNegativeDecimal,
    Equals {
        expected: String,
        message: String,
    },
    Date {
        regex: Regex,
        format: String,
        message: String,
    },
}

impl CompiledRule {
    /// Compiles a field rule.
    pub(crate) fn compile(field_rule: &FieldRule) -> Result<Self, ValidationError> {
        let compiled = match &field_rule.rule {
            Rule::NonEmpty => CompiledRule::NonEmpty,
            Rule::NonNegativeInteger => CompiledRule::NonNegativeInteger,
            Rule::NonNegativeDecimal => CompiledRule::NonNegativeDecimal,
            Rule::Equals { expected, message } => CompiledRule::Equals {
                expected: expected.clone(),
                message: message.clone(),
            },
            Rule::Date {
                pattern,
                format,
                message,
            } => CompiledRule::Date {
                regex: Regex::new(pattern)
                    .map_err(|e| ValidationError::invalid_regex(&field_rule.field, e.to_string()))?,
                format: format.clone(),
                message: message.clone(),
            },
        };
        Ok(compiled)
    }

    /// Checks a cell. A missing cell is checked as empty text.
    pub(crate) fn check(&self, value: Option<&str>) -> Result<(), String> {
        let value = value.unwrap_or("");

        match self {
            CompiledRule::NonEmpty => {
                if value.trim().is_empty() {
                    return Err(EMPTY_MESSAGE.to_string());
                }
            }
            CompiledRule::NonNegativeInteger => match parse_integer(value) {
                Some(n) if n < 0 => return Err(NEGATIVE_MESSAGE.to_string()),
                Some(_) => {}
                None => return Err(INTEGER_MESSAGE.to_string()),
            },
            CompiledRule::NonNegativeDecimal => match parse_decimal(value) {
                Some(n) if n < 0.0 => return Err(NEGATIVE_MESSAGE.to_string()),
                Some(_) => {}
                None => return Err(NUMBER_MESSAGE.to_string()),
            },
            CompiledRule::Equals { expected, message } => {
                if value != expected {
                    return Err(message.clone());
                }
            }
            CompiledRule::Date {
                regex,
                format,
                message,
            } => {
                if !regex.is_match(value) || NaiveDate::parse_from_str(value, format).is_err() {
                    return Err(message.clone());
                }
            }
        }

        Ok(())
    }
}

/// Parses an integer, accepting integral decimal text such as `"2.0"`.
pub fn parse_integer(value: &str) -> Option<i64> {
    let value = value.trim();
    if let Ok(n) = value.parse::<i64>() {
        return Some(n);
    }

    // Spreadsheet exports write whole numbers as "2.0" once a column has gaps.
    let float = value.parse::<f64>().ok()?;
    if float.is_finite() && float.fract() == 0.0 && float.abs() < 9.0e15 {
        Some(float as i64)
    } else {
        None
    }
}

/// Parses a finite decimal number.
pub fn parse_decimal(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn compile(rule: Rule) -> CompiledRule {
        CompiledRule::compile(&FieldRule::new("field", rule)).unwrap()
    }

    #[test]
    fn test_non_empty() {
        let rule = compile(Rule::NonEmpty);
        assert!(rule.check(Some("A1")).is_ok());
        assert_eq!(rule.check(Some("")), Err("must not be empty".to_string()));
        assert_eq!(rule.check(Some("   ")), Err("must not be empty".to_string()));
        assert_eq!(rule.check(None), Err("must not be empty".to_string()));
    }

    #[test]
    fn test_non_negative_integer() {
        let rule = compile(Rule::NonNegativeInteger);
        assert!(rule.check(Some("0")).is_ok());
        assert!(rule.check(Some("2")).is_ok());
        assert!(rule.check(Some(" 7 ")).is_ok());
        assert!(rule.check(Some("3.0")).is_ok());
        assert_eq!(
            rule.check(Some("-1")),
            Err("must be greater than or equal to 0".to_string())
        );
        assert_eq!(
            rule.check(Some("2.5")),
            Err("must be a valid integer".to_string())
        );
        assert_eq!(
            rule.check(Some("two")),
            Err("must be a valid integer".to_string())
        );
        assert_eq!(rule.check(Some("")), Err("must be a valid integer".to_string()));
    }

    #[test]
    fn test_non_negative_decimal() {
        let rule = compile(Rule::NonNegativeDecimal);
        assert!(rule.check(Some("0")).is_ok());
        assert!(rule.check(Some("100.0")).is_ok());
        assert!(rule.check(Some("49.99")).is_ok());
        assert_eq!(
            rule.check(Some("-0.5")),
            Err("must be greater than or equal to 0".to_string())
        );
        assert_eq!(
            rule.check(Some("abc")),
            Err("must be a valid number".to_string())
        );
        assert_eq!(
            rule.check(Some("NaN")),
            Err("must be a valid number".to_string())
        );
        assert_eq!(
            rule.check(Some("inf")),
            Err("must be a valid number".to_string())
        );
    }

    #[test]
    fn test_equals_is_case_sensitive() {
        let rule = compile(Rule::equals("INR", "Currency must be INR"));
        assert!(rule.check(Some("INR")).is_ok());
        assert_eq!(
            rule.check(Some("inr")),
            Err("Currency must be INR".to_string())
        );
        assert_eq!(
            rule.check(Some("INR ")),
            Err("Currency must be INR".to_string())
        );
        assert_eq!(rule.check(None), Err("Currency must be INR".to_string()));
    }

    #[test]
    fn test_date_rule() {
        let rule = compile(Rule::mm_dd_yy());
        assert!(rule.check(Some("01-15-24")).is_ok());
        assert!(rule.check(Some("02-29-24")).is_ok());

        let message = Err("Date must be in format MM-DD-YY".to_string());
        assert_eq!(rule.check(Some("2024-01-15")), message);
        assert_eq!(rule.check(Some("1-15-24")), message);
        assert_eq!(rule.check(Some("13-01-24")), message);
        assert_eq!(rule.check(Some("02-30-24")), message);
        assert_eq!(rule.check(Some("02-29-23")), message);
        assert_eq!(rule.check(Some("01/15/24")), message);
        assert_eq!(rule.check(Some("")), message);
    }

    #[test]
    fn test_invalid_regex() {
        let rule = FieldRule::new(
            "date",
            Rule::Date {
                pattern: "[invalid(regex".to_string(),
                format: DATE_FORMAT.to_string(),
                message: "bad".to_string(),
            },
        );
        let result = CompiledRule::compile(&rule);
        assert!(matches!(result, Err(ValidationError::InvalidRegex { .. })));
    }

    #[test]
    fn test_rule_set_for_market() {
        let rules = RuleSet::for_market(&MarketRules::new("EUR", "DE"));
        assert_eq!(
            rules.fields(),
            vec!["order_id", "qty", "amount", "currency", "ship_country", "date"]
        );

        let currency = rules.iter().find(|r| r.field == "currency").unwrap();
        assert_eq!(
            currency.rule,
            Rule::equals("EUR", "Currency must be EUR")
        );
        let country = rules.iter().find(|r| r.field == "ship_country").unwrap();
        assert_eq!(
            country.rule,
            Rule::equals("DE", "Ship country must be DE")
        );
    }

    #[test]
    fn test_fields_are_distinct() {
        let rules = RuleSet::new()
            .rule("order_id", Rule::NonEmpty)
            .rule("order_id", Rule::equals("X", "must be X"));
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.fields(), vec!["order_id"]);
    }

    #[test]
    fn test_rule_serializes_tagged() {
        let rule = FieldRule::new("qty", Rule::NonNegativeInteger);
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["field"], "qty");
        assert_eq!(json["type"], "non_negative_integer");
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_integer("42"), Some(42));
        assert_eq!(parse_integer("-3"), Some(-3));
        assert_eq!(parse_integer("1e2"), Some(100));
        assert_eq!(parse_integer("1.5"), None);
        assert_eq!(parse_decimal(" 12.5 "), Some(12.5));
        assert_eq!(parse_decimal("-inf"), None);
    }
}
