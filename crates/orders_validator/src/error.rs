//! Error types for validation setup.

use thiserror::Error;

/// Errors that prevent validation from starting.
///
/// Per-row failures are reported as [`orders_core::FieldError`] instead.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A column required by the rule set is absent from the table header
    #[error("Required column '{0}' is missing from the input header")]
    MissingColumn(String),

    /// Invalid regex pattern
    #[error("Invalid regex pattern for field '{field}': {error}")]
    InvalidRegex { field: String, error: String },

    /// Rule set has no rules
    #[error("Rule set is empty")]
    EmptyRuleSet,
}

impl ValidationError {
    /// Creates a new missing column error.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn(column.into())
    }

    /// Creates a new invalid regex error.
    pub fn invalid_regex(field: impl Into<String>, error: impl Into<String>) -> Self {
        Self::InvalidRegex {
            field: field.into(),
            error: error.into(),
        }
    }
}
