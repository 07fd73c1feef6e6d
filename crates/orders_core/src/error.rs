//! Error types for order check configuration.
//!
//! Field-level validation failures are not errors in this sense: they are
//! collected as [`crate::FieldError`] values and never abort a run.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while building or validating a [`crate::CheckConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required setting is empty
    #[error("Configuration value '{0}' cannot be empty")]
    EmptyValue(String),

    /// Delimiter cannot be used by the CSV reader
    #[error("Invalid CSV delimiter {0:?}: must be a single ASCII character")]
    InvalidDelimiter(char),

    /// Both partitions would be written to the same file
    #[error("Valid and invalid outputs point to the same file: {}", .0.display())]
    SameOutputPath(PathBuf),

    /// Webhook URL is not an http(s) URL
    #[error("Invalid webhook URL '{0}': expected an http:// or https:// address")]
    InvalidWebhookUrl(String),
}
