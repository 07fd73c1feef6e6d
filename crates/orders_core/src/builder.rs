//! Builder pattern for creating run configurations.
//!
//! This module provides an ergonomic builder for constructing a
//! [`CheckConfig`] with a fluent API.

use crate::{CheckConfig, ConfigError};
use std::path::PathBuf;

/// Builder for creating a `CheckConfig`.
///
/// Unset values keep their defaults.
///
/// # Example
///
/// ```rust
/// use orders_core::CheckConfigBuilder;
///
/// let config = CheckConfigBuilder::new()
///     .input("orders.csv")
///     .valid_output("out/valid.csv")
///     .invalid_output("out/invalid.csv")
///     .webhook_url("https://hooks.example.com/T000/B000")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.notification.webhook(), Some("https://hooks.example.com/T000/B000"));
/// ```
#[derive(Debug, Default)]
pub struct CheckConfigBuilder {
    config: CheckConfig,
}

impl CheckConfigBuilder {
    /// Creates a new builder starting from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder starting from an existing configuration.
    pub fn from_config(config: CheckConfig) -> Self {
        Self { config }
    }

    /// Sets the input table path.
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input.path = path.into();
        self
    }

    /// Sets the CSV delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.config.input.delimiter = delimiter;
        self
    }

    /// Enables or disables whitespace trimming of cells.
    pub fn trim(mut self, trim: bool) -> Self {
        self.config.input.trim = trim;
        self
    }

    /// Sets the required currency.
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.config.market.currency = currency.into();
        self
    }

    /// Sets the required destination country.
    pub fn ship_country(mut self, country: impl Into<String>) -> Self {
        self.config.market.ship_country = country.into();
        self
    }

    /// Sets the valid-rows destination.
    pub fn valid_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.outputs.valid = path.into();
        self
    }

    /// Sets the invalid-rows destination.
    pub fn invalid_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.outputs.invalid = path.into();
        self
    }

    /// Adds an `error_details` column to the invalid-rows table.
    pub fn include_error_details(mut self, include: bool) -> Self {
        self.config.outputs.include_error_details = include;
        self
    }

    /// Sets the webhook URL for alerts.
    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.config.notification.webhook_url = Some(url.into());
        self
    }

    /// Sets the alert title.
    pub fn alert_title(mut self, title: impl Into<String>) -> Self {
        self.config.notification.title = title.into();
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> Result<CheckConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
