//! Run configuration.
//!
//! Every section has defaults matching the stock order export, so an empty
//! configuration file is valid and validates `amazon_orders.csv` for the
//! Indian market.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default input table.
pub const DEFAULT_INPUT: &str = "amazon_orders.csv";
/// Default destination for valid rows.
pub const DEFAULT_VALID_OUTPUT: &str = "valid_rows.csv";
/// Default destination for invalid rows.
pub const DEFAULT_INVALID_OUTPUT: &str = "invalid_rows.csv";
/// Default alert title.
pub const DEFAULT_ALERT_TITLE: &str = "Order Validation Alert";

/// Complete configuration of a validation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Input table location
    pub input: InputConfig,

    /// Fixed market constants checked on every row
    pub market: MarketRules,

    /// Output destinations
    pub outputs: OutputConfig,

    /// Alert delivery
    pub notification: NotificationConfig,
}

impl CheckConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.input.validate()?;
        self.market.validate()?;
        self.outputs.validate()?;
        self.notification.validate()?;
        Ok(())
    }
}

/// Input table settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Path of the CSV file to validate
    pub path: PathBuf,

    /// Field delimiter
    pub delimiter: char,

    /// Trim surrounding whitespace from every cell before validation
    pub trim: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INPUT),
            delimiter: ',',
            trim: false,
        }
    }
}

impl InputConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyValue("input.path".to_string()));
        }
        if !self.delimiter.is_ascii() || self.delimiter == '"' || self.delimiter == '\n' {
            return Err(ConfigError::InvalidDelimiter(self.delimiter));
        }
        Ok(())
    }

    /// Returns the delimiter as a single byte.
    pub fn delimiter_byte(&self) -> u8 {
        let mut buf = [0u8; 4];
        self.delimiter.encode_utf8(&mut buf);
        buf[0]
    }
}

/// Market constants every order must match exactly.
///
/// # Example
///
/// ```rust
/// use orders_core::MarketRules;
///
/// let rules = MarketRules::default();
/// assert_eq!(rules.currency, "INR");
/// assert_eq!(rules.ship_country, "IN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarketRules {
    /// Required currency code (case-sensitive)
    pub currency: String,

    /// Required destination country code (case-sensitive)
    pub ship_country: String,
}

impl Default for MarketRules {
    fn default() -> Self {
        Self {
            currency: "INR".to_string(),
            ship_country: "IN".to_string(),
        }
    }
}

impl MarketRules {
    /// Creates market rules for the given currency and country.
    pub fn new(currency: impl Into<String>, ship_country: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            ship_country: ship_country.into(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.currency.trim().is_empty() {
            return Err(ConfigError::EmptyValue("market.currency".to_string()));
        }
        if self.ship_country.trim().is_empty() {
            return Err(ConfigError::EmptyValue("market.ship_country".to_string()));
        }
        Ok(())
    }
}

/// Output destinations for the two partitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Destination of valid rows
    pub valid: PathBuf,

    /// Destination of invalid rows
    pub invalid: PathBuf,

    /// Add an `error_details` column listing every failure
    pub include_error_details: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            valid: PathBuf::from(DEFAULT_VALID_OUTPUT),
            invalid: PathBuf::from(DEFAULT_INVALID_OUTPUT),
            include_error_details: false,
        }
    }
}

impl OutputConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.valid.as_os_str().is_empty() {
            return Err(ConfigError::EmptyValue("outputs.valid".to_string()));
        }
        if self.invalid.as_os_str().is_empty() {
            return Err(ConfigError::EmptyValue("outputs.invalid".to_string()));
        }
        if self.valid == self.invalid {
            return Err(ConfigError::SameOutputPath(self.valid.clone()));
        }
        Ok(())
    }
}

/// Alert delivery settings.
///
/// Without a webhook URL alerts are printed to standard output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotificationConfig {
    /// Webhook endpoint receiving `{"text": ...}` payloads
    pub webhook_url: Option<String>,

    /// Title line of the alert
    pub title: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            title: DEFAULT_ALERT_TITLE.to_string(),
        }
    }
}

impl NotificationConfig {
    /// Returns the webhook URL if one is configured and non-blank.
    pub fn webhook(&self) -> Option<&str> {
        self.webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = self.webhook() {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidWebhookUrl(url.to_string()));
            }
        }
        Ok(())
    }
}
