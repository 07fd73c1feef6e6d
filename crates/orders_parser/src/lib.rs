//! Parser for ordercheck configuration files (YAML/TOML formats).
//!
//! This module loads a [`CheckConfig`] from YAML or TOML, layers environment
//! overrides on top and validates the result.
//!
//! # Example
//!
//! ```rust
//! use orders_parser::parse_yaml;
//!
//! let yaml = r#"
//! input:
//!   path: orders.csv
//! market:
//!   currency: INR
//!   ship_country: IN
//! outputs:
//!   valid: out/valid.csv
//!   invalid: out/invalid.csv
//! "#;
//!
//! let config = parse_yaml(yaml).expect("Failed to parse config");
//! assert_eq!(config.market.currency, "INR");
//! ```

use orders_core::{CheckConfig, ConfigError};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Primary environment variable holding the webhook URL.
pub const WEBHOOK_ENV: &str = "ORDERCHECK_WEBHOOK_URL";
/// Fallback environment variable holding the webhook URL.
pub const WEBHOOK_ENV_FALLBACK: &str = "SLACK_WEBHOOK_URL";

/// Errors that can occur during configuration parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// YAML serialization failed
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// Parsed configuration failed validation
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parse a configuration from a YAML string.
///
/// Missing sections and keys fall back to their defaults.
pub fn parse_yaml(content: &str) -> Result<CheckConfig> {
    // An empty document deserializes to unit, not to an empty map.
    if content.trim().is_empty() {
        return Ok(CheckConfig::default());
    }
    let config: CheckConfig = serde_yaml_ng::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Parse a configuration from a TOML string.
///
/// # Example
///
/// ```rust
/// use orders_parser::parse_toml;
///
/// let toml = r#"
/// [market]
/// currency = "INR"
/// ship_country = "IN"
///
/// [notification]
/// title = "Nightly orders"
/// "#;
///
/// let config = parse_toml(toml).unwrap();
/// assert_eq!(config.notification.title, "Nightly orders");
/// ```
pub fn parse_toml(content: &str) -> Result<CheckConfig> {
    let config: CheckConfig =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Detect the configuration format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `ConfigFormat::Yaml`
/// * `.toml` → `ConfigFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<ConfigFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(ConfigFormat::Yaml),
        "toml" => Ok(ConfigFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a configuration from a file with automatic format detection.
///
/// ```no_run
/// use orders_parser::parse_file;
/// use std::path::Path;
///
/// let config = parse_file(Path::new("ordercheck.yml")).unwrap();
/// println!("Validating {}", config.input.path.display());
/// ```
pub fn parse_file(path: &Path) -> Result<CheckConfig> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    debug!("Parsing {:?} configuration from {}", format, path.display());

    match format {
        ConfigFormat::Yaml => parse_yaml(&content),
        ConfigFormat::Toml => parse_toml(&content),
    }
}

/// Loads a configuration from an optional file, falling back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<CheckConfig> {
    match path {
        Some(path) => parse_file(path),
        None => Ok(CheckConfig::default()),
    }
}

/// Applies environment overrides using the given variable lookup.
///
/// The webhook URL is taken from [`WEBHOOK_ENV`], then [`WEBHOOK_ENV_FALLBACK`].
/// Blank values are ignored. The result is validated again.
pub fn apply_env_with<F>(mut config: CheckConfig, lookup: F) -> Result<CheckConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let webhook = [WEBHOOK_ENV, WEBHOOK_ENV_FALLBACK]
        .into_iter()
        .filter_map(|key| lookup(key).map(|value| (key, value)))
        .find(|(_, value)| !value.trim().is_empty());

    if let Some((key, url)) = webhook {
        debug!("Webhook URL taken from {}", key);
        config.notification.webhook_url = Some(url);
    }

    config.validate()?;
    Ok(config)
}

/// Applies overrides from the process environment.
pub fn apply_env(config: CheckConfig) -> Result<CheckConfig> {
    apply_env_with(config, |key| std::env::var(key).ok())
}

/// Serializes a configuration to YAML.
pub fn to_yaml(config: &CheckConfig) -> Result<String> {
    serde_yaml_ng::to_string(config).map_err(|e| ParserError::SerializeError(e.to_string()))
}
