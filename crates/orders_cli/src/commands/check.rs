use anyhow::{Context, Result};
use orders_core::ExitStatus;
use orders_validator::RuleSet;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(config_path: Option<&Path>, format: &str) -> Result<ExitStatus> {
    let config = match config_path {
        Some(path) => {
            info!("Checking configuration: {}", path.display());
            orders_parser::load_config(Some(path))
                .with_context(|| format!("Failed to load config file: {}", path.display()))?
        }
        None => {
            info!("No configuration file given, checking defaults");
            orders_parser::load_config(None)?
        }
    };
    let config =
        orders_parser::apply_env(config).context("Invalid configuration from environment")?;

    let rules = RuleSet::for_market(&config.market);
    output::print_config_report(&config, &rules, format);

    Ok(ExitStatus::Success)
}
