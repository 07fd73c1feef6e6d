use anyhow::{Context, Result};
use orders_core::{CheckConfigBuilder, ExitStatus};
use orders_report::ValidationRun;
use std::path::PathBuf;
use tracing::info;

use crate::output;

/// Command-line overrides applied on top of the file and environment.
#[derive(Debug, Default)]
pub struct ValidateArgs {
    pub input: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub valid_output: Option<PathBuf>,
    pub invalid_output: Option<PathBuf>,
    pub webhook_url: Option<String>,
    pub error_details: bool,
}

pub async fn execute(args: ValidateArgs, format: &str) -> Result<ExitStatus> {
    let config = match &args.config {
        Some(path) => orders_parser::load_config(Some(path.as_path()))
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => orders_parser::load_config(None)?,
    };
    let config =
        orders_parser::apply_env(config).context("Invalid configuration from environment")?;

    // Flags win over file and environment.
    let mut builder = CheckConfigBuilder::from_config(config);
    if let Some(input) = args.input {
        builder = builder.input(input);
    }
    if let Some(path) = args.valid_output {
        builder = builder.valid_output(path);
    }
    if let Some(path) = args.invalid_output {
        builder = builder.invalid_output(path);
    }
    if let Some(url) = args.webhook_url {
        builder = builder.webhook_url(url);
    }
    if args.error_details {
        builder = builder.include_error_details(true);
    }
    let config = builder.build().context("Invalid configuration")?;

    info!("Validating orders: {}", config.input.path.display());
    info!(
        "Market: currency {}, ship country {}",
        config.market.currency, config.market.ship_country
    );

    let mut run = ValidationRun::new(config).context("Failed to prepare validation run")?;
    if format == "json" {
        run = run.alerts_to_stderr();
    }
    let result = run.execute().await;
    let outcome = result.with_context(|| format!("Validation stopped while {}", run.stage()))?;

    output::print_run_report(&outcome, format);

    Ok(outcome.exit_status)
}
