use anyhow::{bail, Context, Result};
use orders_core::{CheckConfig, ExitStatus};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(output_path: Option<&Path>, force: bool) -> Result<ExitStatus> {
    let yaml = orders_parser::to_yaml(&CheckConfig::default())
        .context("Failed to serialize default configuration")?;

    match output_path {
        Some(path) => {
            if path.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            info!("Writing default configuration to {}", path.display());
            fs::write(path, yaml)
                .with_context(|| format!("Failed to write to file: {}", path.display()))?;
            output::print_success(&format!("Configuration written to: {}", path.display()));
        }
        None => print!("{}", yaml),
    }

    Ok(ExitStatus::Success)
}
