mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit code for runs that could not complete (bad config, unreadable input).
const FATAL_EXIT_CODE: u8 = 2;

#[derive(Parser)]
#[command(name = "ordercheck")]
#[command(version, about = "Order export validation CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an order export and split it into valid and invalid rows
    Validate {
        /// Path to the input CSV (defaults to the configured input)
        input: Option<PathBuf>,

        /// Path to a configuration file (YAML or TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Destination for valid rows
        #[arg(long)]
        valid_output: Option<PathBuf>,

        /// Destination for invalid rows
        #[arg(long)]
        invalid_output: Option<PathBuf>,

        /// Incoming-webhook URL for the alert
        #[arg(long)]
        webhook_url: Option<String>,

        /// Add an error_details column to the invalid rows
        #[arg(long)]
        error_details: bool,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print the effective configuration and rule set without reading data
    Check {
        /// Path to a configuration file (YAML or TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Write a default configuration file
    Init {
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing. Logs go to stderr so stdout carries only the report.
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Validate {
            input,
            config,
            valid_output,
            invalid_output,
            webhook_url,
            error_details,
            format,
        } => {
            let args = commands::validate::ValidateArgs {
                input,
                config,
                valid_output,
                invalid_output,
                webhook_url,
                error_details,
            };
            commands::validate::execute(args, &format).await
        }

        Commands::Check { config, format } => commands::check::execute(config.as_deref(), &format),

        Commands::Init { output, force } => commands::init::execute(output.as_deref(), force),
    };

    match result {
        Ok(status) => ExitCode::from(status.code()),
        Err(e) => {
            output::print_error(&format!("Error: {:#}", e));
            ExitCode::from(FATAL_EXIT_CODE)
        }
    }
}
