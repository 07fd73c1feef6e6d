//! End-to-end validation run.
//!
//! A run moves through a fixed sequence of stages:
//!
//! ```text
//! Loading -> Validating -> Summarizing -> Persisting -> Notifying -> Terminated(exit status)
//! ```
//!
//! A failure while loading aborts before any output is written. A required
//! column missing from the header only warns: every row then fails the rule
//! for that column. Alert delivery problems never fail the run.

use crate::{AlertMessage, DeliveryStatus, Notifier, NotifyError, PersistReport, Reporter};
use orders_core::{CheckConfig, ExitStatus, RunSummary};
use orders_csv::{CsvError, TableReader};
use orders_validator::{Partition, Partitioner, ValidationError};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that end a run without an exit status of 0 or 1.
#[derive(Debug, Error)]
pub enum RunError {
    /// The rule set could not be prepared
    #[error("Failed to prepare validator: {0}")]
    Setup(#[from] ValidationError),

    /// The HTTP client for the webhook could not be built
    #[error("Failed to prepare notifier: {0}")]
    Notifier(#[from] NotifyError),

    /// The input could not be read or parsed
    #[error("Failed to load input: {0}")]
    Load(#[source] CsvError),

    /// An output file could not be written
    #[error("Failed to write outputs: {0}")]
    Persist(#[source] CsvError),
}

/// Stage of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    Loading,
    Validating,
    Summarizing,
    Persisting,
    Notifying,
    Terminated(ExitStatus),
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStage::Loading => f.write_str("loading"),
            RunStage::Validating => f.write_str("validating"),
            RunStage::Summarizing => f.write_str("summarizing"),
            RunStage::Persisting => f.write_str("persisting"),
            RunStage::Notifying => f.write_str("notifying"),
            RunStage::Terminated(status) => write!(f, "terminated (exit {})", status.code()),
        }
    }
}

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub summary: RunSummary,
    pub partition: Partition,
    pub persisted: PersistReport,
    /// `None` when every row was valid and no alert was raised.
    pub delivery: Option<DeliveryStatus>,
    pub exit_status: ExitStatus,
}

/// A single validation run over one input file.
///
/// On failure the run stays at the stage that failed, so callers can report
/// where it stopped.
pub struct ValidationRun {
    config: CheckConfig,
    partitioner: Partitioner,
    reader: TableReader,
    reporter: Reporter,
    notifier: Notifier,
    stage: RunStage,
}

impl ValidationRun {
    /// Prepares a run from configuration.
    pub fn new(config: CheckConfig) -> Result<Self, RunError> {
        let partitioner = Partitioner::for_market(&config.market)?;
        let notifier = Notifier::from_config(&config.notification)?;
        Ok(Self {
            reader: TableReader::from_config(&config.input),
            reporter: Reporter::from_config(&config),
            partitioner,
            notifier,
            config,
            stage: RunStage::Loading,
        })
    }

    /// Replaces the configured alert destination.
    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = notifier;
        self
    }

    /// Sends a console alert to stderr, leaving stdout to a report.
    pub fn alerts_to_stderr(mut self) -> Self {
        self.notifier = self.notifier.console_to_stderr();
        self
    }

    /// Returns the current stage, or the stage a failed run stopped at.
    pub fn stage(&self) -> RunStage {
        self.stage
    }

    /// Returns the configuration the run was prepared from.
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    fn advance(&mut self, stage: RunStage) {
        debug!("Run stage: {} -> {}", self.stage, stage);
        self.stage = stage;
    }

    /// Executes every stage and returns the outcome.
    pub async fn execute(&mut self) -> Result<RunOutcome, RunError> {
        info!("Starting validation run for {}", self.config.input.path.display());
        let table = self
            .reader
            .read_path(&self.config.input.path)
            .map_err(RunError::Load)?;

        for error in self.partitioner.validator().validate_headers(table.headers()) {
            warn!("{}; affected rows will be invalid", error);
        }

        self.advance(RunStage::Validating);
        let partition = self.partitioner.partition(&table);

        self.advance(RunStage::Summarizing);
        let summary = partition.summary();
        info!("Validation summary:");
        info!("  Total rows: {}", summary.total);
        info!("  Valid rows: {}", summary.valid);
        info!("  Invalid rows: {}", summary.invalid);

        self.advance(RunStage::Persisting);
        let persisted = self
            .reporter
            .persist(table.headers(), &partition)
            .map_err(RunError::Persist)?;

        self.advance(RunStage::Notifying);
        let delivery = if summary.passed() {
            info!("All rows passed validation");
            None
        } else {
            warn!("Found {} invalid rows, sending alert", summary.invalid);
            let alert = AlertMessage::from_summary(
                summary,
                self.reporter.invalid_path(),
                self.config.notification.title.clone(),
            );
            Some(self.notifier.notify(&alert).await)
        };

        let exit_status = summary.exit_status();
        self.advance(RunStage::Terminated(exit_status));
        info!("Exit code: {}", exit_status.code());

        Ok(RunOutcome {
            summary,
            partition,
            persisted,
            delivery,
            exit_status,
        })
    }
}
