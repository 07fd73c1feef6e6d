//! Reporting, alerting and run orchestration for ordercheck.
//!
//! This crate turns a [`Partition`](orders_validator::Partition) into
//! persisted tables, a summary, an optional alert and an exit status. The
//! [`ValidationRun`] ties every stage together.
//!
//! # Example
//!
//! ```no_run
//! use orders_core::CheckConfig;
//! use orders_report::ValidationRun;
//!
//! # async fn example() -> Result<(), orders_report::RunError> {
//! let outcome = ValidationRun::new(CheckConfig::default())?.execute().await?;
//! std::process::exit(outcome.exit_status.code() as i32);
//! # }
//! ```

mod alert;
mod notifier;
mod pipeline;
mod reporter;

pub use alert::AlertMessage;
pub use notifier::{ConsoleNotifier, DeliveryStatus, Notifier, NotifyError, WebhookNotifier};
pub use pipeline::{RunError, RunOutcome, RunStage, ValidationRun};
pub use reporter::{OutputStatus, PersistReport, Reporter};
