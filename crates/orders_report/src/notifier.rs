//! Alert delivery to a webhook or the console.
//!
//! A run with invalid rows raises one [`AlertMessage`]. When a webhook URL is
//! configured the alert is POSTed as `{"text": ...}`; otherwise it is printed.
//! Delivery failures never abort a run: they come back as
//! [`DeliveryStatus::Failed`].

use crate::AlertMessage;
use orders_core::NotificationConfig;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{error, info};

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const BANNER_WIDTH: usize = 60;

/// Error type for webhook delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server answered with something other than 200.
    #[error("Webhook returned HTTP {0}")]
    HttpStatus(u16),
}

/// Result of one delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// The webhook accepted the alert.
    Delivered,
    /// No webhook was configured; the alert went to the console.
    Printed,
    /// The webhook could not be reached or rejected the alert.
    Failed(String),
}

impl DeliveryStatus {
    /// Returns true if the webhook could not take the alert.
    pub fn is_failed(&self) -> bool {
        matches!(self, DeliveryStatus::Failed(_))
    }
}

/// Posts alerts to an incoming-webhook endpoint.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    /// Creates a notifier with a pre-configured HTTP client.
    pub fn new(url: impl Into<String>) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Returns the endpoint alerts are posted to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends a single POST and checks the response status. No retries.
    pub async fn send(&self, alert: &AlertMessage) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.url)
            .json(&alert.payload())
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(NotifyError::HttpStatus(status.as_u16()));
        }
        Ok(())
    }
}

/// Prints alerts to stdout, or to stderr when stdout carries a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleNotifier {
    to_stderr: bool,
}

impl ConsoleNotifier {
    /// Creates a notifier printing to stdout.
    pub fn stdout() -> Self {
        Self { to_stderr: false }
    }

    /// Creates a notifier printing to stderr.
    pub fn stderr() -> Self {
        Self { to_stderr: true }
    }

    /// Returns true if alerts go to stderr.
    pub fn is_stderr(&self) -> bool {
        self.to_stderr
    }

    /// Renders the alert between banner lines.
    pub fn render(&self, alert: &AlertMessage) -> String {
        let rule = "═".repeat(BANNER_WIDTH);
        format!("{rule}\nALERT (no webhook configured)\n{rule}\n{}\n{rule}", alert.text())
    }

    /// Writes the rendered alert to the chosen stream.
    pub fn print(&self, alert: &AlertMessage) {
        if self.to_stderr {
            eprintln!("\n{}\n", self.render(alert));
        } else {
            println!("\n{}\n", self.render(alert));
        }
    }
}

/// Alert destination chosen from configuration.
#[derive(Debug, Clone)]
pub enum Notifier {
    Webhook(WebhookNotifier),
    Console(ConsoleNotifier),
}

impl Notifier {
    /// Uses the webhook when a non-blank URL is configured, the console
    /// otherwise.
    pub fn from_config(config: &NotificationConfig) -> Result<Self, NotifyError> {
        match config.webhook() {
            Some(url) => Ok(Notifier::Webhook(WebhookNotifier::new(url)?)),
            None => Ok(Notifier::Console(ConsoleNotifier::stdout())),
        }
    }

    /// Moves console alerts to stderr. A webhook is left as is.
    pub fn console_to_stderr(self) -> Self {
        match self {
            Notifier::Console(_) => Notifier::Console(ConsoleNotifier::stderr()),
            webhook => webhook,
        }
    }

    /// Returns true if alerts are posted to a webhook.
    pub fn is_webhook(&self) -> bool {
        matches!(self, Notifier::Webhook(_))
    }

    /// Delivers the alert. Failures are logged and reported, never raised.
    pub async fn notify(&self, alert: &AlertMessage) -> DeliveryStatus {
        match self {
            Notifier::Webhook(webhook) => match webhook.send(alert).await {
                Ok(()) => {
                    info!("Alert sent to webhook");
                    DeliveryStatus::Delivered
                }
                Err(e) => {
                    error!("Failed to send alert: {}", e);
                    DeliveryStatus::Failed(e.to_string())
                }
            },
            Notifier::Console(console) => {
                console.print(alert);
                DeliveryStatus::Printed
            }
        }
    }
}
