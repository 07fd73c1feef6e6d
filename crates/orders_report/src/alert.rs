//! Alert message construction.

use orders_core::RunSummary;
use serde_json::{json, Value};
use std::path::Path;

/// Alert raised when a run finds invalid rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    /// Title line
    pub title: String,

    /// Counts of the run
    pub summary: RunSummary,

    /// Where the invalid rows were written
    pub destination: String,
}

impl AlertMessage {
    /// Builds an alert from a run summary.
    pub fn from_summary(summary: RunSummary, destination: &Path, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary,
            destination: destination.display().to_string(),
        }
    }

    /// Renders the alert text.
    ///
    /// Uses chat markup (`*bold*`, `` `code` ``) understood by common webhook
    /// receivers.
    pub fn text(&self) -> String {
        format!(
            "⚠️ *{}*\n\n\
             • Total rows: {}\n\
             • Valid rows: {}\n\
             • Invalid rows: {}\n\n\
             ❌ Please check `{}` for details.",
            self.title,
            self.summary.total,
            self.summary.valid,
            self.summary.invalid,
            self.destination
        )
    }

    /// Returns the webhook JSON body: `{"text": ...}`.
    pub fn payload(&self) -> Value {
        json!({ "text": self.text() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn alert() -> AlertMessage {
        AlertMessage::from_summary(
            RunSummary::new(8, 2),
            Path::new("out/invalid_rows.csv"),
            "Order Validation Alert",
        )
    }

    #[test]
    fn test_text() {
        assert_eq!(
            alert().text(),
            "⚠️ *Order Validation Alert*\n\n\
             • Total rows: 10\n\
             • Valid rows: 8\n\
             • Invalid rows: 2\n\n\
             ❌ Please check `out/invalid_rows.csv` for details."
        );
    }

    #[test]
    fn test_payload_has_only_text() {
        let payload = alert().payload();
        let object = payload.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["text"], alert().text());
    }
}
