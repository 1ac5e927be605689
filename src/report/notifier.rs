use std::io::Write;

use crate::drive::HttpClient;
use crate::error::{Result, ShareGuardError};

use super::SlackPayload;

/// Trait for delivering one rendered report.
pub trait Notifier {
    /// # Errors
    /// Returns [`ShareGuardError::Delivery`] if the message could not be delivered.
    fn deliver(&self, payload: &SlackPayload) -> Result<()>;
}

/// Posts the payload as JSON to an incoming-webhook URL, once.
pub struct WebhookNotifier<H: HttpClient> {
    client: H,
    url: String,
}

impl<H: HttpClient> WebhookNotifier<H> {
    #[must_use]
    pub fn new(client: H, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl<H: HttpClient> Notifier for WebhookNotifier<H> {
    fn deliver(&self, payload: &SlackPayload) -> Result<()> {
        let body = serde_json::to_string(payload).map_err(|e| ShareGuardError::delivery(e.into()))?;
        self.client
            .post_json(&self.url, &body)
            .map_err(ShareGuardError::delivery)
    }
}

/// Writes the payload as pretty JSON instead of sending it (`--dry-run`).
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutNotifier;

impl StdoutNotifier {
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn write_to(writer: &mut impl Write, payload: &SlackPayload) -> Result<()> {
        let json = serde_json::to_string_pretty(payload)?;
        writeln!(writer, "{json}")?;
        Ok(())
    }
}

impl Notifier for StdoutNotifier {
    fn deliver(&self, payload: &SlackPayload) -> Result<()> {
        let stdout = std::io::stdout();
        Self::write_to(&mut stdout.lock(), payload).map_err(ShareGuardError::delivery)
    }
}

#[cfg(test)]
#[path = "notifier_tests.rs"]
mod tests;
