mod notifier;
mod payload;

pub use notifier::{Notifier, StdoutNotifier, WebhookNotifier};
pub use payload::{
    Attachment, DANGER_COLOR, DISPLAY_LIMIT, SlackPayload, WARNING_COLOR, build_payload,
};

use log::info;
use serde::Serialize;

use crate::error::Result;
use crate::policy::Violation;

/// A violating file and everything wrong with it, in detection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationRecord {
    pub name: String,
    pub url: String,
    pub reasons: Vec<String>,
}

impl ViolationRecord {
    /// Returns `None` when there is nothing to report.
    #[must_use]
    pub fn from_violations(name: &str, url: &str, violations: &[Violation]) -> Option<Self> {
        if violations.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            url: url.to_string(),
            reasons: violations.iter().map(ToString::to_string).collect(),
        })
    }
}

/// Deliver one notification for all `violations`. Nothing is sent when empty.
///
/// Returns whether a notification was delivered.
///
/// # Errors
/// Returns the notifier's error unchanged; there is no retry.
pub fn report(violations: &[ViolationRecord], notifier: &impl Notifier) -> Result<bool> {
    if violations.is_empty() {
        return Ok(false);
    }
    info!("{} violation(s) detected", violations.len());
    let payload = build_payload(violations);
    notifier.deliver(&payload)?;
    Ok(true)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
