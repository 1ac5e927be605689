use serde::Serialize;

use super::ViolationRecord;

/// Maximum number of files rendered as detail blocks.
pub const DISPLAY_LIMIT: usize = 30;

pub const DANGER_COLOR: &str = "danger";
pub const WARNING_COLOR: &str = "warning";

/// Incoming-webhook message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackPayload {
    pub text: String,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
    pub text: String,
}

impl Attachment {
    fn detail(record: &ViolationRecord) -> Self {
        Self {
            color: DANGER_COLOR.to_string(),
            title: Some(record.name.clone()),
            title_link: Some(record.url.clone()),
            text: record.reasons.join("\n"),
        }
    }

    fn omitted(count: usize) -> Self {
        Self {
            color: WARNING_COLOR.to_string(),
            title: None,
            title_link: None,
            text: format!("...{count} more violations omitted"),
        }
    }
}

/// Render the first [`DISPLAY_LIMIT`] records, plus a summary block when more were found.
#[must_use]
pub fn build_payload(violations: &[ViolationRecord]) -> SlackPayload {
    let total = violations.len();
    let mut attachments: Vec<Attachment> = violations
        .iter()
        .take(DISPLAY_LIMIT)
        .map(Attachment::detail)
        .collect();

    if total > DISPLAY_LIMIT {
        attachments.push(Attachment::omitted(total - DISPLAY_LIMIT));
    }

    SlackPayload {
        text: format!("🚨 Drive permission audit: {total} violations found"),
        attachments,
    }
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
