use crate::drive::is_http_url;
use crate::error::{Result, ShareGuardError};

use super::Config;

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if an allow-list entry is blank or contains whitespace, the API
/// base is not an HTTP URL, or a timeout is zero.
///
/// The root folder may still be empty here; it can be supplied with `--root`.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    for (i, entry) in config.audit.allow_list.iter().enumerate() {
        if entry.is_empty() || entry.chars().any(char::is_whitespace) {
            return Err(ShareGuardError::Config(format!(
                "audit.allow_list[{i}] must be a non-empty domain or address without whitespace, got {entry:?}"
            )));
        }
    }

    if !is_http_url(&config.drive.api_base) {
        return Err(ShareGuardError::Config(format!(
            "drive.api_base must start with http:// or https://, got {}",
            config.drive.api_base
        )));
    }

    if config.drive.access_token_env.trim().is_empty() {
        return Err(ShareGuardError::Config(
            "drive.access_token_env must name an environment variable".to_string(),
        ));
    }

    if config.drive.timeout_secs == 0 {
        return Err(ShareGuardError::Config(
            "drive.timeout_secs must be greater than 0".to_string(),
        ));
    }

    if config.notify.timeout_secs == 0 {
        return Err(ShareGuardError::Config(
            "notify.timeout_secs must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Checks that only apply once CLI overrides are in place and an audit is about to run.
///
/// # Errors
/// Returns an error if no root folder is set.
pub fn validate_for_audit(config: &Config) -> Result<()> {
    if config.audit.root_folder_id.trim().is_empty() {
        return Err(ShareGuardError::Config(
            "audit.root_folder_id must be set (or pass --root)".to_string(),
        ));
    }
    Ok(())
}

/// Additional checks when the report will actually be posted.
///
/// # Errors
/// Returns an error if the webhook URL is missing or not an HTTP URL.
pub fn validate_for_delivery(config: &Config) -> Result<()> {
    if config.notify.webhook_url.is_empty() {
        return Err(ShareGuardError::Config(
            "notify.webhook_url must be set (or pass --webhook, or use --dry-run)".to_string(),
        ));
    }
    if !is_http_url(&config.notify.webhook_url) {
        return Err(ShareGuardError::Config(
            "notify.webhook_url must start with http:// or https://".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
