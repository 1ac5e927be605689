use serde::{Deserialize, Serialize};

use crate::policy::AllowListPolicy;

pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/drive/v3";
pub const DEFAULT_ACCESS_TOKEN_ENV: &str = "DRIVE_SHARE_GUARD_TOKEN";
pub const DEFAULT_IGNORE_KEYWORD: &str = "【共有用】";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// What to audit and what counts as safe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditConfig {
    /// Folder whose whole subtree is audited.
    #[serde(default)]
    pub root_folder_id: String,

    /// Domain suffixes and full addresses considered internal.
    #[serde(default = "default_allow_list")]
    pub allow_list: AllowListPolicy,

    /// Files whose name contains this substring are skipped. Empty disables.
    #[serde(default = "default_ignore_keyword")]
    pub ignore_keyword: Option<String>,

    /// Also list items that live in shared drives.
    #[serde(default)]
    pub include_shared_drives: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            root_folder_id: String::new(),
            allow_list: default_allow_list(),
            ignore_keyword: default_ignore_keyword(),
            include_shared_drives: false,
        }
    }
}

impl AuditConfig {
    /// The ignore keyword, or `None` when filtering is disabled.
    #[must_use]
    pub fn effective_ignore_keyword(&self) -> Option<&str> {
        self.ignore_keyword.as_deref().filter(|k| !k.is_empty())
    }
}

/// Listing API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DriveConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Name of the environment variable holding the OAuth access token.
    #[serde(default = "default_access_token_env")]
    pub access_token_env: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            access_token_env: default_access_token_env(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Notification destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotifyConfig {
    /// Incoming-webhook URL. Usually supplied through the environment instead.
    #[serde(default)]
    pub webhook_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub audit: AuditConfig,

    #[serde(default)]
    pub drive: DriveConfig,

    #[serde(default)]
    pub notify: NotifyConfig,
}

fn default_allow_list() -> AllowListPolicy {
    AllowListPolicy::new(["gmail.com"])
}

#[allow(clippy::unnecessary_wraps)]
fn default_ignore_keyword() -> Option<String> {
    Some(DEFAULT_IGNORE_KEYWORD.to_string())
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_access_token_env() -> String {
    DEFAULT_ACCESS_TOKEN_ENV.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
