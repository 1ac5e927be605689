use std::fs;

use log::error;

use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, ShareGuardError};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error!("{}", e.full_message());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ShareGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# drive-share-guard configuration file

[audit]
# Folder whose whole subtree is audited (the ID from the folder URL)
root_folder_id = ""

# Domain suffixes and full addresses treated as internal.
# Matching is a case-sensitive "ends with": "gmail.com" admits alice@gmail.com,
# a full address admits only that address.
allow_list = ["fw@gmail.com", "gmail.com"]

# Files whose name contains this text are never checked ("" disables)
ignore_keyword = "【共有用】"

# Also list items stored in shared drives
include_shared_drives = false

[drive]
api_base = "https://www.googleapis.com/drive/v3"

# Environment variable holding an OAuth access token with drive.metadata.readonly scope
access_token_env = "DRIVE_SHARE_GUARD_TOKEN"
timeout_secs = 30

[notify]
# Slack incoming-webhook URL. Prefer DRIVE_SHARE_GUARD_WEBHOOK_URL to keep it out of files.
webhook_url = ""
timeout_secs = 30
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
