use std::fmt::Write;
use std::fs;
use std::path::Path;

use log::{error, warn};

use crate::cli::{Cli, ConfigAction, ConfigOutputFormat};
use crate::config::{
    Config, ConfigLoader, FileConfigLoader, validate_config_semantics, validate_for_delivery,
};
use crate::drive::redact_url;
use crate::{EXIT_SUCCESS, Result, ShareGuardError};

#[must_use]
pub fn run_config(args: &crate::cli::ConfigArgs, cli: &Cli) -> i32 {
    let result = match &args.action {
        ConfigAction::Validate { config } => run_config_validate_impl(config).map(|()| {
            println!("Configuration is valid: {}", config.display());
        }),
        ConfigAction::Show { config, format } => {
            run_config_show_impl(config.as_deref(), *format, cli.no_config).map(|output| {
                print!("{output}");
            })
        }
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error!("{}", e.full_message());
            e.exit_code()
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
/// An empty root folder only warns, since `audit --root` can supply it.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(ShareGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;

    validate_config_semantics(&config)?;
    if !config.notify.webhook_url.is_empty() {
        validate_for_delivery(&config)?;
    }
    if config.audit.root_folder_id.trim().is_empty() {
        warn!("audit.root_folder_id is empty; pass --root when running an audit");
    }
    Ok(())
}

/// Renders the effective configuration. The webhook URL is redacted.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    no_config: bool,
) -> Result<String> {
    let loader = FileConfigLoader::new();
    let mut config = if no_config {
        loader.load_defaults()
    } else {
        config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?
    };
    if !config.notify.webhook_url.is_empty() {
        config.notify.webhook_url = redact_url(&config.notify.webhook_url);
    }

    match format {
        ConfigOutputFormat::Json => Ok(serde_json::to_string_pretty(&config)? + "\n"),
        ConfigOutputFormat::Text => Ok(format_config_text(&config)),
    }
}

#[must_use]
pub fn format_config_text(config: &Config) -> String {
    let mut out = String::new();
    let audit = &config.audit;

    let _ = writeln!(out, "[audit]");
    let _ = writeln!(out, "root_folder_id = {:?}", audit.root_folder_id);
    let _ = writeln!(
        out,
        "allow_list = [{}]",
        audit
            .allow_list
            .iter()
            .map(|entry| format!("{entry:?}"))
            .collect::<Vec<_>>()
            .join(", ")
    );
    let _ = writeln!(
        out,
        "ignore_keyword = {:?}",
        audit.effective_ignore_keyword().unwrap_or("")
    );
    let _ = writeln!(out, "include_shared_drives = {}", audit.include_shared_drives);

    let _ = writeln!(out, "\n[drive]");
    let _ = writeln!(out, "api_base = {:?}", config.drive.api_base);
    let _ = writeln!(out, "access_token_env = {:?}", config.drive.access_token_env);
    let _ = writeln!(out, "timeout_secs = {}", config.drive.timeout_secs);

    let _ = writeln!(out, "\n[notify]");
    let _ = writeln!(out, "webhook_url = {:?}", config.notify.webhook_url);
    let _ = writeln!(out, "timeout_secs = {}", config.notify.timeout_secs);
    out
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
