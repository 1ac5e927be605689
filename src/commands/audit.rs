use std::path::Path;

use log::{error, info, warn};

use crate::audit::{AuditOutcome, run_audit};
use crate::cli::{AuditArgs, Cli};
use crate::config::{
    Config, ConfigLoader, FileConfigLoader, FileSystem, validate_config_semantics,
    validate_for_audit, validate_for_delivery,
};
use crate::drive::{DriveApiLister, ReqwestClient};
use crate::error::Result;
use crate::policy::AllowListPolicy;
use crate::progress::ScanProgress;
use crate::report::{StdoutNotifier, WebhookNotifier};
use crate::{EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND};

#[must_use]
pub fn run_audit_command(args: &AuditArgs, cli: &Cli) -> i32 {
    match run_audit_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            error!("{}: {}", e.error_type(), e.full_message());
            e.exit_code()
        }
    }
}

/// Runs one audit end to end and returns the process exit code.
///
/// # Errors
/// Returns configuration, traversal and delivery errors unchanged.
pub fn run_audit_impl(args: &AuditArgs, cli: &Cli) -> Result<i32> {
    let loader = FileConfigLoader::new();
    let config = resolve_config(&loader, args, cli.no_config)?;

    let access_token = loader.access_token(&config);
    if access_token.is_none() {
        warn!(
            "{} is not set; listing requests are sent without credentials",
            config.drive.access_token_env
        );
    }

    let lister = DriveApiLister::new(
        ReqwestClient::new(config.drive.timeout_secs)?,
        &config.drive.api_base,
    )
    .with_access_token(access_token)
    .with_shared_drives(config.audit.include_shared_drives);
    let progress = ScanProgress::new(cli.quiet);

    let outcome = if args.dry_run {
        run_audit(&config.audit, &lister, &StdoutNotifier, progress)?
    } else {
        let notifier = WebhookNotifier::new(
            ReqwestClient::new(config.notify.timeout_secs)?,
            config.notify.webhook_url.as_str(),
        );
        run_audit(&config.audit, &lister, &notifier, progress)?
    };

    if outcome.delivered && !args.dry_run {
        info!("report delivered ({} violations)", outcome.violations);
    }
    Ok(outcome_exit_code(&outcome, args.strict))
}

/// Load, override and validate the configuration for an audit run.
///
/// # Errors
/// Returns an error if loading fails or the resulting configuration is invalid.
pub fn resolve_config<F: FileSystem>(
    loader: &FileConfigLoader<F>,
    args: &AuditArgs,
    no_config: bool,
) -> Result<Config> {
    let mut config = load_config(loader, args.config.as_deref(), no_config)?;
    apply_cli_overrides(&mut config, args);

    validate_config_semantics(&config)?;
    validate_for_audit(&config)?;
    if !args.dry_run {
        validate_for_delivery(&config)?;
    }
    Ok(config)
}

fn load_config<F: FileSystem>(
    loader: &FileConfigLoader<F>,
    config_path: Option<&Path>,
    no_config: bool,
) -> Result<Config> {
    if no_config {
        return Ok(loader.load_defaults());
    }
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

pub fn apply_cli_overrides(config: &mut Config, args: &AuditArgs) {
    if let Some(root) = &args.root {
        config.audit.root_folder_id.clone_from(root);
    }

    if let Some(webhook) = &args.webhook {
        config.notify.webhook_url.clone_from(webhook);
    }

    if !args.allow.is_empty() {
        config.audit.allow_list = AllowListPolicy::new(args.allow.iter().cloned());
    }

    if let Some(keyword) = &args.ignore_keyword {
        config.audit.ignore_keyword = Some(keyword.clone());
    }

    if args.shared_drives {
        config.audit.include_shared_drives = true;
    }
}

#[must_use]
pub const fn outcome_exit_code(outcome: &AuditOutcome, strict: bool) -> i32 {
    if strict && !outcome.is_clean() {
        EXIT_VIOLATIONS_FOUND
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
