use log::{info, warn};

use crate::config::AuditConfig;
use crate::drive::FileLister;
use crate::error::Result;
use crate::progress::ScanProgress;
use crate::report::{Notifier, report};
use crate::walker::{TreeWalker, WalkStats};

/// Result of a completed audit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditOutcome {
    pub violations: usize,
    pub delivered: bool,
    pub stats: WalkStats,
}

impl AuditOutcome {
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.violations == 0
    }
}

/// Walk the tree, evaluate every file, then report once.
///
/// A clean run logs `no anomalies found` and sends nothing.
///
/// # Errors
/// - [`crate::ShareGuardError::Traversal`] if any listing call fails; nothing is reported.
/// - [`crate::ShareGuardError::Delivery`] if the notification cannot be delivered.
pub fn run_audit(
    settings: &AuditConfig,
    lister: &impl FileLister,
    notifier: &impl Notifier,
    progress: ScanProgress,
) -> Result<AuditOutcome> {
    info!(
        "auditing folder {} against {} allow-list entries",
        settings.root_folder_id,
        settings.allow_list.len()
    );
    if settings.allow_list.is_empty() {
        warn!("allow-list is empty: every shared address will be reported");
    }

    let walk = TreeWalker::new(lister, &settings.allow_list)
        .with_ignore_keyword(settings.effective_ignore_keyword())
        .with_progress(progress.clone())
        .walk(&settings.root_folder_id);
    progress.finish();
    let result = walk?;

    let stats = result.stats;
    info!(
        "scanned {} files in {} folders ({} ignored, {} pages)",
        stats.files_seen, stats.folders_visited, stats.files_ignored, stats.pages_fetched
    );

    if result.violations.is_empty() {
        info!("no anomalies found");
    }
    let delivered = report(&result.violations, notifier)?;

    Ok(AuditOutcome {
        violations: result.violations.len(),
        delivered,
        stats,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
