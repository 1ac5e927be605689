use std::collections::VecDeque;

use log::debug;
use serde::Serialize;

use crate::drive::{FileDescriptor, FileLister, ListRequest};
use crate::error::{Result, ShareGuardError};
use crate::policy::FileChecker;
use crate::progress::ScanProgress;
use crate::report::ViolationRecord;

/// Counters collected during one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WalkStats {
    pub folders_visited: usize,
    pub pages_fetched: usize,
    pub files_seen: usize,
    pub files_ignored: usize,
    pub files_with_violations: usize,
    pub max_depth: usize,
}

/// Outcome of a complete walk. Records are in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunResult {
    pub violations: Vec<ViolationRecord>,
    pub stats: WalkStats,
}

/// Paging state of one folder on the work stack.
struct FolderCursor {
    folder_id: String,
    pending: VecDeque<FileDescriptor>,
    next_page_token: Option<String>,
    started: bool,
}

impl FolderCursor {
    fn new(folder_id: String) -> Self {
        Self {
            folder_id,
            pending: VecDeque::new(),
            next_page_token: None,
            started: false,
        }
    }

    /// Whether another page should be requested once `pending` is drained.
    const fn needs_page(&self) -> bool {
        !self.started || self.next_page_token.is_some()
    }
}

/// Depth-first walker over a paginated folder listing.
///
/// Folders are kept on an explicit stack rather than the call stack. The visiting
/// order is still that of a recursive descent: a subfolder is drained completely
/// before the next item of its parent's current page, and before the parent's next
/// page is requested.
pub struct TreeWalker<'a, L: FileLister, C: FileChecker> {
    lister: &'a L,
    checker: &'a C,
    ignore_keyword: Option<&'a str>,
    progress: ScanProgress,
}

impl<'a, L: FileLister, C: FileChecker> TreeWalker<'a, L, C> {
    #[must_use]
    pub fn new(lister: &'a L, checker: &'a C) -> Self {
        Self {
            lister,
            checker,
            ignore_keyword: None,
            progress: ScanProgress::hidden(),
        }
    }

    /// Files whose name contains `keyword` (case-sensitive) are skipped. Empty disables.
    #[must_use]
    pub fn with_ignore_keyword(mut self, keyword: Option<&'a str>) -> Self {
        self.ignore_keyword = keyword.filter(|k| !k.is_empty());
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: ScanProgress) -> Self {
        self.progress = progress;
        self
    }

    fn is_ignored(&self, file: &FileDescriptor) -> bool {
        self.ignore_keyword
            .is_some_and(|keyword| file.name.contains(keyword))
    }

    /// Walk everything below `root_folder_id`.
    ///
    /// # Errors
    /// Returns [`ShareGuardError::Traversal`] on the first listing failure at any depth.
    /// No partial result is returned.
    pub fn walk(&self, root_folder_id: &str) -> Result<RunResult> {
        let mut result = RunResult::default();
        let mut stack = vec![self.enter(root_folder_id.to_string(), &mut result.stats, 0)];

        while let Some(cursor) = stack.last_mut() {
            if let Some(item) = cursor.pending.pop_front() {
                if item.is_folder() {
                    let depth = stack.len();
                    let child = self.enter(item.id, &mut result.stats, depth);
                    stack.push(child);
                } else {
                    self.visit_file(&item, &mut result);
                }
                continue;
            }

            if !cursor.needs_page() {
                stack.pop();
                continue;
            }

            let request = ListRequest::first_page(cursor.folder_id.clone())
                .with_token(cursor.next_page_token.take());
            let page = self
                .lister
                .list(&request)
                .map_err(|e| ShareGuardError::traversal(&cursor.folder_id, e))?;
            result.stats.pages_fetched += 1;
            cursor.started = true;

            // An empty page ends the folder even if a token came with it.
            if page.items.is_empty() {
                debug!("folder {} drained", cursor.folder_id);
                stack.pop();
                continue;
            }
            cursor.pending = page.items.into();
            cursor.next_page_token = page.next_page_token;
        }

        Ok(result)
    }

    fn enter(&self, folder_id: String, stats: &mut WalkStats, depth: usize) -> FolderCursor {
        debug!("entering folder {folder_id} at depth {depth}");
        stats.folders_visited += 1;
        stats.max_depth = stats.max_depth.max(depth);
        self.progress.folders_visited(stats.folders_visited);
        FolderCursor::new(folder_id)
    }

    fn visit_file(&self, file: &FileDescriptor, result: &mut RunResult) {
        result.stats.files_seen += 1;
        self.progress.file_scanned();

        if self.is_ignored(file) {
            debug!("ignoring {}", file.name);
            result.stats.files_ignored += 1;
            return;
        }

        let violations = self.checker.check(file);
        if let Some(record) = ViolationRecord::from_violations(&file.name, &file.view_url, &violations) {
            debug!("{}: {} violation(s)", file.name, record.reasons.len());
            result.stats.files_with_violations += 1;
            result.violations.push(record);
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
