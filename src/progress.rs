use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while the Drive tree is being walked.
///
/// The spinner is automatically disabled in quiet mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct ScanProgress {
    progress_bar: ProgressBar,
}

impl ScanProgress {
    /// Creates a spinner that writes to stderr, keeping stdout free for `--dry-run` output.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(quiet, is_tty)
    }

    /// A spinner that never draws.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            progress_bar: ProgressBar::hidden(),
        }
    }

    fn new_with_visibility(quiet: bool, is_tty: bool) -> Self {
        if quiet || !is_tty {
            return Self::hidden();
        }
        Self {
            progress_bar: Self::create_visible_spinner(),
        }
    }

    fn create_visible_spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        // The template is a static string; fall back to the default style if it is ever rejected.
        if let Ok(style) =
            ProgressStyle::default_spinner().template("{spinner:.green} Scanning Drive: {pos} files {msg}")
        {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    }

    pub fn file_scanned(&self) {
        self.progress_bar.inc(1);
    }

    pub fn folders_visited(&self, count: usize) {
        self.progress_bar.set_message(format!("({count} folders)"));
    }

    #[must_use]
    pub fn files_scanned(&self) -> u64 {
        self.progress_bar.position()
    }

    /// Finishes the spinner and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
