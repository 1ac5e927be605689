#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use drive_share_guard::drive::{FileDescriptor, FileLister, ListPage, ListRequest};
use drive_share_guard::report::{Notifier, SlackPayload};
use drive_share_guard::{Result, ShareGuardError};
use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the drive-share-guard binary with a clean environment.
#[macro_export]
macro_rules! share_guard {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("drive-share-guard"));
        cmd.env_remove("DRIVE_SHARE_GUARD_WEBHOOK_URL")
            .env_remove("DRIVE_SHARE_GUARD_TOKEN")
            .env_remove("RUST_LOG");
        cmd
    }};
}

/// Temporary working directory for binary tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) -> PathBuf {
        let path = self.dir.path().join(".drive-share-guard.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }
}

/// In-memory folder tree keyed by (folder id, page token).
#[derive(Default)]
pub struct FakeDrive {
    pages: HashMap<(String, Option<String>), ListPage>,
    failing: Option<String>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeDrive {
    pub fn folder(self, id: &str, items: Vec<FileDescriptor>) -> Self {
        self.page(id, None, items, None)
    }

    pub fn page(
        mut self,
        id: &str,
        token: Option<&str>,
        items: Vec<FileDescriptor>,
        next: Option<&str>,
    ) -> Self {
        self.pages.insert(
            (id.to_string(), token.map(str::to_string)),
            ListPage {
                items,
                next_page_token: next.map(str::to_string),
            },
        );
        self
    }

    pub fn failing_on(mut self, id: &str) -> Self {
        self.failing = Some(id.to_string());
        self
    }
}

impl FileLister for FakeDrive {
    fn list(&self, request: &ListRequest) -> Result<ListPage> {
        self.calls.borrow_mut().push(request.parent_id.clone());
        if self.failing.as_deref() == Some(request.parent_id.as_str()) {
            return Err(ShareGuardError::Http {
                url: "https://www.googleapis.com/drive/v3/files".to_string(),
                message: "HTTP 500 Internal Server Error".to_string(),
            });
        }
        Ok(self
            .pages
            .get(&(request.parent_id.clone(), request.page_token.clone()))
            .cloned()
            .unwrap_or_default())
    }
}

/// Captures every delivered payload.
#[derive(Default)]
pub struct CapturingNotifier {
    pub delivered: RefCell<Vec<SlackPayload>>,
}

impl Notifier for CapturingNotifier {
    fn deliver(&self, payload: &SlackPayload) -> Result<()> {
        self.delivered.borrow_mut().push(payload.clone());
        Ok(())
    }
}

/// Always fails, like an unreachable webhook.
pub struct BrokenNotifier;

impl Notifier for BrokenNotifier {
    fn deliver(&self, _payload: &SlackPayload) -> Result<()> {
        Err(ShareGuardError::delivery(ShareGuardError::Http {
            url: "https://hooks.slack.com/…".to_string(),
            message: "failed to connect".to_string(),
        }))
    }
}
