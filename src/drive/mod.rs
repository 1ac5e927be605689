mod api;
mod http;
mod types;

pub use api::{DriveApiLister, FIELD_SELECTOR, FOLDER_MIME_TYPE};
pub use http::{HttpClient, ReqwestClient, is_http_url, redact_url};
pub use types::{FileDescriptor, ItemKind, PermissionEntry, PrincipalType, Role};

use crate::error::Result;

/// Maximum page size accepted by the listing API.
pub const PAGE_SIZE: u32 = 1000;

/// One call to the listing capability: the children of `parent_id`, one page at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub parent_id: String,
    pub page_token: Option<String>,
    pub page_size: u32,
}

impl ListRequest {
    #[must_use]
    pub fn first_page(parent_id: impl Into<String>) -> Self {
        Self {
            parent_id: parent_id.into(),
            page_token: None,
            page_size: PAGE_SIZE,
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.page_token = token;
        self
    }
}

/// One page of children. `next_page_token` is `None` on the last page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPage {
    pub items: Vec<FileDescriptor>,
    pub next_page_token: Option<String>,
}

/// Trait for listing the direct, non-trashed children of a folder.
pub trait FileLister {
    /// Fetch one page of children.
    ///
    /// # Errors
    /// Returns an error if the remote listing call fails or its response cannot be parsed.
    fn list(&self, request: &ListRequest) -> Result<ListPage>;
}

impl<T: FileLister + ?Sized> FileLister for &T {
    fn list(&self, request: &ListRequest) -> Result<ListPage> {
        (**self).list(request)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
