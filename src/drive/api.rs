use log::trace;
use serde::Deserialize;

use crate::error::{Result, ShareGuardError};

use super::http::HttpClient;
use super::types::{FileDescriptor, ItemKind, PermissionEntry, PrincipalType, Role};
use super::{FileLister, ListPage, ListRequest};

pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Fields requested for each listed item.
pub const FIELD_SELECTOR: &str = "nextPageToken, files(id, name, mimeType, webViewLink, \
                                  permissions(emailAddress, role, type), shared)";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileListResponse {
    next_page_token: Option<String>,
    // Absent and explicit null both mean an empty page.
    #[serde(default)]
    files: Option<Vec<ApiFile>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiFile {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    mime_type: String,
    #[serde(default)]
    web_view_link: String,
    #[serde(default)]
    shared: bool,
    #[serde(default)]
    permissions: Option<Vec<ApiPermission>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiPermission {
    email_address: Option<String>,
    #[serde(default)]
    role: String,
    #[serde(rename = "type", default)]
    principal_type: String,
}

impl From<ApiPermission> for PermissionEntry {
    fn from(p: ApiPermission) -> Self {
        Self::new(
            PrincipalType::from_api(&p.principal_type),
            p.email_address,
            Role::from_api(&p.role),
        )
    }
}

impl From<ApiFile> for FileDescriptor {
    fn from(f: ApiFile) -> Self {
        let kind = if f.mime_type == FOLDER_MIME_TYPE {
            ItemKind::Folder
        } else {
            ItemKind::File
        };
        Self {
            id: f.id,
            name: f.name,
            kind,
            shared: f.shared,
            permissions: f
                .permissions
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
            view_url: f.web_view_link,
        }
    }
}

/// Lists folder children through the Drive v3 `files.list` endpoint.
pub struct DriveApiLister<H: HttpClient> {
    client: H,
    api_base: String,
    access_token: Option<String>,
    include_shared_drives: bool,
}

impl<H: HttpClient> DriveApiLister<H> {
    #[must_use]
    pub fn new(client: H, api_base: &str) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            access_token: None,
            include_shared_drives: false,
        }
    }

    #[must_use]
    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token;
        self
    }

    #[must_use]
    pub const fn with_shared_drives(mut self, enabled: bool) -> Self {
        self.include_shared_drives = enabled;
        self
    }

    /// Build the full request URL for one page.
    ///
    /// # Errors
    /// Returns an error if `api_base` is not a valid URL.
    pub fn request_url(&self, request: &ListRequest) -> Result<String> {
        let query = format!(
            "'{}' in parents and trashed = false",
            escape_query_literal(&request.parent_id)
        );
        let page_size = request.page_size.to_string();

        let mut params: Vec<(&str, &str)> = vec![
            ("q", query.as_str()),
            ("pageSize", page_size.as_str()),
            ("fields", FIELD_SELECTOR),
        ];
        if let Some(token) = &request.page_token {
            params.push(("pageToken", token.as_str()));
        }
        if self.include_shared_drives {
            params.push(("supportsAllDrives", "true"));
            params.push(("includeItemsFromAllDrives", "true"));
        }

        let base = format!("{}/files", self.api_base);
        reqwest::Url::parse_with_params(&base, &params)
            .map(String::from)
            .map_err(|e| ShareGuardError::Config(format!("Invalid Drive API base URL {base}: {e}")))
    }
}

/// Escape a value for use inside a single-quoted Drive query literal.
fn escape_query_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Parse a `files.list` response body.
///
/// # Errors
/// Returns an error if the body is not the expected JSON shape.
pub fn parse_list_response(body: &str) -> Result<ListPage> {
    let response: FileListResponse = serde_json::from_str(body)?;
    Ok(ListPage {
        items: response
            .files
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect(),
        next_page_token: response.next_page_token.filter(|t| !t.is_empty()),
    })
}

impl<H: HttpClient> FileLister for DriveApiLister<H> {
    fn list(&self, request: &ListRequest) -> Result<ListPage> {
        let url = self.request_url(request)?;
        trace!(
            "files.list parent={} token={:?}",
            request.parent_id, request.page_token
        );
        let body = self.client.get(&url, self.access_token.as_deref())?;
        parse_list_response(&body)
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
