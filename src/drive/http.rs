use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use crate::error::{Result, ShareGuardError};

/// HTTP client abstraction for dependency injection.
pub trait HttpClient {
    /// Perform a GET request and return the response body.
    ///
    /// # Errors
    /// Returns an error on connection failure, timeout, or a non-2xx status.
    fn get(&self, url: &str, bearer_token: Option<&str>) -> Result<String>;

    /// POST a JSON body. The response body is discarded.
    ///
    /// # Errors
    /// Returns an error on connection failure, timeout, or a non-2xx status.
    fn post_json(&self, url: &str, body: &str) -> Result<()>;
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn get(&self, url: &str, bearer_token: Option<&str>) -> Result<String> {
        (**self).get(url, bearer_token)
    }

    fn post_json(&self, url: &str, body: &str) -> Result<()> {
        (**self).post_json(url, body)
    }
}

/// Check if a string is an `http://` or `https://` URL.
#[must_use]
pub fn is_http_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Production HTTP client using reqwest.
///
/// No retries: a failed request surfaces to the caller as-is. The underlying
/// client is built once and shares its connection pool across requests and clones.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// # Errors
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ShareGuardError::Config(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

/// Reduce a URL to its scheme and host.
#[must_use]
pub fn redact_url(url: &str) -> String {
    reqwest::Url::parse(url).map_or_else(
        |_| "<invalid url>".to_string(),
        |parsed| format!("{}://{}/…", parsed.scheme(), parsed.host_str().unwrap_or("")),
    )
}

fn request_error(url: &str, e: &reqwest::Error) -> ShareGuardError {
    let message = if e.is_timeout() {
        "request timed out".to_string()
    } else if e.is_connect() {
        "failed to connect".to_string()
    } else {
        e.to_string()
    };
    ShareGuardError::Http {
        url: url.to_string(),
        message,
    }
}

fn check_status(url: &str, response: reqwest::blocking::Response) -> Result<reqwest::blocking::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(ShareGuardError::Http {
        url: url.to_string(),
        message: format!("HTTP {status}: {}", body.trim()),
    })
}

#[cfg(not(tarpaulin_include))]
impl HttpClient for ReqwestClient {
    fn get(&self, url: &str, bearer_token: Option<&str>) -> Result<String> {
        let mut request = self.client.get(url);
        if let Some(token) = bearer_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().map_err(|e| request_error(url, &e))?;
        check_status(url, response)?
            .text()
            .map_err(|e| request_error(url, &e))
    }

    fn post_json(&self, url: &str, body: &str) -> Result<()> {
        // Webhook URLs embed their secret in the path.
        let shown = redact_url(url);
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .map_err(|e| request_error(&shown, &e.without_url()))?;
        check_status(&shown, response)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
