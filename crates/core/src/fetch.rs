//! Page fetching from URLs, files, and stdin.
//!
//! This module provides functions for retrieving HTML content from the
//! sources the CLI accepts: HTTP/HTTPS URLs, local files, and standard
//! input. Only http(s) URLs are fetched, matching the sanitization policy
//! applied to URLs on the way out.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::{DraftError, Result};

/// Content negotiation sent with every page request.
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// HTTP client configuration for fetching web pages.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; Postdraft/0.3; +https://github.com/postdraft/postdraft)".to_string(),
        }
    }
}

impl FetchConfig {
    /// Build the HTTP client this config describes.
    fn client(&self) -> Result<Client> {
        Client::builder()
            .timeout(Duration::from_secs(self.timeout))
            .user_agent(&self.user_agent)
            .build()
            .map_err(DraftError::HttpError)
    }
}

/// Fetches HTML content from an http(s) URL.
///
/// This function performs an HTTP GET request and returns the response body
/// as text. It follows redirects and respects the configured timeout.
///
/// # Errors
///
/// Returns [`DraftError::InvalidUrl`] for unparseable URLs and non-http(s)
/// schemes, [`DraftError::Timeout`] on timeout, and [`DraftError::HttpError`]
/// for transport failures.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| DraftError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(DraftError::InvalidUrl(format!(
            "unsupported scheme: {}",
            parsed_url.scheme()
        )));
    }

    debug!(url = %parsed_url, timeout = config.timeout, "fetching page");

    let response = config
        .client()?
        .get(parsed_url)
        .header("Accept", ACCEPT)
        .header("Accept-Language", ACCEPT_LANGUAGE)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                DraftError::Timeout { timeout: config.timeout }
            } else {
                DraftError::HttpError(e)
            }
        })?;

    Ok(response.text().await?)
}

/// Reads HTML content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        return Err(DraftError::FileNotFound(path_buf));
    }

    debug!(path = %path_buf.display(), "reading page from file");
    Ok(fs::read_to_string(&path_buf)?)
}

/// Reads HTML content from standard input until EOF.
///
/// Useful for piping content from other commands.
pub fn fetch_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
