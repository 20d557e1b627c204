//! Error types for postdraft operations.
//!
//! This module defines the main error type [`DraftError`] which represents
//! all possible errors that can occur during page fetching, summary
//! extraction, and draft generation.
//!
//! Most conditions inside the pipeline are not errors at all: a missing
//! title, an unmatched content-type pattern, or an unknown style all degrade
//! to documented defaults. Only document-level failures and delivery-surface
//! I/O cross the library boundary as `Err`.
//!
//! # Example
//!
//! ```rust
//! use postdraft_core::{DraftError, Result};
//!
//! fn summarize(html: &str) -> Result<String> {
//!     if html.is_empty() {
//!         return Err(DraftError::DocumentUnreadable("empty input".to_string()));
//!     }
//!     // ... extraction logic
//!     # Ok(String::new())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for extraction and generation operations.
///
/// This enum represents all possible errors that can occur during HTTP
/// fetching, HTML parsing, remote model delegation, and file I/O.
#[derive(Error, Debug)]
pub enum DraftError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(any(feature = "fetch", feature = "remote"))]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[cfg(any(feature = "fetch", feature = "remote"))]
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or is malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors.
    ///
    /// Returned when a CSS selector is invalid or markup cannot be handled.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// The document itself could not be read.
    ///
    /// This is the only fatal extraction failure: individual field
    /// heuristics that find nothing degrade to safe defaults instead.
    #[error("Document is unreadable: {0}")]
    DocumentUnreadable(String),

    /// Remote model generation failed.
    ///
    /// Covers non-success HTTP status, malformed response bodies, and
    /// missing choices. Callers of the generation pipeline never see this
    /// variant: [`crate::Generator::generate_with_remote`] absorbs it by
    /// falling back to the deterministic template path.
    #[cfg(feature = "remote")]
    #[error("Remote generation failed: {0}")]
    RemoteGeneration(String),

    /// Catalog data errors.
    ///
    /// Returned when replacement hashtag/CTA/hook catalog JSON is invalid.
    #[error("Catalog error: {0}")]
    CatalogError(String),

    /// File not found.
    ///
    /// Returned when attempting to read a file that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File write errors.
    ///
    /// Wraps standard I/O errors for file operations.
    #[error("Failed to write to file: {0}")]
    WriteError(#[from] std::io::Error),
}

/// Result type alias for DraftError.
///
/// This is a convenience alias for `std::result::Result<T, DraftError>`.
pub type Result<T> = std::result::Result<T, DraftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DraftError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_document_unreadable_error() {
        let err = DraftError::DocumentUnreadable("cross-origin frame".to_string());
        assert!(err.to_string().contains("unreadable"));
        assert!(err.to_string().contains("cross-origin frame"));
    }

    #[cfg(feature = "remote")]
    #[test]
    fn test_remote_generation_error() {
        let err = DraftError::RemoteGeneration("status 503".to_string());
        assert!(err.to_string().contains("503"));
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_timeout_error() {
        let err = DraftError::Timeout { timeout: 30 };
        assert!(err.to_string().contains("30"));
    }
}
