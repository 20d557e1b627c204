//! The bounded page summary produced by extraction.
//!
//! This module defines [`PageSummary`], the structured, size-bounded extract
//! of a webpage's content and visual identity, and [`ImageInfo`], the
//! attribute capture for a single image. A summary is created fresh per
//! extraction, owned by the caller, and never mutated afterwards.

use std::collections::HashMap;

use serde::Serialize;

/// Hard caps enforced on every summary at construction time.
pub const MAX_IMAGES: usize = 10;
/// Maximum number of key points kept after deduplication.
pub const MAX_KEY_POINTS: usize = 8;
/// Maximum number of brand colors kept.
pub const MAX_BRAND_COLORS: usize = 5;
/// Maximum description length in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 200;
/// Maximum content excerpt length in characters.
pub const MAX_CONTENT_CHARS: usize = 1000;

/// Placeholder title used when no heuristic finds one.
pub const UNTITLED: &str = "Untitled Page";

/// Attributes of a single image, captured as found in the markup.
///
/// Dimensions come from the `width`/`height` attributes only; images with
/// no declared dimensions carry `None` rather than a guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    /// Absolute image URL.
    pub src: String,
    /// Alt text, empty string when absent.
    pub alt: String,
    /// Declared width in pixels, if any.
    pub width: Option<u32>,
    /// Declared height in pixels, if any.
    pub height: Option<u32>,
}

/// Bounded structured extract of a webpage.
///
/// Every string field is plain text (no markup), every collection honors its
/// cap, and `url` is always an absolute URI or the document's own location.
/// Required fields degrade to empty values rather than being absent; only
/// `main_image` and `logo` are genuinely optional.
#[derive(Debug, Clone, Serialize)]
pub struct PageSummary {
    /// Absolute URI of the source document.
    pub url: String,

    /// Best-effort single-line title, never empty.
    pub title: String,

    /// Plain-text description, at most 200 characters.
    pub description: String,

    /// Best candidate for a representative image, absolute URI.
    pub main_image: Option<String>,

    /// Gallery images with both dimensions above 100px, at most 10.
    pub images: Vec<ImageInfo>,

    /// Deduplicated candidate highlights, at most 8, each 10-150 chars.
    pub key_points: Vec<String>,

    /// Lowercase hex colors excluding pure black, at most 5.
    pub brand_colors: Vec<String>,

    /// Site logo if a heuristic matched one.
    pub logo: Option<ImageInfo>,

    /// Every meta tag keyed by name or property, last-write-wins.
    pub metadata: HashMap<String, String>,

    /// Plain-text excerpt of the main content, at most 1000 characters.
    pub content: String,
}

impl PageSummary {
    /// Serializes the summary as pretty-printed JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| crate::DraftError::HtmlParseError(e.to_string()))
    }
}

/// Truncate a string to at most `max` characters on a char boundary.
///
/// Operates on `char` counts, not bytes, so multibyte text never splits
/// mid-codepoint.
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

/// Collapse runs of whitespace (including newlines) into single spaces.
pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
