//! Output sanitization.
//!
//! Every draft leaves the generator through [`sanitize_text`], and remote
//! model output passes through it before being wrapped in a draft. The
//! rules are deliberately blunt: strip markup and control characters, keep
//! the text otherwise intact.

use regex::Regex;
use url::Url;

/// Platforms accepted at the parse boundary.
const KNOWN_PLATFORMS: [&str; 4] = ["linkedin", "twitter", "instagram", "facebook"];

/// Strip HTML tags and control characters from text.
///
/// Newlines are preserved (drafts are multi-line by design); all other
/// control characters are removed and tag-like sequences are dropped.
///
/// # Example
///
/// ```rust
/// use postdraft_core::sanitize::sanitize_text;
///
/// assert_eq!(sanitize_text("Hello <b>world</b>"), "Hello world");
/// assert_eq!(sanitize_text("line1\nline2"), "line1\nline2");
/// ```
pub fn sanitize_text(text: &str) -> String {
    let tag_regex = Regex::new(r"<[^>]*>").unwrap();
    let without_tags = tag_regex.replace_all(text, "");

    without_tags
        .chars()
        .filter(|c| !c.is_control() || *c == '\n')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Validate a URL for inclusion in a draft.
///
/// Only `http` and `https` URLs survive; everything else (including
/// `javascript:` and `data:` schemes) becomes an empty string.
///
/// # Example
///
/// ```rust
/// use postdraft_core::sanitize::sanitize_url;
///
/// assert_eq!(sanitize_url("https://example.com/a"), "https://example.com/a");
/// assert_eq!(sanitize_url("javascript:alert(1)"), "");
/// ```
pub fn sanitize_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => url.to_string(),
        _ => String::new(),
    }
}

/// Check whether a platform name is one of the supported four.
pub fn validate_platform(platform: &str) -> bool {
    KNOWN_PLATFORMS.contains(&platform.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_text_strips_tags() {
        assert_eq!(sanitize_text("<b>bold</b> and <i>italic</i>"), "bold and italic");
    }

    #[test]
    fn test_sanitize_text_strips_control_chars() {
        assert_eq!(sanitize_text("a\u{0007}b\u{001b}[31mc"), "ab[31mc");
    }

    #[test]
    fn test_sanitize_text_keeps_newlines() {
        assert_eq!(sanitize_text("1. A\n2. B"), "1. A\n2. B");
    }

    #[test]
    fn test_sanitize_text_keeps_emoji() {
        assert_eq!(sanitize_text("ship it 🚀"), "ship it 🚀");
    }

    #[test]
    fn test_sanitize_url_schemes() {
        assert_eq!(sanitize_url("https://example.com"), "https://example.com");
        assert_eq!(sanitize_url("http://example.com"), "http://example.com");
        assert_eq!(sanitize_url("javascript:alert(1)"), "");
        assert_eq!(sanitize_url("data:text/html,hi"), "");
        assert_eq!(sanitize_url("not a url"), "");
    }

    #[test]
    fn test_validate_platform() {
        assert!(validate_platform("linkedin"));
        assert!(validate_platform("Twitter"));
        assert!(!validate_platform("myspace"));
        assert!(!validate_platform(""));
    }
}
