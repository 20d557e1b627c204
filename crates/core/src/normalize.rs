//! URL and CSS color normalization helpers.
//!
//! URL normalization is idempotent for absolute URLs: normalizing an
//! already-absolute URL returns it unchanged. Relative forms are resolved
//! against the document's base URL when one is available.

use regex::Regex;
use url::Url;

/// Normalize an image/logo URL to absolute form.
///
/// Rules, in order:
/// 1. Absolute (`http://`, `https://`) passes through unchanged.
/// 2. Scheme-relative (`//cdn.example.com/x.png`) gets an `https:` prefix.
/// 3. Root-relative (`/x.png`) is prefixed with the page origin.
/// 4. Anything else is resolved against the document location.
///
/// Returns `None` for empty input or when no base URL exists to resolve a
/// relative reference against.
///
/// # Example
///
/// ```rust
/// use postdraft_core::normalize::normalize_url;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/blog/post").unwrap();
/// assert_eq!(
///     normalize_url("//cdn.example.com/a.png", Some(&base)),
///     Some("https://cdn.example.com/a.png".to_string())
/// );
/// assert_eq!(
///     normalize_url("/img/a.png", Some(&base)),
///     Some("https://example.com/img/a.png".to_string())
/// );
/// ```
pub fn normalize_url(raw: &str, base: Option<&Url>) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.starts_with("http://") || raw.starts_with("https://") {
        return Some(raw.to_string());
    }

    if let Some(rest) = raw.strip_prefix("//") {
        return Some(format!("https://{}", rest));
    }

    let base = base?;

    if raw.starts_with('/') {
        // origin() renders with a trailing-slash-free authority
        return Some(format!("{}{}", base.origin().ascii_serialization(), raw));
    }

    base.join(raw).ok().map(|u| u.to_string())
}

/// Normalize a CSS color value to lowercase 6-digit hex.
///
/// Accepts `rgb(r, g, b)` triples and hex literals (`#abc` expanded to
/// `#aabbcc`, `#aabbcc` lowercased). Unrecognized formats are dropped
/// silently as `None`, never an error.
///
/// # Example
///
/// ```rust
/// use postdraft_core::normalize::normalize_color;
///
/// assert_eq!(normalize_color("rgb(102, 126, 234)"), Some("#667eea".to_string()));
/// assert_eq!(normalize_color("#FFAA00"), Some("#ffaa00".to_string()));
/// assert_eq!(normalize_color("currentColor"), None);
/// ```
pub fn normalize_color(value: &str) -> Option<String> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        let hex = hex.to_lowercase();
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Some(format!("#{}", hex));
        }
        if hex.len() == 3 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
            return Some(format!("#{}", expanded));
        }
        return None;
    }

    rgb_to_hex(value)
}

/// Parse an `rgb(r, g, b)` triple into `#rrggbb` form.
///
/// Channels are rendered as 2-digit lowercase hex. `rgba(...)` values are
/// accepted with the alpha channel ignored; anything else returns `None`.
pub fn rgb_to_hex(value: &str) -> Option<String> {
    let rgb_regex = Regex::new(r"(?i)rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})").unwrap();
    let caps = rgb_regex.captures(value)?;

    let r: u32 = caps[1].parse().ok()?;
    let g: u32 = caps[2].parse().ok()?;
    let b: u32 = caps[3].parse().ok()?;

    if r > 255 || g > 255 || b > 255 {
        return None;
    }

    Some(format!("#{:02x}{:02x}{:02x}", r, g, b))
}
