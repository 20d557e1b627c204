//! Field-by-field page summary extraction.
//!
//! Every extractor on [`Document`] is an ordered fallback chain: candidates
//! are evaluated in priority order and the first hit wins, with "no match"
//! represented as `None` or an empty value rather than an error. A heuristic
//! that finds nothing never aborts the extraction of other fields; the only
//! fatal failure is a document that cannot be parsed at all, which is
//! surfaced by [`Document`] construction.

use std::collections::HashMap;

use regex::Regex;
use tracing::debug;

use crate::Document;
use crate::normalize::{normalize_color, normalize_url};
use crate::summary::{
    ImageInfo, MAX_BRAND_COLORS, MAX_CONTENT_CHARS, MAX_DESCRIPTION_CHARS, MAX_IMAGES, MAX_KEY_POINTS, UNTITLED,
    PageSummary, collapse_whitespace, truncate_chars,
};

/// Class/id substrings that mark an image as the page hero.
const HERO_HINTS: [&str; 3] = ["hero", "featured", "banner"];

/// Content containers tried in priority order for the main excerpt.
const CONTENT_SELECTORS: [&str; 5] = [
    "article",
    "[class*=\"content\"]",
    "[class*=\"post\"]",
    "[class*=\"entry\"]",
    "main",
];

/// Minimum declared dimension for gallery images, exclusive.
const MIN_GALLERY_DIMENSION: u32 = 100;

impl Document {
    /// Extract the full bounded summary in a single pass.
    ///
    /// Never fails: every field degrades independently to its safe default.
    /// The summary's `url` is the document location provided at parse time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use postdraft_core::Document;
    ///
    /// let html = "<html><head><title>Hi</title></head><body><p>text</p></body></html>";
    /// let doc = Document::parse_with_url(html, "https://example.com").unwrap();
    /// let summary = doc.extract_summary();
    /// assert_eq!(summary.title, "Hi");
    /// assert_eq!(summary.url, "https://example.com/");
    /// ```
    pub fn extract_summary(&self) -> PageSummary {
        PageSummary {
            url: self.location(),
            title: self.extract_title(),
            description: self.extract_description(),
            main_image: self.extract_main_image(),
            images: self.extract_gallery_images(),
            key_points: self.extract_key_points(),
            brand_colors: self.extract_brand_colors(),
            logo: self.extract_logo(),
            metadata: self.extract_metadata_map(),
            content: self.extract_main_content(),
        }
    }

    /// Extract title with priority fallback:
    /// 1. First non-empty `<h1>`
    /// 2. `<title>` element
    /// 3. Open Graph `og:title`
    /// 4. Fixed placeholder `"Untitled Page"`
    pub fn extract_title(&self) -> String {
        if let Ok(elements) = self.select("h1") {
            for el in &elements {
                let text = collapse_whitespace(&el.text());
                if !text.is_empty() {
                    return text;
                }
            }
        }

        if let Some(title) = self.title() {
            let title = collapse_whitespace(&title);
            if !title.is_empty() {
                return title;
            }
        }

        if let Some(title) = self.meta_content("og:title") {
            let title = collapse_whitespace(&title);
            if !title.is_empty() {
                return title;
            }
        }

        debug!("no title candidate matched, using placeholder");
        UNTITLED.to_string()
    }

    /// Extract description with priority fallback:
    /// 1. Meta `description`
    /// 2. Open Graph `og:description`
    /// 3. First non-empty paragraph
    ///
    /// Always truncated to 200 characters; empty string when nothing matches.
    pub fn extract_description(&self) -> String {
        if let Some(desc) = self.meta_content("description") {
            return truncate_chars(&collapse_whitespace(&desc), MAX_DESCRIPTION_CHARS);
        }

        if let Some(desc) = self.meta_content("og:description") {
            return truncate_chars(&collapse_whitespace(&desc), MAX_DESCRIPTION_CHARS);
        }

        if let Ok(elements) = self.select("p") {
            for el in &elements {
                let text = collapse_whitespace(&el.text());
                if !text.is_empty() {
                    return truncate_chars(&text, MAX_DESCRIPTION_CHARS);
                }
            }
        }

        String::new()
    }

    /// Extract the main image with priority fallback:
    /// 1. Open Graph `og:image`
    /// 2. An `<img>` whose class or id hints hero/featured/banner
    /// 3. The first `<img>` on the page
    ///
    /// The result is normalized to an absolute URL.
    pub fn extract_main_image(&self) -> Option<String> {
        if let Some(og_image) = self.meta_content("og:image")
            && let Some(url) = normalize_url(&og_image, self.base_url())
        {
            return Some(url);
        }

        if let Ok(images) = self.select("img") {
            for img in &images {
                let class = img.attr("class").unwrap_or_default().to_lowercase();
                let id = img.attr("id").unwrap_or_default().to_lowercase();

                if HERO_HINTS.iter().any(|hint| class.contains(hint) || id.contains(hint))
                    && let Some(src) = img.attr("src")
                    && let Some(url) = normalize_url(src, self.base_url())
                {
                    return Some(url);
                }
            }

            if let Some(first) = images.first()
                && let Some(src) = first.attr("src")
                && let Some(url) = normalize_url(src, self.base_url())
            {
                return Some(url);
            }
        }

        None
    }

    /// Extract gallery images: every `<img>` with both declared dimensions
    /// above 100px, capped at 10. Attributes are captured as found, with no
    /// dimension guessing for images that declare none.
    pub fn extract_gallery_images(&self) -> Vec<ImageInfo> {
        let mut gallery = Vec::new();

        if let Ok(images) = self.select("img") {
            for img in &images {
                let Some(src) = img.attr("src") else { continue };
                if src.trim().is_empty() {
                    continue;
                }

                let width = img.attr("width").and_then(|w| w.parse().ok());
                let height = img.attr("height").and_then(|h| h.parse().ok());

                let (Some(w), Some(h)) = (width, height) else { continue };
                if w <= MIN_GALLERY_DIMENSION || h <= MIN_GALLERY_DIMENSION {
                    continue;
                }

                gallery.push(ImageInfo {
                    src: src.to_string(),
                    alt: img.attr("alt").unwrap_or_default().to_string(),
                    width,
                    height,
                });

                if gallery.len() >= MAX_IMAGES {
                    break;
                }
            }
        }

        gallery
    }

    /// Extract candidate highlights in priority order:
    /// 1. `h2`/`h3` text with length in \[10,100), up to 5
    /// 2. List-item text with length in \[20,150), up to 3
    /// 3. Bold/strong text with length in \[10,100), up to 3
    ///
    /// Deduplicated preserving first occurrence, capped at 8 total.
    pub fn extract_key_points(&self) -> Vec<String> {
        let mut points = Vec::new();

        collect_texts(self, "h2, h3", 10, 100, 5, &mut points);
        collect_texts(self, "li", 20, 150, 3, &mut points);
        collect_texts(self, "b, strong", 10, 100, 3, &mut points);

        let mut seen = Vec::new();
        for point in points {
            if !seen.contains(&point) {
                seen.push(point);
            }
            if seen.len() >= MAX_KEY_POINTS {
                break;
            }
        }

        seen
    }

    /// Extract brand colors from three sources:
    /// 1. The body's inline background color
    /// 2. Inline `style` color / background-color declarations anywhere
    /// 3. CSS custom properties containing "color" declared in
    ///    `:root`/`html`/`body` rules of `<style>` blocks
    ///
    /// Each value is normalized to lowercase hex; pure black is excluded
    /// and the result is capped at 5.
    pub fn extract_brand_colors(&self) -> Vec<String> {
        let mut colors = Vec::new();

        let declaration_regex = Regex::new(r"(?i)(?:^|;)\s*(?:background-)?color\s*:\s*([^;]+)").unwrap();
        let root_rule_regex = Regex::new(r"(?i)(?:^|[},])\s*(?::root|html|body)\s*\{([^}]*)\}").unwrap();
        let custom_prop_regex = Regex::new(r"--[\w-]*color[\w-]*\s*:\s*([^;}]+)").unwrap();

        if let Ok(bodies) = self.select("body[style]") {
            for body in &bodies {
                if let Some(style) = body.attr("style") {
                    push_declared_colors(&declaration_regex, style, &mut colors);
                }
            }
        }

        if let Ok(styled) = self.select("[style]") {
            for el in &styled {
                if let Some(style) = el.attr("style") {
                    push_declared_colors(&declaration_regex, style, &mut colors);
                }
                if colors.len() >= MAX_BRAND_COLORS {
                    return colors;
                }
            }
        }

        if let Ok(style_blocks) = self.select("style") {
            for block in &style_blocks {
                let css = block.text();
                for rule in root_rule_regex.captures_iter(&css) {
                    for caps in custom_prop_regex.captures_iter(&rule[1]) {
                        push_color(caps[1].trim(), &mut colors);
                        if colors.len() >= MAX_BRAND_COLORS {
                            return colors;
                        }
                    }
                }
            }
        }

        colors
    }

    /// Extract the site logo with priority fallback:
    /// 1. An `<img>` whose alt, class, or id contains "logo"
    /// 2. `.logo img`, then `#logo img`
    /// 3. The first `<img>` inside a `header` or `nav`
    pub fn extract_logo(&self) -> Option<ImageInfo> {
        if let Ok(images) = self.select("img") {
            for img in &images {
                let alt = img.attr("alt").unwrap_or_default().to_lowercase();
                let class = img.attr("class").unwrap_or_default().to_lowercase();
                let id = img.attr("id").unwrap_or_default().to_lowercase();

                if alt.contains("logo") || class.contains("logo") || id.contains("logo") {
                    if let Some(info) = image_info(img, self.base_url()) {
                        return Some(info);
                    }
                }
            }
        }

        for selector in &[".logo img", "#logo img", "header img", "nav img"] {
            if let Ok(elements) = self.select(selector)
                && let Some(first) = elements.first()
                && let Some(info) = image_info(first, self.base_url())
            {
                return Some(info);
            }
        }

        None
    }

    /// Extract every meta tag keyed by its `name` or `property` attribute.
    ///
    /// Collisions resolve last-write-wins in document order. The map is a
    /// passthrough: values are not interpreted or bounded.
    pub fn extract_metadata_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();

        if let Ok(metas) = self.select("meta") {
            for meta in &metas {
                let key = meta.attr("name").or_else(|| meta.attr("property"));
                if let Some(key) = key
                    && let Some(content) = meta.attr("content")
                {
                    map.insert(key.to_string(), content.to_string());
                }
            }
        }

        map
    }

    /// Extract the main content excerpt, truncated to 1000 characters.
    ///
    /// Tries the prioritized content-container selectors first; when none
    /// has text, concatenates up to 5 paragraphs longer than 50 characters.
    pub fn extract_main_content(&self) -> String {
        for selector in &CONTENT_SELECTORS {
            if let Ok(elements) = self.select(selector)
                && let Some(first) = elements.first()
            {
                let text = collapse_whitespace(&first.text());
                if !text.is_empty() {
                    return truncate_chars(&text, MAX_CONTENT_CHARS);
                }
            }
        }

        let mut paragraphs = Vec::new();
        if let Ok(elements) = self.select("p") {
            for el in &elements {
                let text = collapse_whitespace(&el.text());
                if text.chars().count() > 50 {
                    paragraphs.push(text);
                }
                if paragraphs.len() >= 5 {
                    break;
                }
            }
        }

        truncate_chars(&paragraphs.join(" "), MAX_CONTENT_CHARS)
    }
}

/// Collect collapsed element texts whose char length is in `[min, max)`,
/// taking at most `cap` matches for this source.
fn collect_texts(doc: &Document, selector: &str, min: usize, max: usize, cap: usize, out: &mut Vec<String>) {
    let Ok(elements) = doc.select(selector) else { return };

    let mut taken = 0;
    for el in &elements {
        let text = collapse_whitespace(&el.text());
        let len = text.chars().count();
        if len >= min && len < max {
            out.push(text);
            taken += 1;
        }
        if taken >= cap {
            break;
        }
    }
}

/// Push every color declared in one inline style string.
fn push_declared_colors(declaration_regex: &Regex, style: &str, colors: &mut Vec<String>) {
    for caps in declaration_regex.captures_iter(style) {
        push_color(caps[1].trim(), colors);
        if colors.len() >= MAX_BRAND_COLORS {
            return;
        }
    }
}

/// Normalize and collect a single color, excluding pure black and duplicates.
fn push_color(value: &str, colors: &mut Vec<String>) {
    if let Some(hex) = normalize_color(value)
        && hex != "#000000"
        && !colors.contains(&hex)
        && colors.len() < MAX_BRAND_COLORS
    {
        colors.push(hex);
    }
}

/// Capture one image's attributes with a normalized src.
fn image_info(img: &crate::parse::Element<'_>, base: Option<&url::Url>) -> Option<ImageInfo> {
    let src = img.attr("src")?;
    let src = normalize_url(src, base)?;

    Some(ImageInfo {
        src,
        alt: img.attr("alt").unwrap_or_default().to_string(),
        width: img.attr("width").and_then(|w| w.parse().ok()),
        height: img.attr("height").and_then(|h| h.parse().ok()),
    })
}
