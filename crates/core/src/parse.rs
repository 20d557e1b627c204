//! HTML parsing and read-only DOM access.
//!
//! This module provides the [`Document`] and [`Element`] types: a narrow,
//! read-only view over a parsed HTML page. The extractor only ever sees this
//! interface (CSS selection, attributes, text, meta lookup), so it can be
//! exercised against synthetic string fixtures without a browser engine.
//!
//! # Example
//!
//! ```rust
//! use postdraft_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1>Title</h1>
//!             <p class="content">Paragraph</p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! let headings = doc.select("h1").unwrap();
//! assert_eq!(headings[0].text().trim(), "Title");
//! ```

use scraper::{Html, Selector};
use url::Url;

use crate::{DraftError, Result};

/// Represents a parsed HTML document.
///
/// A Document wraps an HTML page and provides methods for querying elements
/// using CSS selectors and reading meta tags. An optional base URL is carried
/// for resolving relative references during extraction.
///
/// # Example
///
/// ```rust
/// use postdraft_core::parse::Document;
///
/// let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
/// let doc = Document::parse(html).unwrap();
/// assert_eq!(doc.title(), Some("Test".to_string()));
/// ```
pub struct Document {
    html: Html,
    base_url: Option<Url>,
}

impl Document {
    /// Parses HTML from a string without a base URL.
    ///
    /// Relative image and logo URLs will pass through unresolved; prefer
    /// [`Document::parse_with_url`] when the page location is known.
    pub fn parse(html: &str) -> Result<Self> {
        if html.trim().is_empty() {
            return Err(DraftError::DocumentUnreadable("empty document".to_string()));
        }

        let html = Html::parse_document(html);
        Ok(Self { html, base_url: None })
    }

    /// Parses HTML with a known page URL (for relative reference resolution).
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::InvalidUrl`] if the URL cannot be parsed and
    /// [`DraftError::DocumentUnreadable`] for empty input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use postdraft_core::parse::Document;
    ///
    /// let html = r#"<html><body><img src="/hero.png"></body></html>"#;
    /// let doc = Document::parse_with_url(html, "https://example.com/post").unwrap();
    /// assert!(doc.base_url().is_some());
    /// ```
    pub fn parse_with_url(html: &str, url: &str) -> Result<Self> {
        if html.trim().is_empty() {
            return Err(DraftError::DocumentUnreadable("empty document".to_string()));
        }

        let base_url = Url::parse(url).map_err(|e| DraftError::InvalidUrl(e.to_string()))?;
        let html = Html::parse_document(html);

        Ok(Self { html, base_url: Some(base_url) })
    }

    /// Gets the base URL of this document.
    ///
    /// Returns the page URL if one was provided during parsing.
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Gets the document location as a string.
    ///
    /// Falls back to `about:blank` when no base URL was provided, mirroring
    /// how a detached document reports its own location.
    pub fn location(&self) -> String {
        self.base_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "about:blank".to_string())
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Arguments
    ///
    /// * `selector` - A CSS selector string (e.g., "p.content", "#main", r"img\[src\]")
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::HtmlParseError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use postdraft_core::parse::Document;
    ///
    /// let html = r#"<p class="content">First</p><p class="content">Second</p>"#;
    /// let doc = Document::parse(html).unwrap();
    /// let elements = doc.select("p.content").unwrap();
    /// assert_eq!(elements.len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel =
            Selector::parse(selector).map_err(|e| DraftError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Gets the title of the document.
    ///
    /// Returns the content of the `<title>` element if present.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    /// Gets meta tag content by `name` or `property` attribute.
    ///
    /// Checks `meta[name="..."]` first, then `meta[property="..."]`, which
    /// covers both plain meta tags and Open Graph properties.
    pub fn meta_content(&self, attr: &str) -> Option<String> {
        let selector = format!("meta[name=\"{}\"]", attr);
        if let Ok(elements) = self.select(&selector)
            && let Some(el) = elements.first()
            && let Some(content) = el.attr("content")
            && !content.trim().is_empty()
        {
            return Some(content.trim().to_string());
        }

        let selector = format!("meta[property=\"{}\"]", attr);
        if let Ok(elements) = self.select(&selector)
            && let Some(el) = elements.first()
            && let Some(content) = el.attr("content")
            && !content.trim().is_empty()
        {
            return Some(content.trim().to_string());
        }

        None
    }

    /// Gets all text content from the document.
    ///
    /// Returns the concatenation of all text nodes in the document.
    pub fn text_content(&self) -> String {
        self.html.root_element().text().collect()
    }
}

/// A wrapper around scraper's ElementRef for read-only DOM access.
///
/// Element represents a single node in the HTML document tree and provides
/// methods for accessing its attributes and text content.
///
/// # Example
///
/// ```rust
/// use postdraft_core::parse::Document;
///
/// let html = r#"<a href="https://example.com">Link text</a>"#;
/// let doc = Document::parse(html).unwrap();
/// let link = &doc.select("a").unwrap()[0];
///
/// assert_eq!(link.text(), "Link text");
/// assert_eq!(link.attr("href"), Some("https://example.com"));
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element.
    ///
    /// Returns the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute.
    ///
    /// # Arguments
    ///
    /// * `name` - The attribute name (e.g., "src", "class", "id")
    ///
    /// Returns `None` if the attribute is not present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }

    /// Gets the tag name of this element.
    ///
    /// Returns the lowercase tag name (e.g., "div", "img", "span").
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Selects child elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel =
            Selector::parse(selector).map_err(|e| DraftError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.element.select(&sel).map(|el| Element { element: el }).collect())
    }
}
