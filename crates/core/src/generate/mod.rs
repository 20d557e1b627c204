//! Draft generation pipeline.
//!
//! The generator is a pure function of `(summary, platform, style)` plus a
//! seedable randomness source used for hook variety. The pipeline runs six
//! deterministic steps: classify, hook, key points, hashtags, CTA, format.
//! An optional remote-model path can replace the post body, but the
//! template pipeline is always available as the mandatory fallback.
//!
//! # Example
//!
//! ```rust
//! use postdraft_core::{Document, Generator, Platform, Style};
//!
//! let html = "<html><head><title>How to Write Docs</title></head><body></body></html>";
//! let doc = Document::parse_with_url(html, "https://example.com").unwrap();
//! let summary = doc.extract_summary();
//!
//! let generator = Generator::new();
//! let draft = generator.generate(&summary, Platform::Linkedin, Style::Professional);
//! assert!(!draft.text().is_empty());
//! ```

pub mod hashtags;
pub mod hooks;
pub mod platforms;

use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::debug;

use crate::PageSummary;
use crate::catalog::Catalog;
use crate::classify::classify;
use crate::sanitize::sanitize_text;

/// Target social network.
///
/// `Generic` is the documented fallback for platform names outside the
/// supported set: it formats without hashtags or CTA table lookups and
/// never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linkedin,
    Twitter,
    Instagram,
    Facebook,
    Generic,
}

impl Platform {
    /// Stable lowercase key used for catalog lookups.
    pub fn key(&self) -> &'static str {
        match self {
            Platform::Linkedin => "linkedin",
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Generic => "generic",
        }
    }

    /// Maximum key points carried into a draft for this platform.
    pub fn key_point_cap(&self) -> usize {
        match self {
            Platform::Linkedin => 5,
            Platform::Twitter => 4,
            Platform::Instagram => 4,
            Platform::Facebook => 3,
            Platform::Generic => 5,
        }
    }

    /// Lenient parse used inside the pipeline: unknown names become
    /// [`Platform::Generic`] instead of an error.
    pub fn parse_lenient(s: &str) -> Self {
        Self::from_str(s).unwrap_or(Platform::Generic)
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linkedin" => Ok(Self::Linkedin),
            "twitter" | "x" => Ok(Self::Twitter),
            "instagram" => Ok(Self::Instagram),
            "facebook" => Ok(Self::Facebook),
            _ => Err(format!(
                "Invalid platform: {}. Valid options: linkedin, twitter, instagram, facebook",
                s
            )),
        }
    }
}

/// Tone and density variant applied within a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Professional,
    Modern,
    Minimal,
}

impl Style {
    /// Lenient parse used inside the pipeline: unknown names fall back to
    /// [`Style::Professional`].
    pub fn parse_lenient(s: &str) -> Self {
        Self::from_str(s).unwrap_or(Style::Professional)
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "professional" => Ok(Self::Professional),
            "modern" => Ok(Self::Modern),
            "minimal" => Ok(Self::Minimal),
            _ => Err(format!("Invalid style: {}. Valid options: professional, modern, minimal", s)),
        }
    }
}

/// Final generated draft, ready for display or export.
///
/// Twitter produces `Thread`; every other platform produces `Single`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "body")]
pub enum PostDraft {
    Single(String),
    Thread(Vec<String>),
}

impl PostDraft {
    /// Display text: thread segments joined with blank lines.
    pub fn text(&self) -> String {
        match self {
            PostDraft::Single(text) => text.clone(),
            PostDraft::Thread(segments) => segments.join("\n\n"),
        }
    }

    /// Thread segments, or a one-element slice view for single drafts.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            PostDraft::Single(text) => vec![text.as_str()],
            PostDraft::Thread(segments) => segments.iter().map(String::as_str).collect(),
        }
    }

    /// Serializes the draft as pretty-printed JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| crate::DraftError::HtmlParseError(e.to_string()))
    }
}

/// Intermediate fragments assembled by the pipeline before formatting.
#[derive(Debug, Clone)]
pub struct DraftParts {
    /// Selected and filled hook line.
    pub hook: String,
    /// Capped key points (pre-formatting).
    pub points: Vec<String>,
    /// Platform-formatted key points block. Empty for twitter, which
    /// threads one segment per entry of `points` instead.
    pub points_block: String,
    /// Space-joined hashtag block (may be empty).
    pub hashtags: String,
    /// Resolved call to action.
    pub cta: String,
}

/// Configuration for the generator.
///
/// # Example
///
/// ```rust
/// use postdraft_core::GeneratorConfig;
///
/// let config = GeneratorConfig::builder().seed(42).build();
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Fixed seed for hook selection; `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Lookup data for hashtags, CTAs, and hooks.
    pub catalog: Catalog,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { seed: None, catalog: Catalog::default() }
    }
}

impl GeneratorConfig {
    /// Creates a new builder for GeneratorConfig.
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }
}

/// Builder for GeneratorConfig.
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: GeneratorConfig::default() }
    }

    /// Sets a fixed seed for hook selection.
    pub fn seed(mut self, value: u64) -> Self {
        self.config.seed = Some(value);
        self
    }

    /// Replaces the lookup catalog.
    pub fn catalog(mut self, value: Catalog) -> Self {
        self.config.catalog = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Main entry point for draft generation.
///
/// # Example
///
/// ```rust
/// use postdraft_core::{Generator, GeneratorConfig, Platform, Style};
/// use postdraft_core::summary::PageSummary;
/// # use std::collections::HashMap;
///
/// let generator = Generator::with_config(GeneratorConfig::builder().seed(7).build());
/// # let summary = PageSummary {
/// #     url: "https://example.com".into(), title: "T".into(), description: String::new(),
/// #     main_image: None, images: vec![], key_points: vec![], brand_colors: vec![],
/// #     logo: None, metadata: HashMap::new(), content: String::new(),
/// # };
/// let draft = generator.generate(&summary, Platform::Twitter, Style::Modern);
/// assert!(draft.segments().len() >= 2);
/// ```
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator with default settings.
    pub fn new() -> Self {
        Self { config: GeneratorConfig::default() }
    }

    /// Creates a generator with a custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate a draft through the deterministic template pipeline.
    ///
    /// Never fails for a valid summary: unknown content simply classifies
    /// as general, empty summaries still produce a hook and CTA.
    pub fn generate(&self, summary: &PageSummary, platform: Platform, style: Style) -> PostDraft {
        let parts = self.build_parts(summary, platform);
        let draft = platforms::format_draft(summary, platform, style, &parts);
        sanitize_draft(draft)
    }

    /// Generate from string platform/style names with documented fallback:
    /// unknown platforms format generically, unknown styles render as
    /// professional. Never fails.
    pub fn generate_lenient(&self, summary: &PageSummary, platform: &str, style: &str) -> PostDraft {
        self.generate(summary, Platform::parse_lenient(platform), Style::parse_lenient(style))
    }

    /// Generate with remote model delegation and mandatory template fallback.
    ///
    /// Sends platform/style instructions plus the extracted title,
    /// description, and key points to the configured chat-completion
    /// endpoint and uses the response as the post body. Any remote failure
    /// (status, network, timeout, body shape) falls back transparently to
    /// [`Generator::generate`]; the caller never sees an error.
    #[cfg(feature = "remote")]
    pub async fn generate_with_remote(
        &self, summary: &PageSummary, platform: Platform, style: Style, remote: &crate::remote::RemoteConfig,
    ) -> PostDraft {
        match crate::remote::remote_draft(summary, platform, style, remote).await {
            Ok(draft) => draft,
            Err(e) => {
                tracing::warn!(error = %e, "remote generation failed, falling back to templates");
                self.generate(summary, platform, style)
            }
        }
    }

    /// Run the classify/hook/points/hashtags/CTA steps.
    fn build_parts(&self, summary: &PageSummary, platform: Platform) -> DraftParts {
        let content_type = classify(summary);
        debug!(content_type = content_type.key(), platform = platform.key(), "classified summary");

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let fragments = hooks::mine_fragments(&summary.title);
        let pool = self.config.catalog.hook_pool(content_type.key());
        let hook = hooks::select_hook(pool, &fragments, &mut rng);

        let points: Vec<String> = summary
            .key_points
            .iter()
            .take(platform.key_point_cap())
            .cloned()
            .collect();
        let points_block = if platform == Platform::Twitter {
            String::new()
        } else {
            platforms::format_key_points(&points, platform)
        };

        let tags = hashtags::build_hashtags(summary, platform, &self.config.catalog);
        let hashtags = hashtags::format_hashtags(&tags);

        let cta = if platform == Platform::Generic {
            self.config.catalog.generic_cta.clone()
        } else {
            self.config
                .catalog
                .cta(platform.key(), content_type.key())
                .to_string()
        };

        DraftParts { hook, points, points_block, hashtags, cta }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

/// Run every draft segment through text sanitization.
fn sanitize_draft(draft: PostDraft) -> PostDraft {
    match draft {
        PostDraft::Single(text) => PostDraft::Single(sanitize_text(&text)),
        PostDraft::Thread(segments) => PostDraft::Thread(segments.iter().map(|s| sanitize_text(s)).collect()),
    }
}

/// Convenience function for one-off generation with defaults.
pub fn generate(summary: &PageSummary, platform: Platform, style: Style) -> PostDraft {
    Generator::new().generate(summary, platform, style)
}

/// Convenience function for seeded, reproducible generation.
pub fn generate_seeded(summary: &PageSummary, platform: Platform, style: Style, seed: u64) -> PostDraft {
    Generator::with_config(GeneratorConfig::builder().seed(seed).build()).generate(summary, platform, style)
}
