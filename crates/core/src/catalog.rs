//! Versioned lookup data for the generation pipeline.
//!
//! Hashtag, call-to-action, and hook tables are hand-curated mappings that
//! change more often than the pipeline around them, so they live here as
//! replaceable configuration: a [`Catalog`] deserializes from JSON via
//! [`Catalog::from_json`], and [`Catalog::default`] provides the compiled-in
//! version the pipeline ships with.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{DraftError, Result};

/// One topic trigger: when `term` appears in the lowercased title and
/// description, its tags join the hashtag set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicTags {
    pub term: String,
    pub tags: Vec<String>,
}

/// Replaceable generation data: hashtags, CTAs, and hook template pools.
///
/// Keys into `platform_hashtags` and `ctas` are the lowercase platform and
/// content-type names; CTA keys are `"platform:content_type"`. Hook
/// templates use `{topic}`, `{number}`, and `{lead}` placeholders filled
/// from title fragments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Data version, bumped whenever the curated tables change.
    pub version: u32,

    /// Ordered topic triggers; earlier entries contribute tags first.
    pub topic_hashtags: Vec<TopicTags>,

    /// Up to two of these per platform are appended while the set is small.
    pub platform_hashtags: HashMap<String, Vec<String>>,

    /// Appended last while the set stays under ten.
    pub trending_hashtags: Vec<String>,

    /// `(platform, content_type)` call-to-action table.
    pub ctas: HashMap<String, String>,

    /// Final CTA fallback when no table entry matches.
    pub generic_cta: String,

    /// Hook template pools keyed by content type.
    pub hooks: HashMap<String, Vec<String>>,
}

impl Catalog {
    /// Load a replacement catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::CatalogError`] when the JSON is malformed or a
    /// hook pool is empty.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json).map_err(|e| DraftError::CatalogError(e.to_string()))?;

        for (content_type, pool) in &catalog.hooks {
            if pool.is_empty() {
                return Err(DraftError::CatalogError(format!("empty hook pool for {}", content_type)));
            }
        }

        Ok(catalog)
    }

    /// Look up the CTA for `(platform, content_type)`, falling back to the
    /// platform's general entry, then to the generic CTA.
    pub fn cta(&self, platform: &str, content_type: &str) -> &str {
        if let Some(cta) = self.ctas.get(&format!("{}:{}", platform, content_type)) {
            return cta;
        }
        if let Some(cta) = self.ctas.get(&format!("{}:general", platform)) {
            return cta;
        }
        &self.generic_cta
    }

    /// Hook template pool for a content type, falling back to the general
    /// pool. The general pool is always present in the built-in catalog.
    pub fn hook_pool(&self, content_type: &str) -> &[String] {
        self.hooks
            .get(content_type)
            .or_else(|| self.hooks.get("general"))
            .map(|pool| pool.as_slice())
            .unwrap_or_default()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let topic_hashtags = [
            ("artificial intelligence", vec!["#AI", "#MachineLearning"]),
            ("machine learning", vec!["#MachineLearning", "#DataScience"]),
            ("python", vec!["#Python", "#Programming"]),
            ("javascript", vec!["#JavaScript", "#WebDev"]),
            ("rust", vec!["#RustLang", "#SystemsProgramming"]),
            ("web", vec!["#WebDev", "#Frontend"]),
            ("design", vec!["#Design", "#UX"]),
            ("marketing", vec!["#Marketing", "#DigitalMarketing"]),
            ("startup", vec!["#Startup", "#Entrepreneurship"]),
            ("business", vec!["#Business", "#Leadership"]),
            ("data", vec!["#Data", "#Analytics"]),
            ("cloud", vec!["#Cloud", "#DevOps"]),
            ("security", vec!["#Security", "#InfoSec"]),
            ("productivity", vec!["#Productivity", "#WorkSmarter"]),
        ]
        .into_iter()
        .map(|(term, tags)| TopicTags {
            term: term.to_string(),
            tags: tags.into_iter().map(String::from).collect(),
        })
        .collect();

        let platform_hashtags = [
            ("linkedin", vec!["#CareerGrowth", "#ProfessionalDevelopment"]),
            ("twitter", vec!["#TechTwitter", "#BuildInPublic"]),
            ("instagram", vec!["#InstaDaily", "#ContentCreator"]),
            ("facebook", vec!["#Community", "#MustRead"]),
        ]
        .into_iter()
        .map(|(platform, tags)| {
            (
                platform.to_string(),
                tags.into_iter().map(String::from).collect::<Vec<_>>(),
            )
        })
        .collect();

        let trending_hashtags = ["#Innovation", "#Growth", "#Tips"]
            .into_iter()
            .map(String::from)
            .collect();

        let ctas = [
            ("linkedin:tutorial", "Save this post for your next learning sprint. What would you add?"),
            ("linkedin:news", "What does this mean for your industry? Share your take below."),
            ("linkedin:case_study", "Curious about the details? The full breakdown is linked below."),
            ("linkedin:general", "Read the full article at the link. Thoughts welcome in the comments."),
            ("twitter:tutorial", "Bookmark this thread for later 🔖"),
            ("twitter:news", "Follow for more updates as this develops."),
            ("twitter:general", "Full story linked below 👇"),
            ("instagram:tutorial", "Save this post and try it this week! 💪"),
            ("instagram:general", "Link in bio for the full article! ✨"),
            ("facebook:general", "Read the full story at the link — tell us what you think!"),
            ("facebook:list", "Which one is your favorite? Drop a comment!"),
        ]
        .into_iter()
        .map(|(key, cta)| (key.to_string(), cta.to_string()))
        .collect();

        let hooks = [
            (
                "tutorial",
                vec![
                    "Want to master {topic}? Here's how 👇",
                    "Learning {topic} doesn't have to be hard.",
                    "The exact playbook for {topic}:",
                ],
            ),
            (
                "news",
                vec!["Big news: {lead}.", "Just in — {lead}.", "This changes things: {lead}."],
            ),
            (
                "opinion",
                vec!["Hot take: {lead}.", "Unpopular opinion: {lead}.", "Let's be honest about {lead}."],
            ),
            (
                "case_study",
                vec![
                    "The numbers don't lie: {lead}.",
                    "{number} tells the whole story here.",
                    "How it actually happened: {lead}.",
                ],
            ),
            (
                "product",
                vec!["Meet {lead}.", "A closer look at {lead}:", "We tried {lead}. Here's the verdict."],
            ),
            (
                "list",
                vec!["{number} things worth knowing about {lead}:", "Save this list: {lead}.", "Counting down: {lead}."],
            ),
            (
                "general",
                vec!["Worth your time: {lead}.", "A few takeaways from {lead}:", "{lead} — here's what stood out."],
            ),
        ]
        .into_iter()
        .map(|(content_type, pool)| {
            (
                content_type.to_string(),
                pool.into_iter().map(String::from).collect::<Vec<_>>(),
            )
        })
        .collect();

        Self {
            version: 1,
            topic_hashtags,
            platform_hashtags,
            trending_hashtags,
            ctas,
            generic_cta: "Check out the full article 👇".to_string(),
            hooks,
        }
    }
}
