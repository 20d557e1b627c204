//! Hashtag set construction.
//!
//! The set is built in three passes over the catalog data, deduplicated in
//! insertion order, then capped per platform: 30 tags for instagram, 7 for
//! everything else.

use crate::PageSummary;
use crate::catalog::Catalog;
use crate::generate::Platform;

/// Hashtag cap for instagram.
const INSTAGRAM_CAP: usize = 30;
/// Hashtag cap for every other platform.
const DEFAULT_CAP: usize = 7;

/// Build the ordered, deduplicated hashtag list for a draft.
///
/// Passes, in order:
/// 1. Topic tags whose trigger term appears in the lowercased
///    title + description.
/// 2. Up to 2 platform tags, appended only while the set has fewer than 7.
/// 3. Trending tags, appended only while the set has fewer than 10.
///
/// The generic platform gets no hashtags at all.
pub fn build_hashtags(summary: &PageSummary, platform: Platform, catalog: &Catalog) -> Vec<String> {
    if platform == Platform::Generic {
        return Vec::new();
    }

    let haystack = format!("{} {}", summary.title, summary.description).to_lowercase();
    let mut tags: Vec<String> = Vec::new();

    for topic in &catalog.topic_hashtags {
        if haystack.contains(&topic.term) {
            for tag in &topic.tags {
                push_unique(&mut tags, tag);
            }
        }
    }

    if let Some(platform_tags) = catalog.platform_hashtags.get(platform.key()) {
        for tag in platform_tags.iter().take(2) {
            if tags.len() >= 7 {
                break;
            }
            push_unique(&mut tags, tag);
        }
    }

    for tag in &catalog.trending_hashtags {
        if tags.len() >= 10 {
            break;
        }
        push_unique(&mut tags, tag);
    }

    let cap = if platform == Platform::Instagram { INSTAGRAM_CAP } else { DEFAULT_CAP };
    tags.truncate(cap);
    tags
}

/// Space-join a hashtag list for inclusion in a draft.
pub fn format_hashtags(tags: &[String]) -> String {
    tags.join(" ")
}

fn push_unique(tags: &mut Vec<String>, tag: &str) {
    if !tags.iter().any(|t| t == tag) {
        tags.push(tag.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn summary(title: &str, description: &str) -> PageSummary {
        PageSummary {
            url: "https://example.com".to_string(),
            title: title.to_string(),
            description: description.to_string(),
            main_image: None,
            images: vec![],
            key_points: vec![],
            brand_colors: vec![],
            logo: None,
            metadata: HashMap::new(),
            content: String::new(),
        }
    }

    #[test]
    fn test_topic_match_from_title() {
        let tags = build_hashtags(&summary("Learning Python fast", ""), Platform::Linkedin, &Catalog::default());
        assert!(tags.contains(&"#Python".to_string()));
    }

    #[test]
    fn test_topic_match_from_description() {
        let tags = build_hashtags(
            &summary("Untitled Page", "a rust systems deep dive"),
            Platform::Twitter,
            &Catalog::default(),
        );
        assert!(tags.contains(&"#RustLang".to_string()));
    }

    #[test]
    fn test_platform_tags_appended() {
        let tags = build_hashtags(&summary("nothing topical", ""), Platform::Linkedin, &Catalog::default());
        assert!(tags.contains(&"#CareerGrowth".to_string()));
        assert!(tags.contains(&"#ProfessionalDevelopment".to_string()));
    }

    #[test]
    fn test_dedup_preserves_order() {
        let catalog = Catalog::default();
        // "machine learning" and "data" both contribute #DataScience-adjacent tags
        let tags = build_hashtags(
            &summary("machine learning on big data pipelines", ""),
            Platform::Twitter,
            &catalog,
        );
        let unique: std::collections::HashSet<_> = tags.iter().collect();
        assert_eq!(unique.len(), tags.len());
        assert_eq!(tags[0], "#MachineLearning");
    }

    #[test]
    fn test_default_cap_is_seven() {
        let title = "python javascript rust web design marketing startup business data cloud security";
        for platform in [Platform::Linkedin, Platform::Twitter, Platform::Facebook] {
            let tags = build_hashtags(&summary(title, ""), platform, &Catalog::default());
            assert!(tags.len() <= 7, "{:?} produced {} tags", platform, tags.len());
        }
    }

    #[test]
    fn test_instagram_cap_is_thirty() {
        let title = "python javascript rust web design marketing startup business data cloud security";
        let tags = build_hashtags(&summary(title, ""), Platform::Instagram, &Catalog::default());
        assert!(tags.len() <= 30);
        assert!(tags.len() > 7, "instagram should keep more than the default cap");
    }

    #[test]
    fn test_generic_platform_gets_none() {
        let tags = build_hashtags(&summary("python for everyone", ""), Platform::Generic, &Catalog::default());
        assert!(tags.is_empty());
    }

    #[test]
    fn test_format_hashtags() {
        let tags = vec!["#A".to_string(), "#B".to_string()];
        assert_eq!(format_hashtags(&tags), "#A #B");
    }
}
