//! Content type classification.
//!
//! Classifies a page summary into a coarse rhetorical category by testing
//! `title + " " + description` against an ordered pattern list. The first
//! matching pattern wins; no match is not an error and yields
//! [`ContentType::General`].

use regex::Regex;
use serde::Serialize;

use crate::PageSummary;

/// Coarse classification of a page's rhetorical intent.
///
/// Derived per generation, never stored on the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Tutorial,
    News,
    Opinion,
    CaseStudy,
    Product,
    List,
    General,
}

impl ContentType {
    /// Stable lowercase key used for catalog lookups.
    pub fn key(&self) -> &'static str {
        match self {
            ContentType::Tutorial => "tutorial",
            ContentType::News => "news",
            ContentType::Opinion => "opinion",
            ContentType::CaseStudy => "case_study",
            ContentType::Product => "product",
            ContentType::List => "list",
            ContentType::General => "general",
        }
    }
}

/// Ordered (pattern, type) table; earlier entries shadow later ones.
const PATTERNS: [(&str, ContentType); 6] = [
    (r"(?i)how to|guide|tutorial|learn|step[- ]by[- ]step", ContentType::Tutorial),
    (r"(?i)announc|launch|release|breaking|update|new version", ContentType::News),
    (r"(?i)why |opinion|i think|believe|should|must ", ContentType::Opinion),
    (r"(?i)case study|success story|results|how we|increased|grew", ContentType::CaseStudy),
    (r"(?i)product|tool|app|software|platform|service", ContentType::Product),
    (r"(?i)^\d+|top \d+|best |list of", ContentType::List),
];

/// Classify a summary by its title and description.
///
/// # Example
///
/// ```rust
/// use postdraft_core::classify::{ContentType, classify_text};
///
/// assert_eq!(
///     classify_text("How to Learn Python in 30 Days", "A complete guide for beginners"),
///     ContentType::Tutorial
/// );
/// ```
pub fn classify_text(title: &str, description: &str) -> ContentType {
    let haystack = format!("{} {}", title, description);

    for (pattern, content_type) in &PATTERNS {
        let regex = Regex::new(pattern).unwrap();
        if regex.is_match(&haystack) {
            return *content_type;
        }
    }

    ContentType::General
}

/// Classify a full summary.
pub fn classify(summary: &PageSummary) -> ContentType {
    classify_text(&summary.title, &summary.description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("How to Learn Python in 30 Days", "A complete guide for beginners", ContentType::Tutorial)]
    #[case("Announcing our new API", "", ContentType::News)]
    #[case("Why remote work wins", "", ContentType::Opinion)]
    #[case("Case study: doubling signups", "", ContentType::CaseStudy)]
    #[case("Our platform for teams", "", ContentType::Product)]
    #[case("Top 10 editor shortcuts", "", ContentType::List)]
    #[case("Quarterly notes", "miscellaneous writing", ContentType::General)]
    fn test_classification(#[case] title: &str, #[case] description: &str, #[case] expected: ContentType) {
        assert_eq!(classify_text(title, description), expected);
    }

    #[test]
    fn test_first_match_wins() {
        // matches both tutorial ("guide") and product ("tool"); tutorial is earlier
        assert_eq!(classify_text("A guide to our tool", ""), ContentType::Tutorial);
    }

    #[test]
    fn test_leading_digit_is_list() {
        assert_eq!(classify_text("7 habits of careful reviewers", ""), ContentType::List);
    }

    #[test]
    fn test_description_contributes() {
        assert_eq!(classify_text("Changelog", "new version shipped today"), ContentType::News);
    }

    #[test]
    fn test_content_type_keys() {
        assert_eq!(ContentType::CaseStudy.key(), "case_study");
        assert_eq!(ContentType::General.key(), "general");
    }
}
