//! Platform- and style-specific draft assembly.
//!
//! Each platform owns its layout; the style varies density within it.
//! Twitter is the one threaded platform: its formatter emits position-
//! prefixed segments and enforces the 280-character segment cap by
//! truncating overflow on a char boundary with a trailing ellipsis.

use crate::PageSummary;
use crate::generate::{DraftParts, Platform, PostDraft, Style};
use crate::sanitize::sanitize_url;
use crate::summary::truncate_chars;

/// Emoji palette cycled through twitter key points.
const POINT_EMOJIS: [&str; 8] = ["🔥", "💡", "🚀", "⚡", "🎯", "📈", "✨", "💪"];

/// Per-segment character cap on twitter.
const TWEET_CAP: usize = 280;

/// Format the capped key points block for a platform.
///
/// Numbered for linkedin and facebook, emoji-prefixed for twitter,
/// `•` bullets everywhere else.
pub fn format_key_points(points: &[String], platform: Platform) -> String {
    match platform {
        Platform::Linkedin | Platform::Facebook => points
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{}. {}", i + 1, p))
            .collect::<Vec<_>>()
            .join("\n"),
        Platform::Twitter => points
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{} {}", POINT_EMOJIS[i % POINT_EMOJIS.len()], p))
            .collect::<Vec<_>>()
            .join("\n"),
        Platform::Instagram | Platform::Generic => points
            .iter()
            .map(|p| format!("• {}", p))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Assemble the final draft for a platform and style.
pub fn format_draft(summary: &PageSummary, platform: Platform, style: Style, parts: &DraftParts) -> PostDraft {
    match platform {
        Platform::Twitter => format_twitter_thread(summary, parts),
        Platform::Generic => PostDraft::Single(join_blocks(&[&parts.hook, &parts.points_block, &parts.cta])),
        Platform::Instagram => PostDraft::Single(format_instagram(summary, style, parts)),
        Platform::Linkedin | Platform::Facebook => PostDraft::Single(format_single(summary, style, parts)),
    }
}

/// Single-string layout shared by linkedin and facebook.
///
/// The source URL passes through [`sanitize_url`]; non-http(s) locations
/// are dropped from the draft rather than exported.
fn format_single(summary: &PageSummary, style: Style, parts: &DraftParts) -> String {
    let url = sanitize_url(&summary.url);

    match style {
        Style::Professional => join_blocks(&[
            &parts.hook,
            &summary.description,
            &parts.points_block,
            &parts.cta,
            &url,
            &parts.hashtags,
        ]),
        Style::Modern => join_blocks(&[
            &parts.hook,
            &parts.points_block,
            &format!("{} {}", parts.cta, url),
            &parts.hashtags,
        ]),
        Style::Minimal => join_blocks(&[&parts.hook, &summary.description, &url, &parts.hashtags]),
    }
}

/// Instagram layout: caption first, link expressed as "link in bio" culture
/// via the CTA, hashtag block last. Minimal style caps the hashtag block at
/// 10 tags independently of the platform-wide 30.
fn format_instagram(summary: &PageSummary, style: Style, parts: &DraftParts) -> String {
    let hashtags = match style {
        Style::Minimal => {
            let capped: Vec<&str> = parts.hashtags.split_whitespace().take(10).collect();
            capped.join(" ")
        }
        _ => parts.hashtags.clone(),
    };

    match style {
        Style::Professional => join_blocks(&[
            &parts.hook,
            &summary.description,
            &parts.points_block,
            &parts.cta,
            &hashtags,
        ]),
        Style::Modern => join_blocks(&[&parts.hook, &parts.points_block, &parts.cta, &hashtags]),
        Style::Minimal => join_blocks(&[&parts.hook, &parts.cta, &hashtags]),
    }
}

/// Twitter thread: hook segment, one segment per key point, closing segment
/// with CTA, URL, and hashtags. Every segment is position-prefixed and
/// capped at 280 characters; the URL passes through [`sanitize_url`] and is
/// omitted when rejected.
fn format_twitter_thread(summary: &PageSummary, parts: &DraftParts) -> PostDraft {
    let total = parts.points.len() + 2;
    let mut segments = Vec::with_capacity(total);

    segments.push(cap_tweet(&format!("1/ {} 🧵👇", parts.hook)));

    for (i, point) in parts.points.iter().enumerate() {
        let emoji = POINT_EMOJIS[i % POINT_EMOJIS.len()];
        segments.push(cap_tweet(&format!("{}/ {} {}", i + 2, emoji, point)));
    }

    let url = sanitize_url(&summary.url);
    let mut closing = format!("{}/ {}", total, parts.cta);
    for line in [url.as_str(), parts.hashtags.as_str()] {
        if !line.is_empty() {
            closing.push('\n');
            closing.push_str(line);
        }
    }
    segments.push(cap_tweet(&closing));

    PostDraft::Thread(segments)
}

/// Enforce the per-tweet character cap, truncating with an ellipsis.
fn cap_tweet(segment: &str) -> String {
    if segment.chars().count() <= TWEET_CAP {
        segment.to_string()
    } else {
        format!("{}…", truncate_chars(segment, TWEET_CAP - 1))
    }
}

/// Join non-empty blocks with blank lines.
fn join_blocks(blocks: &[&str]) -> String {
    blocks
        .iter()
        .filter(|b| !b.trim().is_empty())
        .map(|b| b.trim())
        .collect::<Vec<_>>()
        .join("\n\n")
}
