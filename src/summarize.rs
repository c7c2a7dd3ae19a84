//! Tiered summary generation.
//!
//! The on-page card summary is usually editorial copy and the best text
//! available, so it wins whenever it is substantial. Failing that, the
//! opening sentences of the article body make a serviceable summary, and
//! as a last resort the title is wrapped in a fixed phrase so the result
//! is never empty.

use once_cell::sync::Lazy;
use regex::Regex;

/// A card summary shorter than this is considered too thin to reuse.
const MIN_USABLE_SUMMARY_CHARS: usize = 50;
/// Body segments at or under this length are discarded as fragments.
const MIN_SENTENCE_CHARS: usize = 20;
/// How many body sentences a derived summary may contain.
const MAX_SUMMARY_SENTENCES: usize = 2;

static SENTENCE_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Produce the final summary for an article.
///
/// Three tiers, first match wins:
/// 1. a trimmed `existing_summary` longer than 50 characters is returned
///    unchanged;
/// 2. otherwise, if `body_text` is non-empty, its first one or two
///    qualifying sentences are joined with `". "` and terminated with a
///    period;
/// 3. otherwise a fixed phrase embedding the title.
pub fn summarize(title: &str, existing_summary: &str, body_text: &str) -> String {
    if existing_summary.trim().chars().count() > MIN_USABLE_SUMMARY_CHARS {
        return existing_summary.to_string();
    }

    if !body_text.is_empty() {
        let sentences: Vec<&str> = SENTENCE_SPLIT
            .split(body_text)
            .map(str::trim)
            .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
            .collect();
        if !sentences.is_empty() {
            let take = sentences.len().min(MAX_SUMMARY_SENTENCES);
            let mut summary = sentences[..take].join(". ");
            if !summary.ends_with(['.', '!', '?']) {
                summary.push('.');
            }
            return summary;
        }
    }

    format!("News article: {title}")
}
