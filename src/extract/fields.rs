//! Per-field extraction from a single article card.
//!
//! Each field has its own fallback chain and is resolved independently:
//! a title found by one selector combines freely with a link found by
//! another. Absence is ordinary data here; a missing field is a `None`
//! from its helper, never a caught fault.

use crate::config::SiteConfig;
use crate::extract::normalized_text;
use crate::models::ArticleStub;
use chrono::Local;
use scraper::{ElementRef, Selector};
use tracing::debug;
use url::Url;

/// Maximum stored length of a card summary, in characters.
const SUMMARY_MAX_CHARS: usize = 200;
/// Marker appended to a truncated summary.
const SUMMARY_MARKER: &str = "...";

/// Extract an [`ArticleStub`] from one card node.
///
/// Title and link are mandatory; if either chain comes up empty the card
/// is rejected with `None` and the batch moves on. The summary is
/// optional and defaults to the empty string. `scraped_at` is stamped
/// with the current wall-clock time.
pub fn extract_stub(card: ElementRef<'_>, config: &SiteConfig) -> Option<ArticleStub> {
    let Some(title) = first_text(card, &config.title_selectors) else {
        debug!("Card rejected: no title found");
        return None;
    };
    let Some(link) = first_link(card, &config.link_selectors, &config.base_url) else {
        debug!(%title, "Card rejected: no link found");
        return None;
    };
    let summary = first_text(card, &config.summary_selectors)
        .map(truncate_summary)
        .unwrap_or_default();

    Some(ArticleStub {
        title,
        link,
        summary,
        scraped_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    })
}

/// First non-empty trimmed text produced by the selector chain.
fn first_text(card: ElementRef<'_>, selectors: &[String]) -> Option<String> {
    for raw in selectors {
        let Ok(selector) = Selector::parse(raw) else { continue };
        if let Some(element) = card.select(&selector).next() {
            let text = normalized_text(element);
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// First present `href` produced by the selector chain, resolved to an
/// absolute URL when it is root-relative.
fn first_link(card: ElementRef<'_>, selectors: &[String], base_url: &str) -> Option<String> {
    for raw in selectors {
        let Ok(selector) = Selector::parse(raw) else { continue };
        let Some(element) = card.select(&selector).next() else { continue };
        let Some(href) = element.value().attr("href").filter(|h| !h.is_empty()) else {
            continue;
        };
        if href.starts_with('/') {
            if let Ok(resolved) = Url::parse(base_url).and_then(|base| base.join(href)) {
                return Some(resolved.to_string());
            }
            continue;
        }
        return Some(href.to_string());
    }
    None
}

/// Cap a summary at [`SUMMARY_MAX_CHARS`] characters, marking the cut.
fn truncate_summary(text: String) -> String {
    if text.chars().count() > SUMMARY_MAX_CHARS {
        let kept: String = text.chars().take(SUMMARY_MAX_CHARS).collect();
        format!("{kept}{SUMMARY_MARKER}")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn extract_first_card(html: &str) -> Option<ArticleStub> {
        let document = Html::parse_document(html);
        let selector = Selector::parse("article").unwrap();
        let card = document.select(&selector).next().expect("fixture has a card");
        extract_stub(card, &SiteConfig::default())
    }

    #[test]
    fn test_root_relative_link_resolves_to_absolute() {
        let stub = extract_first_card(
            r#"<article><h2>Headline</h2><a href="/news/world-123">more</a></article>"#,
        )
        .unwrap();
        assert_eq!(stub.link, "https://www.bbc.com/news/world-123");
    }

    #[test]
    fn test_absolute_link_passes_through() {
        let stub = extract_first_card(
            r#"<article><h2>Headline</h2><a href="https://example.org/story">more</a></article>"#,
        )
        .unwrap();
        assert_eq!(stub.link, "https://example.org/story");
    }

    #[test]
    fn test_stub_link_is_never_root_relative() {
        let stub = extract_first_card(
            r#"<article><h2>Headline</h2><a href="/sport/cricket-9">more</a></article>"#,
        )
        .unwrap();
        assert!(!stub.link.starts_with('/'));
        assert!(stub.link.starts_with("https://"));
    }

    #[test]
    fn test_missing_title_rejects_card() {
        let stub = extract_first_card(r#"<article><a href="/news/x">more</a></article>"#);
        assert!(stub.is_none());
    }

    #[test]
    fn test_missing_link_rejects_card() {
        let stub = extract_first_card("<article><h2>Headline</h2></article>");
        assert!(stub.is_none());
    }

    #[test]
    fn test_missing_summary_is_empty_not_rejection() {
        let stub = extract_first_card(
            r#"<article><h2>Headline</h2><a href="/news/x">more</a></article>"#,
        )
        .unwrap();
        assert_eq!(stub.summary, "");
    }

    #[test]
    fn test_fields_resolve_independently() {
        // Title only matches via h3, link only via the bare anchor chain.
        let stub = extract_first_card(
            r#"<article><h3>Deep headline</h3><a href="/news/y">go</a></article>"#,
        )
        .unwrap();
        assert_eq!(stub.title, "Deep headline");
        assert_eq!(stub.link, "https://www.bbc.com/news/y");
    }

    #[test]
    fn test_long_summary_truncated_to_exactly_200_chars_plus_marker() {
        let long = "x".repeat(250);
        let html = format!(
            r#"<article><h2>Headline</h2><a href="/news/z">go</a><p>{long}</p></article>"#
        );
        let stub = extract_first_card(&html).unwrap();
        assert!(stub.summary.ends_with("..."));
        let body = stub.summary.trim_end_matches("...");
        assert_eq!(body.chars().count(), 200);
    }

    #[test]
    fn test_short_summary_kept_verbatim() {
        let stub = extract_first_card(
            r#"<article><h2>Headline</h2><a href="/news/z">go</a><p>Short blurb.</p></article>"#,
        )
        .unwrap();
        assert_eq!(stub.summary, "Short blurb.");
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let long = "é".repeat(210);
        let html = format!(
            r#"<article><h2>Headline</h2><a href="/news/z">go</a><p>{long}</p></article>"#
        );
        let stub = extract_first_card(&html).unwrap();
        let body = stub.summary.trim_end_matches("...");
        assert_eq!(body.chars().count(), 200);
    }

    #[test]
    fn test_empty_title_text_falls_through_to_next_selector() {
        let stub = extract_first_card(
            r#"<article><h2>   </h2><h3>Real headline</h3><a href="/news/x">go</a></article>"#,
        )
        .unwrap();
        assert_eq!(stub.title, "Real headline");
    }
}
