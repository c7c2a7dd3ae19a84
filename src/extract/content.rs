//! Article body retrieval for summary generation.

use crate::config::SiteConfig;
use crate::extract::normalized_text;
use crate::fetch::Fetch;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

/// How many content blocks feed the summary.
const MAX_BODY_BLOCKS: usize = 5;

/// Fetch an article page and return its opening paragraphs as one string.
///
/// A fetch failure is absorbed here: the summarizer can still fall back
/// to the card summary or the title, so the caller only ever sees text,
/// possibly empty, never an error.
pub async fn fetch_body<F: Fetch + Sync>(fetcher: &F, url: &str, config: &SiteConfig) -> String {
    let html = match fetcher.get(url).await {
        Ok(html) => html,
        Err(e) => {
            warn!(%url, error = %e, "Article fetch failed; summarizing without body text");
            return String::new();
        }
    };
    let body = extract_paragraphs(&html, config);
    debug!(%url, chars = body.len(), "Extracted article body");
    body
}

/// Pull the leading content blocks out of an article document.
///
/// Walks the configured content selectors and commits to the first one
/// that matches any blocks, then joins the trimmed non-empty text of at
/// most the first [`MAX_BODY_BLOCKS`] of them with single spaces.
pub fn extract_paragraphs(html: &str, config: &SiteConfig) -> String {
    let document = Html::parse_document(html);
    for raw in &config.content_selectors {
        let Ok(selector) = Selector::parse(raw) else { continue };
        let blocks: Vec<ElementRef<'_>> = document.select(&selector).collect();
        if blocks.is_empty() {
            continue;
        }
        return blocks
            .into_iter()
            .map(normalized_text)
            .filter(|text| !text.is_empty())
            .take(MAX_BODY_BLOCKS)
            .collect::<Vec<_>>()
            .join(" ");
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_blocks_beat_generic_paragraphs() {
        let html = r#"
            <div data-component="text-block">Lead paragraph.</div>
            <div data-component="text-block">Second paragraph.</div>
            <article><p>Generic paragraph that must lose.</p></article>
        "#;
        let body = extract_paragraphs(html, &SiteConfig::default());
        assert_eq!(body, "Lead paragraph. Second paragraph.");
    }

    #[test]
    fn test_falls_back_to_article_paragraphs() {
        let html = "<article><p>Only body text here.</p></article>";
        let body = extract_paragraphs(html, &SiteConfig::default());
        assert_eq!(body, "Only body text here.");
    }

    #[test]
    fn test_caps_at_five_blocks() {
        let mut html = String::from("<article>");
        for i in 1..=8 {
            html.push_str(&format!("<p>Paragraph number {i}.</p>"));
        }
        html.push_str("</article>");
        let body = extract_paragraphs(&html, &SiteConfig::default());
        assert!(body.contains("Paragraph number 5."));
        assert!(!body.contains("Paragraph number 6."));
    }

    #[test]
    fn test_empty_blocks_are_dropped() {
        let html = "<article><p>   </p><p>Real text.</p></article>";
        let body = extract_paragraphs(html, &SiteConfig::default());
        assert_eq!(body, "Real text.");
    }

    #[test]
    fn test_no_content_selector_match_yields_empty() {
        let body = extract_paragraphs("<div><span>chrome only</span></div>", &SiteConfig::default());
        assert_eq!(body, "");
    }
}
