//! Site configuration: origins, headers, limits, and selector fallback chains.
//!
//! The selector lists are ordered by priority: most specific and most
//! current markup first, most generic last. Each consumer walks its list
//! and short-circuits on the first selector that produces a result, so the
//! order here *is* the fallback policy. Keeping the lists in plain data
//! (rather than hard-coding them at the call sites) lets tests swap in
//! fixture-friendly chains and keeps site churn a one-file edit.

use std::time::Duration;

/// Read-only configuration for one scrape run.
///
/// Constructed once in `main` (or by a test) and passed by reference to
/// every component. Nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Origin used to resolve root-relative article links.
    pub base_url: String,
    /// The homepage to scan for article cards.
    pub homepage_url: String,
    /// Browser identification sent with every request.
    pub user_agent: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Pause between consecutive article fetches. Rate-limiting policy,
    /// not error handling; tests set this to zero.
    pub politeness_delay: Duration,
    /// How many cards to examine before giving up on reaching the cap.
    pub candidate_pool: usize,
    /// Maximum number of articles per run.
    pub article_cap: usize,
    /// Card-locating selectors, tried in order on the homepage document.
    pub card_selectors: Vec<String>,
    /// Title selectors, tried in order within a card.
    pub title_selectors: Vec<String>,
    /// Link selectors, tried in order within a card.
    pub link_selectors: Vec<String>,
    /// Summary selectors, tried in order within a card.
    pub summary_selectors: Vec<String>,
    /// Body-content selectors, tried in order on an article page.
    pub content_selectors: Vec<String>,
}

impl Default for SiteConfig {
    /// The BBC News configuration the binary ships with.
    fn default() -> Self {
        SiteConfig {
            base_url: "https://www.bbc.com".to_string(),
            homepage_url: "https://www.bbc.com/news".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            request_timeout: Duration::from_secs(10),
            politeness_delay: Duration::from_secs(1),
            candidate_pool: 15,
            article_cap: 10,
            card_selectors: owned(&[
                r#"article[data-testid="card"]"#,
                r#"div[data-testid="card"]"#,
                ".nw-c-promo",
                ".gs-c-promo",
                "article",
            ]),
            title_selectors: owned(&[
                "h2",
                "h3",
                "h1",
                ".gs-c-promo-heading__title",
                r#"[data-testid="card-headline"]"#,
            ]),
            link_selectors: owned(&["a[href]", "h2 a", "h3 a"]),
            summary_selectors: owned(&[
                "p",
                ".gs-c-promo-summary",
                r#"[data-testid="card-description"]"#,
            ]),
            content_selectors: owned(&[
                r#"[data-component="text-block"]"#,
                ".story-body__inner p",
                "article p",
                ".ssrcss-7uxr49-RichTextContainer p",
            ]),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
