//! Structural extraction from parsed HTML.
//!
//! The news site's markup changes often, so nothing in here assumes a
//! single stable structure. Each submodule walks an ordered selector
//! fallback chain from [`SiteConfig`](crate::config::SiteConfig) and
//! short-circuits on the first selector that produces a result:
//!
//! - [`cards`]: find the article card nodes on the homepage
//! - [`fields`]: pull title, link, and summary out of one card
//! - [`content`]: fetch an article page and extract its opening paragraphs

use scraper::ElementRef;

pub mod cards;
pub mod content;
pub mod fields;

/// Collect an element's text with whitespace normalized to single spaces.
pub(crate) fn normalized_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
