//! Article card location on the homepage document.

use crate::config::SiteConfig;
use scraper::{ElementRef, Html, Selector};
use tracing::{info, warn};

/// Find the article card nodes in a parsed homepage document.
///
/// Tries the configured card selectors in priority order and returns the
/// matches of the *first* selector that yields any. Results are never
/// merged across selectors, since a generic selector would only duplicate
/// or dilute what a specific one already found.
///
/// An empty result is not an error; it tells the caller that extraction
/// is impossible for this document (usually a site redesign).
pub fn locate_cards<'a>(document: &'a Html, config: &SiteConfig) -> Vec<ElementRef<'a>> {
    for raw in &config.card_selectors {
        let selector = match Selector::parse(raw) {
            Ok(selector) => selector,
            Err(_) => {
                warn!(selector = %raw, "Skipping unparseable card selector");
                continue;
            }
        };
        let cards: Vec<ElementRef<'a>> = document.select(&selector).collect();
        if !cards.is_empty() {
            info!(count = cards.len(), selector = %raw, "Located article cards");
            return cards;
        }
    }
    warn!("No card selector matched anything on the homepage");
    Vec::new()
}
