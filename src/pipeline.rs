//! Run orchestration: homepage → cards → stubs → bodies → records.

use crate::config::SiteConfig;
use crate::extract::{cards, content, fields};
use crate::fetch::Fetch;
use crate::models::{ArticleRecord, ArticleStub};
use crate::summarize::summarize;
use crate::utils::truncate_display;
use scraper::Html;
use tracing::{error, info, warn};

/// One scrape-and-summarize run over a single site.
///
/// Holds only borrowed collaborators; a `Pipeline` is cheap to build and
/// used once. All work is strictly sequential: each network call
/// completes before the next begins, with a politeness pause between
/// article fetches.
pub struct Pipeline<'a, F: Fetch + Sync> {
    fetcher: &'a F,
    config: &'a SiteConfig,
}

impl<'a, F: Fetch + Sync> Pipeline<'a, F> {
    pub fn new(fetcher: &'a F, config: &'a SiteConfig) -> Self {
        Pipeline { fetcher, config }
    }

    /// Execute the run and return the ranked records, at most
    /// `article_cap` of them.
    ///
    /// Failures shrink the result instead of aborting it: a failed
    /// homepage fetch or an empty card set returns an empty vector, a
    /// bad card is skipped, and a failed article fetch only costs that
    /// article its body-derived summary.
    pub async fn run(&self) -> Vec<ArticleRecord> {
        info!(url = %self.config.homepage_url, "Fetching homepage");
        let html = match self.fetcher.get(&self.config.homepage_url).await {
            Ok(html) => html,
            Err(e) => {
                error!(url = %self.config.homepage_url, error = %e, "Homepage fetch failed");
                return Vec::new();
            }
        };

        let stubs = self.collect_stubs(&html);
        if stubs.is_empty() {
            warn!("No articles extracted; the site structure may have changed");
            return Vec::new();
        }

        let total = stubs.len();
        info!(count = total, "Processing articles");

        let mut records = Vec::with_capacity(total);
        for (i, stub) in stubs.into_iter().enumerate() {
            let rank = (i + 1) as u32;
            info!(
                rank,
                total,
                title = %truncate_display(&stub.title, 50),
                "Processing article"
            );

            let body = content::fetch_body(self.fetcher, &stub.link, self.config).await;
            let summary = summarize(&stub.title, &stub.summary, &body);
            records.push(ArticleRecord::from_stub(stub, rank, summary));

            if i + 1 < total {
                tokio::time::sleep(self.config.politeness_delay).await;
            }
        }
        records
    }

    /// Parse the homepage and extract stubs from the candidate cards.
    ///
    /// Scans at most `candidate_pool` cards so a handful of malformed
    /// ones cannot starve the run, and stops early once `article_cap`
    /// stubs have been gathered.
    fn collect_stubs(&self, html: &str) -> Vec<ArticleStub> {
        let document = Html::parse_document(html);
        let located = cards::locate_cards(&document, self.config);

        let mut stubs = Vec::new();
        for card in located.into_iter().take(self.config.candidate_pool) {
            if stubs.len() >= self.config.article_cap {
                break;
            }
            if let Some(stub) = fields::extract_stub(card, self.config) {
                info!(
                    n = stubs.len() + 1,
                    title = %truncate_display(&stub.title, 50),
                    "Extracted article"
                );
                stubs.push(stub);
            }
        }
        stubs
    }
}
