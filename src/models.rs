//! Data models for scraped articles.
//!
//! Two shapes flow through the pipeline:
//! - [`ArticleStub`]: what the field extractor pulls out of a homepage card
//!   before the article body has been fetched
//! - [`ArticleRecord`]: the final ranked record, ready for the CSV sink

/// An article as extracted from a single homepage card.
///
/// A stub always has a non-empty title and an absolute link; cards where
/// either could not be resolved never produce a stub. The summary may be
/// empty when the card carried no description.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleStub {
    /// The article headline.
    pub title: String,
    /// Absolute URL of the article page.
    pub link: String,
    /// Summary snippet from the card, truncated to 200 characters.
    pub summary: String,
    /// Wall-clock time of extraction, `YYYY-MM-DD HH:MM:SS`.
    pub scraped_at: String,
}

/// A fully processed article with its rank and final summary.
///
/// Ranks are 1-based, contiguous, and match the order in which cards were
/// encountered on the homepage. One record maps to one CSV row.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleRecord {
    /// Position on the homepage, starting at 1.
    pub rank: u32,
    /// The article headline.
    pub title: String,
    /// The generated summary.
    pub summary: String,
    /// Absolute URL of the article page.
    pub link: String,
    /// Wall-clock time of extraction, inherited from the stub.
    pub scraped_at: String,
}

impl ArticleRecord {
    /// Build a record from a stub, its pipeline position, and the
    /// generated summary.
    pub fn from_stub(stub: ArticleStub, rank: u32, summary: String) -> Self {
        ArticleRecord {
            rank,
            title: stub.title,
            summary,
            link: stub.link,
            scraped_at: stub.scraped_at,
        }
    }
}
