//! HTTP fetch boundary.
//!
//! All network access goes through the [`Fetch`] trait so the pipeline and
//! the content fetcher can be exercised against canned documents in tests.
//! The production implementation, [`HttpFetcher`], wraps a single
//! `reqwest::Client` configured with a browser `User-Agent` and a bounded
//! timeout; the client is reused across every request in a run.

use crate::config::SiteConfig;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

/// Why a fetch produced no document.
///
/// A non-success HTTP status is a failure in its own right; there is no
/// implicit empty-body success path.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, TLS, or timeout failure from the transport.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("server returned {status} for {url}")]
    Status { status: StatusCode, url: String },
}

/// Source of raw HTML documents.
#[async_trait]
pub trait Fetch {
    /// Fetch the document at `url`, or explain why it could not be had.
    async fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Network-backed [`Fetch`] implementation.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher from the site configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be
    /// constructed (e.g. TLS backend initialization fails).
    pub fn new(config: &SiteConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.request_timeout)
            .build()?;
        Ok(HttpFetcher { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }
        let body = response.text().await?;
        debug!(%url, bytes = body.len(), "Fetched document");
        Ok(body)
    }
}
