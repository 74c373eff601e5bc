use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::document::{DocumentKind, RawDocument};

pub mod http;

pub use http::HttpFetcher;

/// Browser-like user agent sent with every page request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

#[derive(Debug, Error)]
pub enum CrawlerError {
    #[error("failed to build HTTP client: {0}")]
    Build(String),

    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to get URL {url}: {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

pub type CrawlerResult<T> = Result<T, CrawlerError>;

/// An abstraction over the source of page HTML.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Downloads the body of `url`. Non-success statuses are errors.
    async fn fetch(&self, url: &str) -> CrawlerResult<String>;

    /// Downloads `url` and tags the body with `kind`.
    async fn fetch_document(&self, url: &str, kind: DocumentKind) -> CrawlerResult<RawDocument> {
        let html = self.fetch(url).await?;
        Ok(RawDocument::new(kind, html))
    }
}

/// Builds the HTTP client used for page downloads.
pub fn build_reqwest_client(
    user_agent: &str,
    timeout: Option<Duration>,
) -> CrawlerResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(user_agent);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| CrawlerError::Build(e.to_string()))
}
