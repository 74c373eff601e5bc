use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::crawlers::{CrawlerError, CrawlerResult, PageFetcher, build_reqwest_client};

/// Fetches pages over HTTP with a fixed user agent.
///
/// Requests are issued one at a time and never retried.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Creates a fetcher sending `user_agent`, optionally bounded by `timeout`.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> CrawlerResult<Self> {
        Ok(Self {
            client: build_reqwest_client(user_agent, timeout)?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> CrawlerResult<String> {
        let parsed = Url::parse(url).map_err(|source| CrawlerError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        log::info!("Fetching {url}");
        let res = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|source| CrawlerError::Request {
                url: url.to_string(),
                source,
            })?;

        if !res.status().is_success() {
            log::debug!("Failed to get URL {}: {}", url, res.status());
            return Err(CrawlerError::Status {
                url: url.to_string(),
                status: res.status(),
            });
        }

        let text = res.text().await.map_err(|source| CrawlerError::Request {
            url: url.to_string(),
            source,
        })?;
        log::debug!("Fetched {} bytes from {url}", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawlers::DEFAULT_USER_AGENT;

    #[tokio::test]
    async fn rejects_malformed_url_before_sending() {
        let fetcher = HttpFetcher::new(DEFAULT_USER_AGENT, None).unwrap();

        let err = fetcher.fetch("not a url").await.unwrap_err();

        assert!(matches!(err, CrawlerError::InvalidUrl { .. }));
    }
}
