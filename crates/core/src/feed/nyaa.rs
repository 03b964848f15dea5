//! nyaa.si RSS feed client.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::config::{FeedConfig, DEFAULT_FEED_URL};

use super::rss::parse_rss;
use super::{Feed, FeedItem, SearchError};

/// HTTP client for the nyaa.si RSS search endpoint.
///
/// Each value owns its own connection pool and configuration; construct one
/// per feed and share it by reference.
pub struct NyaaClient {
    client: Client,
    config: FeedConfig,
}

impl NyaaClient {
    /// Create a new client with the given feed configuration.
    pub fn new(config: FeedConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()
            .map_err(|e| SearchError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Build the RSS search URL for a query.
    fn build_search_url(&self, query: &str) -> String {
        let base = match self.config.url.trim() {
            "" => DEFAULT_FEED_URL,
            url => url,
        };

        format!(
            "{}?page=rss&q={}&c={}&f={}",
            base,
            urlencoding::encode(query),
            urlencoding::encode(&self.config.category),
            urlencoding::encode(&self.config.filter)
        )
    }
}

#[async_trait]
impl Feed for NyaaClient {
    fn name(&self) -> &str {
        "nyaa"
    }

    async fn fetch(&self, query: &str) -> Result<Vec<FeedItem>, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let url = self.build_search_url(query);
        debug!(query = %query, "Fetching nyaa RSS");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/rss+xml, application/xml")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout
                } else if e.is_connect() {
                    SearchError::ConnectionFailed(e.to_string())
                } else {
                    SearchError::ApiError(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::ApiError(format!(
                "HTTP {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                SearchError::Timeout
            } else {
                SearchError::Parse(format!("Failed to read response body: {}", e))
            }
        })?;

        let mut items = parse_rss(&body)?;
        sort_by_health(&mut items);

        debug!(query = %query, results = items.len(), "nyaa fetch complete");
        Ok(items)
    }
}

/// Sort by seeders descending, then downloads descending.
fn sort_by_health(items: &mut [FeedItem]) {
    items.sort_by(|a, b| {
        b.seeders
            .cmp(&a.seeders)
            .then_with(|| b.downloads.cmp(&a.downloads))
    });
}
