//! Mock feed for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::feed::{Feed, FeedItem, SearchError};

/// A query handler that produces results dynamically based on the query.
type QueryHandler = Box<dyn Fn(&str) -> Option<Result<Vec<FeedItem>, SearchError>> + Send + Sync>;

/// Mock implementation of the `Feed` trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable results, globally or per query
/// - Fail specific queries
/// - Record every query for call-count assertions
/// - Simulate slow fetches
///
/// # Example
///
/// ```rust,ignore
/// use episodic_core::testing::{fixtures, MockFeed};
///
/// let feed = MockFeed::new();
/// feed.set_query_results("Frieren 05", vec![
///     fixtures::feed_item("[SubsPlease] Frieren - 05 (1080p)", "abc123", 40),
/// ]).await;
/// feed.fail_query("Sousou no Frieren 05", SearchError::Timeout).await;
///
/// let items = feed.fetch("Frieren 05").await?;
/// assert_eq!(items.len(), 1);
/// assert_eq!(feed.fetch_count().await, 1);
/// ```
pub struct MockFeed {
    /// Results returned for queries with no specific configuration.
    results: Arc<RwLock<Vec<FeedItem>>>,
    /// Results for specific queries.
    query_results: Arc<RwLock<HashMap<String, Vec<FeedItem>>>>,
    /// Errors for specific queries.
    query_errors: Arc<RwLock<HashMap<String, SearchError>>>,
    /// Recorded queries, in call order.
    queries: Arc<RwLock<Vec<String>>>,
    /// Artificial latency applied to every fetch.
    delay: Arc<RwLock<Option<Duration>>>,
    /// Query handler for dynamic result generation.
    query_handler: Arc<RwLock<Option<QueryHandler>>>,
}

impl std::fmt::Debug for MockFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockFeed")
            .field("results", &"<results>")
            .field("query_results", &"<query_results>")
            .field("query_errors", &"<query_errors>")
            .field("queries", &"<queries>")
            .field("delay", &"<delay>")
            .field("query_handler", &"<handler>")
            .finish()
    }
}

impl Default for MockFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFeed {
    /// Create a new mock feed that returns nothing.
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(Vec::new())),
            query_results: Arc::new(RwLock::new(HashMap::new())),
            query_errors: Arc::new(RwLock::new(HashMap::new())),
            queries: Arc::new(RwLock::new(Vec::new())),
            delay: Arc::new(RwLock::new(None)),
            query_handler: Arc::new(RwLock::new(None)),
        }
    }

    /// Set the results returned for queries without specific configuration.
    pub async fn set_results(&self, results: Vec<FeedItem>) {
        *self.results.write().await = results;
    }

    /// Set the results returned for one exact query string.
    pub async fn set_query_results(&self, query: &str, results: Vec<FeedItem>) {
        self.query_results
            .write()
            .await
            .insert(query.to_string(), results);
    }

    /// Make one exact query string fail with the given error.
    pub async fn fail_query(&self, query: &str, error: SearchError) {
        self.query_errors
            .write()
            .await
            .insert(query.to_string(), error);
    }

    /// Delay every subsequent fetch by `delay`.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    /// Set a query handler that takes precedence over all other configuration.
    ///
    /// Returning `None` falls through to the configured results.
    pub async fn set_query_handler<F>(&self, handler: F)
    where
        F: Fn(&str) -> Option<Result<Vec<FeedItem>, SearchError>> + Send + Sync + 'static,
    {
        *self.query_handler.write().await = Some(Box::new(handler));
    }

    /// Queries received so far, in call order.
    pub async fn recorded_queries(&self) -> Vec<String> {
        self.queries.read().await.clone()
    }

    /// Number of fetches performed, including failed ones.
    pub async fn fetch_count(&self) -> usize {
        self.queries.read().await.len()
    }

    /// Number of fetches performed for one exact query string.
    pub async fn fetch_count_for(&self, query: &str) -> usize {
        self.queries
            .read()
            .await
            .iter()
            .filter(|q| q.as_str() == query)
            .count()
    }
}

#[async_trait]
impl Feed for MockFeed {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, query: &str) -> Result<Vec<FeedItem>, SearchError> {
        // Record the fetch
        self.queries.write().await.push(query.to_string());

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(ref handler) = *self.query_handler.read().await {
            if let Some(result) = handler(query) {
                return result;
            }
        }

        if let Some(err) = self.query_errors.read().await.get(query) {
            return Err(err.clone());
        }

        if let Some(results) = self.query_results.read().await.get(query) {
            return Ok(results.clone());
        }

        Ok(self.results.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_default_results() {
        let feed = MockFeed::new();
        feed.set_results(vec![fixtures::feed_item("A", "a", 1)]).await;

        let items = feed.fetch("anything").await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(feed.recorded_queries().await, vec!["anything"]);
    }

    #[tokio::test]
    async fn test_query_results_override_defaults() {
        let feed = MockFeed::new();
        feed.set_results(vec![fixtures::feed_item("Default", "d", 1)]).await;
        feed.set_query_results("special", vec![fixtures::feed_item("Special", "s", 1)])
            .await;

        assert_eq!(feed.fetch("special").await.unwrap()[0].title, "Special");
        assert_eq!(feed.fetch("other").await.unwrap()[0].title, "Default");
    }

    #[tokio::test]
    async fn test_failed_query_is_still_recorded() {
        let feed = MockFeed::new();
        feed.fail_query("broken", SearchError::Timeout).await;

        assert_eq!(feed.fetch("broken").await.unwrap_err(), SearchError::Timeout);
        assert_eq!(feed.fetch_count().await, 1);
        assert_eq!(feed.fetch_count_for("broken").await, 1);
        assert_eq!(feed.fetch_count_for("fine").await, 0);
    }

    #[tokio::test]
    async fn test_query_handler_takes_precedence() {
        let feed = MockFeed::new();
        feed.fail_query("q", SearchError::Timeout).await;
        feed.set_query_handler(|query| {
            (query == "q").then(|| Ok(vec![fixtures::feed_item("Handled", "h", 1)]))
        })
        .await;

        assert_eq!(feed.fetch("q").await.unwrap()[0].title, "Handled");
        assert!(feed.fetch("other").await.unwrap().is_empty());
    }
}
