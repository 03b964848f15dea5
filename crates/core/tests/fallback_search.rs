//! End-to-end tests for primary search, alternate-title fallback and ranking
//! against a mock feed.

use episodic_core::testing::{fixtures, MockFeed};
use episodic_core::{search_with_fallback, SearchError, SearchRequest};
use tokio_util::sync::CancellationToken;

fn request(title: &str, alts: &[&str]) -> SearchRequest {
    SearchRequest {
        primary_title: title.to_string(),
        alt_titles: alts.iter().map(|s| s.to_string()).collect(),
        episode: 5,
        quality: "1080p".to_string(),
    }
}

fn hashes(items: &[episodic_core::FeedItem]) -> Vec<&str> {
    items.iter().map(|i| i.info_hash.as_str()).collect()
}

#[tokio::test]
async fn test_fallback_merges_and_deduplicates() {
    let feed = MockFeed::new();
    feed.set_query_results(
        "Frieren 05 1080p",
        vec![fixtures::feed_item("[SubsPlease] Frieren - 05 (1080p)", "h1", 40)],
    )
    .await;
    feed.set_query_results(
        "Sousou no Frieren 05 1080p",
        vec![
            fixtures::feed_item("[SubsPlease] Frieren - 05 (1080p)", "h1", 40),
            fixtures::feed_item("[Erai-raws] Sousou no Frieren - 05 [1080p]", "h2", 25),
        ],
    )
    .await;

    let req = request("Frieren", &["Frieren", "Sousou no Frieren"]);
    let results = search_with_fallback(&feed, &req, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(hashes(&results), vec!["h1", "h2"]);
    assert_eq!(
        feed.recorded_queries().await,
        vec!["Frieren 05 1080p", "Sousou no Frieren 05 1080p"]
    );
}

#[tokio::test]
async fn test_native_script_alt_is_never_queried() {
    let feed = MockFeed::new();
    let req = request("Oshi no Ko", &["【推しの子】", "My Star"]);

    let results = search_with_fallback(&feed, &req, &CancellationToken::new())
        .await
        .unwrap();

    assert!(results.is_empty());
    assert_eq!(feed.fetch_count_for("【推しの子】 05 1080p").await, 0);
    assert_eq!(
        feed.recorded_queries().await,
        vec!["Oshi no Ko 05 1080p", "My Star 05 1080p"]
    );
}

#[tokio::test]
async fn test_primary_failure_aborts_search() {
    let feed = MockFeed::new();
    feed.fail_query(
        "Frieren 05 1080p",
        SearchError::ConnectionFailed("connection refused".to_string()),
    )
    .await;

    let req = request("Frieren", &["Sousou no Frieren"]);
    let err = search_with_fallback(&feed, &req, &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::ConnectionFailed(_)));
    assert_eq!(feed.fetch_count().await, 1);
}

#[tokio::test]
async fn test_failed_fallback_query_is_skipped() {
    let feed = MockFeed::new();
    feed.fail_query("Sousou no Frieren 05 1080p", SearchError::Timeout)
        .await;
    feed.set_query_results(
        "Frieren: Beyond Journey's End 05 1080p",
        vec![fixtures::feed_item("[SubsPlease] Frieren - 05 (1080p)", "h1", 40)],
    )
    .await;

    let req = request(
        "Frieren",
        &["Frieren", "Sousou no Frieren", "Frieren: Beyond Journey's End"],
    );
    let results = search_with_fallback(&feed, &req, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(hashes(&results), vec!["h1"]);
    assert_eq!(feed.fetch_count().await, 3);
}

#[tokio::test]
async fn test_dedup_is_seeded_from_irrelevant_primary_items() {
    let feed = MockFeed::new();
    // Irrelevant under every alt title, so it never survives ranking
    feed.set_query_results(
        "Frieren 05 1080p",
        vec![fixtures::feed_item("[Frieren] Mushoku Tensei - 05 (1080p)", "dup", 90)],
    )
    .await;
    feed.set_query_results(
        "Sousou no Frieren 05 1080p",
        vec![
            fixtures::feed_item("[SubsPlease] Sousou no Frieren - 05 (1080p)", "dup", 90),
            fixtures::feed_item("[Erai-raws] Sousou no Frieren - 05 [1080p]", "h2", 25),
        ],
    )
    .await;

    let req = request("Frieren", &["Frieren", "Sousou no Frieren"]);
    let results = search_with_fallback(&feed, &req, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(hashes(&results), vec!["h2"]);
}

#[tokio::test]
async fn test_items_without_hash_are_kept() {
    let feed = MockFeed::new();
    feed.set_query_results(
        "Sousou no Frieren 05 1080p",
        vec![
            fixtures::feed_item("[SubsPlease] Sousou no Frieren - 05 (1080p)", "", 30),
            fixtures::feed_item("[Erai-raws] Sousou no Frieren - 05 [1080p]", "", 20),
        ],
    )
    .await;

    let req = request("Frieren", &["Sousou no Frieren"]);
    let results = search_with_fallback(&feed, &req, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn test_merged_pool_is_ranked_by_relevance() {
    let feed = MockFeed::new();
    // Sequel release: one unmatched token lowers relevance to 2.0
    feed.set_query_results(
        "Frieren 05 1080p",
        vec![fixtures::feed_item("[X] Sousou no Frieren S2 - 05 (1080p)", "sequel", 500)],
    )
    .await;
    feed.set_query_results(
        "Sousou no Frieren 05 1080p",
        vec![
            fixtures::feed_item("[Y] Sousou no Frieren - 05 (1080p)", "exact", 10),
            fixtures::feed_item("[Z] Mushoku Tensei - 05 (1080p)", "other", 300),
        ],
    )
    .await;

    let req = request("Frieren", &["Sousou no Frieren"]);
    let results = search_with_fallback(&feed, &req, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(hashes(&results), vec!["exact", "sequel"]);
}

#[tokio::test]
async fn test_cancellation_between_fallback_queries() {
    let feed = MockFeed::new();
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    feed.set_query_handler(move |query| {
        if query.starts_with("Sousou") {
            trigger.cancel();
            return Some(Ok(Vec::new()));
        }
        None
    })
    .await;

    let req = request(
        "Frieren",
        &["Frieren", "Sousou no Frieren", "Frieren Beyond Journey's End"],
    );
    let err = search_with_fallback(&feed, &req, &cancel).await.unwrap_err();

    assert_eq!(err, SearchError::Cancelled);
    assert_eq!(
        feed.recorded_queries().await,
        vec!["Frieren 05 1080p", "Sousou no Frieren 05 1080p"]
    );
}
