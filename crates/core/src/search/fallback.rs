//! Primary search with alternate-title fallback.

use std::collections::HashSet;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::feed::{Feed, FeedItem, SearchError};
use crate::matcher::rank;

use super::query::{build_query, is_likely_cjk};
use super::SearchRequest;

/// Ranked primary results at or above this count skip the fallback queries.
pub const MIN_RESULTS: usize = 3;

/// Run a single query against the feed, aborting as soon as `cancel` fires.
///
/// Blank queries are rejected before the feed is touched.
pub async fn search_once(
    feed: &dyn Feed,
    query: &str,
    cancel: &CancellationToken,
) -> Result<Vec<FeedItem>, SearchError> {
    if query.trim().is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    if cancel.is_cancelled() {
        return Err(SearchError::Cancelled);
    }

    debug!(feed = feed.name(), query = %query, "Running query");
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(SearchError::Cancelled),
        result = feed.fetch(query) => result,
    }
}

/// Search for an episode, falling back to alternate titles when the primary
/// query yields fewer than [`MIN_RESULTS`] relevant items.
///
/// Fallback queries run one at a time. A failing fallback query is skipped;
/// a failing primary query or a cancellation aborts the whole search.
/// Merged items are deduplicated by info hash and the pool is ranked again.
pub async fn search_with_fallback(
    feed: &dyn Feed,
    request: &SearchRequest,
    cancel: &CancellationToken,
) -> Result<Vec<FeedItem>, SearchError> {
    let primary_query = build_query(&request.primary_title, request.episode, &request.quality);
    let mut pool = search_once(feed, &primary_query, cancel).await?;

    let ranked = rank(&pool, &request.alt_titles);
    if ranked.len() >= MIN_RESULTS {
        debug!(
            query = %primary_query,
            results = ranked.len(),
            "Primary query returned enough results"
        );
        return Ok(ranked);
    }

    info!(
        query = %primary_query,
        results = ranked.len(),
        alt_titles = request.alt_titles.len(),
        "Too few relevant results, trying alternate titles"
    );

    // Seeded from every primary item, relevant or not.
    let mut seen: HashSet<String> = pool
        .iter()
        .filter(|item| !item.info_hash.is_empty())
        .map(|item| item.info_hash.clone())
        .collect();

    for alt in &request.alt_titles {
        if is_likely_cjk(alt) {
            debug!(alt = %alt, "Skipping native-script alternate title");
            continue;
        }

        let query = build_query(alt, request.episode, &request.quality);
        if query == primary_query {
            continue;
        }

        let extra = match search_once(feed, &query, cancel).await {
            Ok(items) => items,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                warn!(query = %query, error = %e, "Fallback query failed, skipping");
                continue;
            }
        };

        let before = pool.len();
        for item in extra {
            if !item.info_hash.is_empty() && !seen.insert(item.info_hash.clone()) {
                continue;
            }
            pool.push(item);
        }

        debug!(
            query = %query,
            added = pool.len() - before,
            "Merged fallback results"
        );
    }

    let ranked = rank(&pool, &request.alt_titles);
    info!(
        pool = pool.len(),
        results = ranked.len(),
        "Fallback search complete"
    );
    Ok(ranked)
}
