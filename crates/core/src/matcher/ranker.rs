//! Relevance filtering and ordering of feed results.

use tracing::debug;

use crate::feed::FeedItem;

use super::scorer::{is_relevant, score};

/// A feed item paired with its relevance. Only lives while ranking.
struct ScoredItem<'a> {
    item: &'a FeedItem,
    relevance: f64,
}

/// Filter `items` by relevance to `alt_titles` and order the survivors.
///
/// Order is relevance descending, then seeders, then downloads; remaining
/// ties keep their input order. Blank alt titles are ignored, and when none
/// are left the items are returned unfiltered and in input order.
pub fn rank(items: &[FeedItem], alt_titles: &[impl AsRef<str>]) -> Vec<FeedItem> {
    let alts: Vec<&str> = alt_titles
        .iter()
        .map(|t| t.as_ref())
        .filter(|t| !t.trim().is_empty())
        .collect();
    if alts.is_empty() {
        return items.to_vec();
    }

    let mut kept: Vec<ScoredItem<'_>> = items
        .iter()
        .map(|item| ScoredItem {
            item,
            relevance: score(&item.title, &alts),
        })
        .filter(|s| is_relevant(s.relevance))
        .collect();

    // sort_by is stable.
    kept.sort_by(|a, b| {
        b.relevance
            .total_cmp(&a.relevance)
            .then_with(|| b.item.seeders.cmp(&a.item.seeders))
            .then_with(|| b.item.downloads.cmp(&a.item.downloads))
    });

    debug!(
        total = items.len(),
        kept = kept.len(),
        "Ranked feed items by title relevance"
    );

    kept.into_iter().map(|s| s.item.clone()).collect()
}
