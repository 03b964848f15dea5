//! Testing utilities and mock implementations.
//!
//! This module provides a mock `Feed` so search behavior can be exercised
//! without network access.
//!
//! # Example
//!
//! ```rust,ignore
//! use episodic_core::testing::{fixtures, MockFeed};
//!
//! let feed = MockFeed::new();
//! feed.set_results(vec![
//!     fixtures::feed_item("[SubsPlease] Frieren - 05 (1080p)", "abc123", 40),
//! ]).await;
//! ```

mod mock_feed;

pub use mock_feed::MockFeed;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::feed::FeedItem;

    /// Create a feed item with reasonable defaults.
    pub fn feed_item(title: &str, info_hash: &str, seeders: u32) -> FeedItem {
        FeedItem {
            title: title.to_string(),
            link: format!("https://nyaa.si/download/{}.torrent", info_hash),
            guid: format!("https://nyaa.si/view/{}", info_hash),
            pub_date: "Sat, 15 Jun 2024 10:30:00 +0000".to_string(),
            category: "Anime - English-translated".to_string(),
            size: "1.4 GiB".to_string(),
            seeders,
            leechers: seeders / 4,
            downloads: seeders * 10,
            info_hash: info_hash.to_string(),
            trusted: "No".to_string(),
            remake: "No".to_string(),
        }
    }

    /// Create a typical weekly-release item: `[group] title - NN (quality) [hash]`.
    pub fn episode_release(
        group: &str,
        title: &str,
        episode: u32,
        quality: &str,
        info_hash: &str,
        seeders: u32,
    ) -> FeedItem {
        feed_item(
            &format!(
                "[{}] {} - {:02} ({}) [{}]",
                group,
                title,
                episode,
                quality,
                info_hash.to_uppercase()
            ),
            info_hash,
            seeders,
        )
    }
}
