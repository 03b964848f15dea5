//! Types for the torrent feed boundary.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Public trackers appended to every generated magnet link.
const MAGNET_TRACKERS: [&str; 5] = [
    "udp://tracker.opentrackr.org:1337/announce",
    "udp://open.demonii.com:1337/announce",
    "udp://tracker.torrent.eu.org:451/announce",
    "udp://tracker-udp.gbitt.info:80/announce",
    "udp://exodus.desync.com:6969/announce",
];

/// A single release as decoded from the feed.
///
/// Items are never mutated after decoding; ranking and deduplication only
/// reorder and drop them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Free-text release title.
    pub title: String,
    /// Download link (usually the .torrent file).
    #[serde(default)]
    pub link: String,
    /// Details page on the indexer.
    #[serde(default)]
    pub guid: String,
    /// Publish date as reported by the feed (RFC 2822).
    #[serde(default)]
    pub pub_date: String,
    /// Category label as reported by the feed.
    #[serde(default)]
    pub category: String,
    /// Human-readable size, e.g. "1.2 GiB".
    #[serde(default)]
    pub size: String,
    pub seeders: u32,
    #[serde(default)]
    pub leechers: u32,
    pub downloads: u32,
    /// Info hash. Used as the deduplication key across queries.
    /// Empty string if unknown.
    #[serde(default)]
    pub info_hash: String,
    /// Raw trusted flag ("Yes"/"No").
    #[serde(default)]
    pub trusted: String,
    /// Raw remake flag ("Yes"/"No").
    #[serde(default)]
    pub remake: String,
}

impl FeedItem {
    /// Parse the publish date, if present and well formed.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc2822(self.pub_date.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Whether the uploader is marked trusted by the indexer.
    pub fn is_trusted(&self) -> bool {
        matches!(
            self.trusted.trim().to_lowercase().as_str(),
            "yes" | "true" | "1"
        )
    }

    /// Build a magnet link from the info hash and title.
    ///
    /// Returns an empty string when the info hash is unknown.
    pub fn magnet_uri(&self) -> String {
        let hash = self.info_hash.trim();
        if hash.is_empty() {
            return String::new();
        }

        let title = self.title.trim();
        let display_name = if title.is_empty() { hash } else { title };

        let mut uri = format!(
            "magnet:?xt=urn:btih:{}&dn={}",
            urlencoding::encode(hash),
            urlencoding::encode(display_name)
        );
        for tracker in MAGNET_TRACKERS {
            uri.push_str("&tr=");
            uri.push_str(&urlencoding::encode(tracker));
        }
        uri
    }

    /// Compact one-line summary of the swarm health and size.
    pub fn summary(&self) -> String {
        format!(
            "S:{} | L:{} | {} | Trusted: {}",
            self.seeders,
            self.leechers,
            self.size,
            if self.is_trusted() { "Yes" } else { "No" }
        )
    }
}

/// Errors that can occur while querying the feed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search query is empty")]
    EmptyQuery,

    #[error("Feed connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Feed API error: {0}")]
    ApiError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Failed to decode feed: {0}")]
    Parse(String),

    #[error("Search cancelled")]
    Cancelled,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SearchError {
    /// Whether this error must abort a multi-query search instead of
    /// just skipping the query that produced it.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SearchError::Cancelled)
    }
}

/// Trait for torrent feed transports.
#[async_trait]
pub trait Feed: Send + Sync {
    /// Transport name for logging.
    fn name(&self) -> &str;

    /// Run one free-text query against the feed.
    async fn fetch(&self, query: &str) -> Result<Vec<FeedItem>, SearchError>;
}
