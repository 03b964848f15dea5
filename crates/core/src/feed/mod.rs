//! Torrent feed abstraction.
//!
//! This module provides a `Feed` trait for running free-text queries against
//! a torrent-indexing feed, plus the nyaa.si RSS implementation.

mod nyaa;
mod rss;
mod types;

pub use nyaa::NyaaClient;
pub use rss::parse_rss;
pub use types::*;
