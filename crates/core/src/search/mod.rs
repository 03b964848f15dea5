//! Episode search over a torrent feed.
//!
//! Builds feed queries from a [`SearchRequest`], ranks the results by title
//! relevance and falls back to alternate titles when the primary query
//! comes up short.

mod fallback;
mod query;

use serde::{Deserialize, Serialize};

pub use fallback::{search_once, search_with_fallback, MIN_RESULTS};
pub use query::{build_query, is_likely_cjk};

/// Parameters for one episode search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Title used for the primary query.
    pub primary_title: String,
    /// Known names of the media (romanized, English, native). Used both for
    /// relevance ranking and as fallback queries.
    #[serde(default)]
    pub alt_titles: Vec<String>,
    /// Episode number; 0 means unspecified.
    #[serde(default)]
    pub episode: u32,
    /// Quality descriptor appended to queries, e.g. "1080p". May be empty.
    #[serde(default)]
    pub quality: String,
}
