use serde::{Deserialize, Serialize};

/// Default nyaa.si endpoint.
pub const DEFAULT_FEED_URL: &str = "https://nyaa.si/";

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Feed transport configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedConfig {
    /// Feed base URL (e.g., "https://nyaa.si/")
    #[serde(default = "default_feed_url")]
    pub url: String,
    /// Request timeout in seconds (default: 20)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    /// nyaa category filter (default: "1_2", Anime - English-translated)
    #[serde(default = "default_category")]
    pub category: String,
    /// nyaa torrent filter (default: "0", no filter)
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            timeout_secs: default_timeout(),
            category: default_category(),
            filter: default_filter(),
        }
    }
}

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_timeout() -> u32 {
    20
}

fn default_category() -> String {
    "1_2".to_string()
}

fn default_filter() -> String {
    "0".to_string()
}

/// Search defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Quality appended to queries when the caller gives none (e.g., "1080p")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_quality: Option<String>,
}
