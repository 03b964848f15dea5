pub mod config;
pub mod feed;
pub mod matcher;
pub mod search;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, FeedConfig,
    SearchConfig, DEFAULT_FEED_URL,
};
pub use feed::{parse_rss, Feed, FeedItem, NyaaClient, SearchError};
pub use matcher::{rank, score, tokenize, TitleZones, MATCH_THRESHOLD};
pub use search::{
    build_query, is_likely_cjk, search_once, search_with_fallback, SearchRequest, MIN_RESULTS,
};
