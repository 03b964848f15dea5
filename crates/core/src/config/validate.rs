use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Feed timeout is not 0
/// - Feed URL, when set, is an http(s) URL
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.feed.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "feed.timeout_secs cannot be 0".to_string(),
        ));
    }

    // A blank URL falls back to the default endpoint.
    let url = config.feed.url.trim();
    if !url.is_empty() && !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "feed.url must start with http:// or https://, got {:?}",
            url
        )));
    }

    Ok(())
}
