//! Configuration for the news sentiment service.

use std::time::Duration;

/// Upstream API constants.
pub mod api {
    use std::time::Duration;

    /// NewsAPI "everything" search endpoint.
    pub const NEWS_API_URL: &str = "https://newsapi.org/v2/everything";

    /// Default credential value shipped in deployment templates.
    ///
    /// A key equal to this is treated as not configured.
    pub const PLACEHOLDER_API_KEY: &str = "sua_chave_aqui";

    /// Language filter for search results (Portuguese).
    pub const LANGUAGE: &str = "pt";

    /// Number of articles requested per search.
    pub const PAGE_SIZE: u32 = 20;

    /// Sort order, most recent first.
    pub const SORT_BY: &str = "publishedAt";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
}

/// HTTP server defaults.
pub mod server {
    /// Bind address.
    pub const HOST: &str = "0.0.0.0";

    /// Bind port.
    pub const PORT: u16 = 8000;

    /// Minimum length of the search term, in characters.
    pub const MIN_QUERY_LEN: usize = 2;
}

/// Service configuration.
#[derive(Clone)]
pub struct Config {
    /// NewsAPI key. `None` when unset, blank or left at the placeholder.
    pub api_key: Option<String>,

    /// Search endpoint URL (overridable for mock servers).
    pub news_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a new configuration from a raw credential value.
    ///
    /// Blank keys and the placeholder key are normalized to `None`.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: normalize_api_key(api_key),
            news_api_url: api::NEWS_API_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            news_api_url: format!("{}/v2/everything", base_url.trim_end_matches('/')),
            request_timeout: Duration::from_secs(2),
            connect_timeout: Duration::from_secs(1),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `NEWS_API_KEY` and, when set, `NEWS_API_URL`.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("NEWS_API_KEY").ok();
        let mut config = Self::new(api_key);
        if let Ok(url) = std::env::var("NEWS_API_URL") {
            url::Url::parse(&url)?;
            config.news_api_url = url;
        }
        Ok(config)
    }

    /// Replace the search endpoint URL.
    #[must_use]
    pub fn with_news_api_url(mut self, url: impl Into<String>) -> Self {
        self.news_api_url = url.into();
        self
    }

    /// Check if a usable API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("has_api_key", &self.has_api_key())
            .field("news_api_url", &self.news_api_url)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

fn normalize_api_key(api_key: Option<String>) -> Option<String> {
    api_key
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty() && key != api::PLACEHOLDER_API_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert!(!config.has_api_key());
        assert_eq!(config.news_api_url, api::NEWS_API_URL);
    }

    #[test]
    fn test_config_with_api_key() {
        let config = Config::new(Some("test-key".to_string()));
        assert!(config.has_api_key());
        assert_eq!(config.api_key, Some("test-key".to_string()));
    }

    #[test]
    fn test_placeholder_key_is_unconfigured() {
        let config = Config::new(Some(api::PLACEHOLDER_API_KEY.to_string()));
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_blank_key_is_unconfigured() {
        assert!(!Config::new(Some(String::new())).has_api_key());
        assert!(!Config::new(Some("   ".to_string())).has_api_key());
    }

    #[test]
    fn test_for_testing_url() {
        let config = Config::for_testing("http://127.0.0.1:9999/");
        assert_eq!(config.news_api_url, "http://127.0.0.1:9999/v2/everything");
        assert!(config.has_api_key());
    }
}
