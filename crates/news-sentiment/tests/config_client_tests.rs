//! Configuration and client tests.
//!
//! Tests actual behavior, not constants.

use news_sentiment::client::NewsApiClient;
use news_sentiment::config::{Config, api};

// =============================================================================
// Config Behavior Tests
// =============================================================================

#[test]
fn test_config_default_has_no_api_key() {
    let config = Config::default();
    assert!(!config.has_api_key());
}

#[test]
fn test_config_with_api_key() {
    let config = Config::new(Some("test-key".to_string()));
    assert!(config.has_api_key());
    assert_eq!(config.api_key.as_deref(), Some("test-key"));
}

#[test]
fn test_config_placeholder_is_not_a_key() {
    let config = Config::new(Some(api::PLACEHOLDER_API_KEY.to_string()));
    assert!(!config.has_api_key());
    assert!(config.api_key.is_none());
}

#[test]
fn test_config_trims_key() {
    let config = Config::new(Some("  abc123 \n".to_string()));
    assert_eq!(config.api_key.as_deref(), Some("abc123"));
}

#[test]
fn test_config_debug_hides_api_key() {
    let config = Config::new(Some("super-secret-key".to_string()));
    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret-key"));
    assert!(debug.contains("has_api_key"));
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_creation_succeeds() {
    let client = NewsApiClient::new(Config::default());
    assert!(client.is_ok());
}

#[test]
fn test_client_rejects_invalid_url() {
    let config = Config::default().with_news_api_url("not a url");
    assert!(NewsApiClient::new(config).is_err());
}

#[test]
fn test_client_reports_api_key_status() {
    let client = NewsApiClient::new(Config::new(Some("key".to_string()))).unwrap();
    assert!(client.has_api_key());

    let client_no_key = NewsApiClient::new(Config::default()).unwrap();
    assert!(!client_no_key.has_api_key());
}

#[test]
fn test_client_debug_hides_api_key() {
    let client = NewsApiClient::new(Config::new(Some("super-secret-key".to_string()))).unwrap();
    let debug = format!("{client:?}");
    assert!(!debug.contains("super-secret-key"));
    assert!(debug.contains("has_api_key"));
}

#[test]
fn test_client_debug_shows_configured_endpoint() {
    let client = NewsApiClient::new(Config::for_testing("http://127.0.0.1:9")).unwrap();
    assert!(format!("{client:?}").contains("http://127.0.0.1:9/v2/everything"));
}
