//! News search API client.
//!
//! Provides the [`NewsSource`] capability and its NewsAPI implementation.
//! One request per search: no retries, no caching, no pagination.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{NewsApiErrorBody, NewsApiResponse, RawArticle};

/// Something that can search news articles by term.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch the articles matching `term`, in upstream order.
    async fn search(&self, term: &str) -> ClientResult<Vec<RawArticle>>;
}

/// NewsAPI client.
#[derive(Clone)]
pub struct NewsApiClient {
    /// HTTP client.
    client: Client,

    /// API key (optional; searches fail without it).
    api_key: Option<String>,

    /// Search endpoint URL.
    news_api_url: String,

    /// Request timeout, reported on timeout errors.
    request_timeout: std::time::Duration,
}

impl NewsApiClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint URL is invalid or HTTP client
    /// initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        url::Url::parse(&config.news_api_url)?;

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key,
            news_api_url: config.news_api_url,
            request_timeout: config.request_timeout,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Query the "everything" endpoint for `term`.
    ///
    /// Sends `language`, `pageSize` and `sortBy` fixed to [`api::LANGUAGE`],
    /// [`api::PAGE_SIZE`] and [`api::SORT_BY`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingApiKey`] without sending anything when no
    /// key is configured; otherwise any transport, status or parse failure.
    pub async fn search_everything(&self, term: &str) -> ClientResult<NewsApiResponse> {
        let api_key = self.api_key.as_deref().ok_or(ClientError::MissingApiKey)?;

        let params = [
            ("q", term.to_string()),
            ("language", api::LANGUAGE.to_string()),
            ("pageSize", api::PAGE_SIZE.to_string()),
            ("sortBy", api::SORT_BY.to_string()),
        ];

        tracing::debug!(term, url = %self.news_api_url, "Querying news API");

        let response = self
            .client
            .get(&self.news_api_url)
            .header("X-Api-Key", api_key)
            .query(&params)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let response = Self::handle_response(response).await?;
        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;

        serde_json::from_slice(&body).map_err(ClientError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<NewsApiErrorBody>(&text)
            .ok()
            .and_then(|body| body.describe())
            .unwrap_or(text);

        tracing::warn!(status = status.as_u16(), %message, "News API returned an error status");
        Err(ClientError::from_status(status.as_u16(), message))
    }

    fn transport_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.request_timeout)
        } else {
            ClientError::Http(err)
        }
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    async fn search(&self, term: &str) -> ClientResult<Vec<RawArticle>> {
        Ok(self.search_everything(term).await?.into_articles())
    }
}

impl std::fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("has_api_key", &self.has_api_key())
            .field("news_api_url", &self.news_api_url)
            .finish()
    }
}
