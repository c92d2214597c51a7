//! Upstream article records as returned by NewsAPI.

use serde::{Deserialize, Serialize};

/// Search response envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiResponse {
    /// "ok" on success.
    #[serde(default)]
    pub status: Option<String>,

    /// Total hits reported by the upstream (not the page size).
    #[serde(default)]
    pub total_results: Option<u64>,

    /// Article records, in upstream order. Absent or `null` means none.
    #[serde(default)]
    pub articles: Option<Vec<RawArticle>>,
}

impl NewsApiResponse {
    /// Take the article list, treating a missing key as empty.
    #[must_use]
    pub fn into_articles(self) -> Vec<RawArticle> {
        self.articles.unwrap_or_default()
    }
}

/// Error body NewsAPI sends with non-2xx statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsApiErrorBody {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl NewsApiErrorBody {
    /// Render as `code: message`, skipping whichever part is missing.
    #[must_use]
    pub fn describe(&self) -> Option<String> {
        match (self.code.as_deref(), self.message.as_deref()) {
            (Some(code), Some(message)) => Some(format!("{code}: {message}")),
            (None, Some(message)) => Some(message.to_string()),
            (Some(code), None) => Some(code.to_string()),
            (None, None) => None,
        }
    }
}

/// Publisher of an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A single article as returned by the upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    #[serde(default)]
    pub source: Option<ArticleSource>,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub published_at: Option<String>,
}

impl RawArticle {
    /// Title, if present and non-empty.
    #[must_use]
    pub fn headline(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Source name, empty when the upstream omits it.
    #[must_use]
    pub fn source_name(&self) -> &str {
        self.source.as_ref().and_then(|s| s.name.as_deref()).unwrap_or_default()
    }
}
