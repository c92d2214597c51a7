//! Data models for the news search API and the analysis response.
//!
//! Upstream models use `#[serde(default)]` and `camelCase` renames to match
//! NewsAPI naming; response models serialize in `snake_case`.

mod analysis;
mod article;
mod inputs;

pub use analysis::{AnalysisResponse, AnalyzedArticle, Sentiment};
pub use article::{ArticleSource, NewsApiErrorBody, NewsApiResponse, RawArticle};
pub use inputs::{AnalyzeQuery, validate_term};
