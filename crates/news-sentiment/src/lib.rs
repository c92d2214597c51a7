//! News Sentiment API
//!
//! An HTTP service that searches a news API for a term and scores the
//! sentiment of every returned headline.
//!
//! # Features
//!
//! - **One route**: `GET /analyze?q=<term>` returns headlines with a polarity
//!   score and a `Positive` / `Negative` / `Neutral` label
//! - **Injectable capabilities**: the news source and the classifier are traits
//! - **Lexicon classifier**: English and Portuguese word polarities with
//!   intensifiers and negation
//!
//! # Example
//!
//! ```no_run
//! use news_sentiment::{Config, NewsSentimentAnalyzer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let analyzer = NewsSentimentAnalyzer::from_config(config)?;
//!
//!     let response = analyzer.analyze("Brasil").await?;
//!     println!("{} articles", response.articles_found);
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod sentiment;
pub mod server;

pub use analyzer::NewsSentimentAnalyzer;
pub use client::{NewsApiClient, NewsSource};
pub use config::Config;
pub use error::{AnalyzeError, ClientError};
pub use sentiment::{LexiconClassifier, SentimentClassifier};
