//! Search-and-classify pipeline behind `GET /analyze`.

use std::sync::Arc;

use crate::client::{NewsApiClient, NewsSource};
use crate::config::Config;
use crate::error::AnalyzeResult;
use crate::models::{AnalysisResponse, AnalyzedArticle, RawArticle, validate_term};
use crate::sentiment::{LexiconClassifier, SentimentClassifier};

/// Fetches articles for a term and scores their headlines.
#[derive(Clone)]
pub struct NewsSentimentAnalyzer {
    source: Arc<dyn NewsSource>,
    classifier: Arc<dyn SentimentClassifier>,
}

impl NewsSentimentAnalyzer {
    /// Create an analyzer from explicit capabilities.
    #[must_use]
    pub fn new(source: Arc<dyn NewsSource>, classifier: Arc<dyn SentimentClassifier>) -> Self {
        Self { source, classifier }
    }

    /// Create an analyzer backed by NewsAPI and the built-in lexicon.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let client = NewsApiClient::new(config)?;
        Ok(Self::new(Arc::new(client), Arc::new(LexiconClassifier::new())))
    }

    /// Search for `term` and classify each headline.
    ///
    /// Records without a title are dropped; the rest keep upstream order.
    ///
    /// # Errors
    ///
    /// - `Validation` if `term` is shorter than two characters
    /// - `Misconfigured` if no API key is set (nothing is sent upstream)
    /// - `UpstreamUnavailable` on any transport, status or parse failure
    pub async fn analyze(&self, term: &str) -> AnalyzeResult<AnalysisResponse> {
        validate_term(term)?;

        let raw = self.source.search(term).await?;
        let fetched = raw.len();

        let articles: Vec<AnalyzedArticle> =
            raw.into_iter().filter_map(|article| self.analyze_article(article)).collect();

        tracing::info!(
            term,
            fetched,
            analyzed = articles.len(),
            "Analyzed news sentiment"
        );

        Ok(AnalysisResponse::new(term, articles))
    }

    /// Classify one record, or `None` if it has no title.
    fn analyze_article(&self, article: RawArticle) -> Option<AnalyzedArticle> {
        let (sentiment, polarity) = self.classifier.classify(article.headline()?);
        let source_name = article.source_name().to_string();

        Some(AnalyzedArticle {
            title: article.title.unwrap_or_default(),
            author: article.author,
            source_name,
            url: article.url.unwrap_or_default(),
            sentiment,
            polarity,
        })
    }
}

impl std::fmt::Debug for NewsSentimentAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsSentimentAnalyzer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::error::{AnalyzeError, ClientError, ClientResult};
    use crate::models::{ArticleSource, Sentiment};

    struct FakeSource {
        articles: Vec<RawArticle>,
        calls: AtomicUsize,
    }

    impl FakeSource {
        fn new(articles: Vec<RawArticle>) -> Arc<Self> {
            Arc::new(Self { articles, calls: AtomicUsize::new(0) })
        }
    }

    #[async_trait]
    impl NewsSource for FakeSource {
        async fn search(&self, _term: &str) -> ClientResult<Vec<RawArticle>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.articles.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl NewsSource for FailingSource {
        async fn search(&self, _term: &str) -> ClientResult<Vec<RawArticle>> {
            Err(ClientError::from_status(502, "bad gateway"))
        }
    }

    /// Scores every text by its length: long titles positive, short negative.
    struct LengthClassifier;

    impl SentimentClassifier for LengthClassifier {
        fn polarity(&self, text: &str) -> f64 {
            if text.len() > 5 { 0.5 } else { -0.5 }
        }
    }

    fn article(title: Option<&str>) -> RawArticle {
        RawArticle {
            source: Some(ArticleSource { id: None, name: Some("G1".to_string()) }),
            author: None,
            title: title.map(str::to_string),
            url: Some("http://g1.com".to_string()),
            ..RawArticle::default()
        }
    }

    fn analyzer(source: Arc<dyn NewsSource>) -> NewsSentimentAnalyzer {
        NewsSentimentAnalyzer::new(source, Arc::new(LengthClassifier))
    }

    #[tokio::test]
    async fn test_filters_untitled_records_and_keeps_order() {
        let source = FakeSource::new(vec![
            article(None),
            article(Some("long title")),
            article(Some("")),
            article(Some("tiny")),
            article(None),
        ]);
        let response = analyzer(source.clone()).analyze("Brasil").await.unwrap();

        assert_eq!(response.search_term, "Brasil");
        assert_eq!(response.articles_found, 2);
        assert_eq!(response.articles.len(), 2);
        assert_eq!(response.articles[0].title, "long title");
        assert_eq!(response.articles[0].sentiment, Sentiment::Positive);
        assert_eq!(response.articles[1].title, "tiny");
        assert_eq!(response.articles[1].sentiment, Sentiment::Negative);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_upstream() {
        let response = analyzer(FakeSource::new(vec![])).analyze("Brasil").await.unwrap();
        assert_eq!(response.articles_found, 0);
        assert!(response.articles.is_empty());
    }

    #[tokio::test]
    async fn test_short_term_never_reaches_source() {
        let source = FakeSource::new(vec![article(Some("long title"))]);
        let result = analyzer(source.clone()).analyze("a").await;
        assert!(matches!(result, Err(AnalyzeError::Validation { .. })));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_source_failure_is_upstream_unavailable() {
        let result = analyzer(Arc::new(FailingSource)).analyze("Brasil").await;
        match result {
            Err(AnalyzeError::UpstreamUnavailable(cause)) => {
                assert!(cause.to_string().contains("bad gateway"));
            }
            other => panic!("expected UpstreamUnavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_fields_default() {
        let source = FakeSource::new(vec![RawArticle {
            title: Some("long title".to_string()),
            ..RawArticle::default()
        }]);
        let response = analyzer(source).analyze("Brasil").await.unwrap();
        let first = &response.articles[0];
        assert_eq!(first.source_name, "");
        assert_eq!(first.url, "");
        assert!(first.author.is_none());
    }
}
