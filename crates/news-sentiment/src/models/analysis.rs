//! Response models for the analyze endpoint.

use serde::{Deserialize, Serialize};

/// Three-way sentiment label derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

/// An article enriched with the sentiment of its headline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedArticle {
    /// Headline text.
    pub title: String,

    /// Author, when the upstream provides one.
    pub author: Option<String>,

    /// Publisher name.
    pub source_name: String,

    /// Link to the article.
    pub url: String,

    /// Label for `polarity`.
    pub sentiment: Sentiment,

    /// Headline polarity in [-1.0, 1.0].
    pub polarity: f64,
}

/// Result of analyzing one search term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// The search term, echoed back.
    pub search_term: String,

    /// Number of analyzed articles; always `articles.len()`.
    pub articles_found: usize,

    /// Analyzed articles in upstream order.
    pub articles: Vec<AnalyzedArticle>,
}

impl AnalysisResponse {
    /// Build a response, deriving the count from the list.
    #[must_use]
    pub fn new(search_term: impl Into<String>, articles: Vec<AnalyzedArticle>) -> Self {
        Self { search_term: search_term.into(), articles_found: articles.len(), articles }
    }

    /// Number of articles carrying `sentiment`.
    #[must_use]
    pub fn count(&self, sentiment: Sentiment) -> usize {
        self.articles.iter().filter(|a| a.sentiment == sentiment).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_serializes_as_label() {
        assert_eq!(serde_json::to_value(Sentiment::Positive).unwrap(), "Positive");
        assert_eq!(serde_json::to_value(Sentiment::Negative).unwrap(), "Negative");
        assert_eq!(serde_json::to_value(Sentiment::Neutral).unwrap(), "Neutral");
        assert_eq!(Sentiment::Neutral.to_string(), "Neutral");
    }

    #[test]
    fn test_response_shape() {
        let response = AnalysisResponse::new(
            "Brasil",
            vec![AnalyzedArticle {
                title: "t".to_string(),
                author: None,
                source_name: "G1".to_string(),
                url: "http://g1.com/1".to_string(),
                sentiment: Sentiment::Neutral,
                polarity: 0.0,
            }],
        );
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["search_term"], "Brasil");
        assert_eq!(json["articles_found"], 1);
        assert!(json["articles"][0]["author"].is_null());
        assert_eq!(json["articles"][0]["source_name"], "G1");
        assert_eq!(json["articles"][0]["sentiment"], "Neutral");
        assert_eq!(response.count(Sentiment::Neutral), 1);
        assert_eq!(response.count(Sentiment::Positive), 0);
    }
}
