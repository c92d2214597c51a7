//! Headline sentiment classification.
//!
//! A classifier maps text to a polarity in [-1.0, 1.0]; the label is a fixed
//! function of that polarity.

mod lexicon;

pub use lexicon::LexiconClassifier;

use crate::models::Sentiment;

/// Polarity strictly above this is `Positive`.
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Polarity strictly below this is `Negative`.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

impl Sentiment {
    /// Label a polarity score. Both thresholds are `Neutral`, as is NaN.
    #[must_use]
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            Self::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// Scores the sentiment of a piece of text.
///
/// Implementations must be pure: the same text always yields the same
/// polarity, and empty text yields 0.0.
pub trait SentimentClassifier: Send + Sync {
    /// Polarity of `text` in [-1.0, 1.0].
    fn polarity(&self, text: &str) -> f64;

    /// Label and polarity of `text`.
    fn classify(&self, text: &str) -> (Sentiment, f64) {
        let polarity = self.polarity(text);
        (Sentiment::from_polarity(polarity), polarity)
    }
}
