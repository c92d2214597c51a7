//! Lexicon-based polarity scoring.
//!
//! Each token found in the polarity lexicon yields one assessment. An
//! intensifier directly before a scored word scales it; a negation within
//! [`NEGATION_WINDOW`] tokens before a scored word flips and halves it.
//! The polarity is the mean of all assessments.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::SentimentClassifier;

/// Letter runs, keeping inner apostrophes and hyphens ("don't", "bem-vindo").
/// Input is normalized first, so accented letters are single code points
/// and apostrophes are ASCII.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}+(?:['-]\p{L}+)*").expect("valid token pattern"));

/// Tokens after a negation during which it still applies.
pub const NEGATION_WINDOW: usize = 3;

/// Multiplier applied to a negated assessment.
pub const NEGATION_FACTOR: f64 = -0.5;

/// Word polarities, English and Portuguese.
const POLARITY: &[(&str, f64)] = &[
    // English, positive
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("happy", 0.8),
    ("win", 0.8),
    ("wins", 0.8),
    ("won", 0.6),
    ("success", 0.5),
    ("successful", 0.75),
    ("strong", 0.43),
    ("positive", 0.23),
    ("growth", 0.3),
    ("love", 0.5),
    ("amazing", 0.6),
    ("wonderful", 1.0),
    ("beautiful", 0.85),
    ("safe", 0.5),
    ("hope", 0.3),
    ("record", 0.2),
    // English, negative
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("poor", -0.4),
    ("sad", -0.5),
    ("crisis", -0.5),
    ("war", -0.6),
    ("death", -0.6),
    ("dead", -0.6),
    ("attack", -0.5),
    ("fail", -0.5),
    ("fails", -0.5),
    ("failure", -0.6),
    ("loss", -0.4),
    ("losses", -0.4),
    ("fear", -0.5),
    ("scandal", -0.6),
    ("fraud", -0.6),
    ("negative", -0.3),
    ("disaster", -0.8),
    ("collapse", -0.6),
    ("weak", -0.4),
    // Portuguese, positive
    ("bom", 0.7),
    ("boa", 0.7),
    ("bons", 0.7),
    ("boas", 0.7),
    ("ótimo", 0.8),
    ("ótima", 0.8),
    ("excelente", 1.0),
    ("melhor", 0.5),
    ("melhores", 0.5),
    ("feliz", 0.8),
    ("alegria", 0.8),
    ("vence", 0.5),
    ("vencem", 0.5),
    ("venceu", 0.5),
    ("vitória", 0.6),
    ("vitórias", 0.6),
    ("sucesso", 0.6),
    ("conquista", 0.5),
    ("recorde", 0.3),
    ("cresce", 0.4),
    ("crescimento", 0.4),
    ("lucro", 0.4),
    ("avanço", 0.4),
    ("avança", 0.4),
    ("positivo", 0.5),
    ("positiva", 0.5),
    ("seguro", 0.3),
    ("segura", 0.3),
    ("recupera", 0.3),
    ("recuperação", 0.3),
    ("elogia", 0.5),
    ("aprova", 0.3),
    ("celebra", 0.6),
    ("comemora", 0.6),
    ("incrível", 0.9),
    ("esperança", 0.5),
    ("forte", 0.4),
    ("fortes", 0.4),
    ("ganha", 0.4),
    ("amor", 0.5),
    // Portuguese, negative
    ("ruim", -0.7),
    ("ruins", -0.7),
    ("péssimo", -1.0),
    ("péssima", -1.0),
    ("pior", -0.7),
    ("piores", -0.7),
    ("crise", -0.6),
    ("morte", -0.7),
    ("mortes", -0.7),
    ("morre", -0.7),
    ("morrem", -0.7),
    ("mortos", -0.7),
    ("tragédia", -0.9),
    ("ataque", -0.6),
    ("ataques", -0.6),
    ("guerra", -0.7),
    ("queda", -0.4),
    ("cai", -0.3),
    ("caem", -0.3),
    ("perde", -0.4),
    ("perdem", -0.4),
    ("derrota", -0.6),
    ("fracasso", -0.8),
    ("prejuízo", -0.5),
    ("violência", -0.7),
    ("crime", -0.6),
    ("crimes", -0.6),
    ("medo", -0.6),
    ("risco", -0.3),
    ("alerta", -0.2),
    ("grave", -0.5),
    ("graves", -0.5),
    ("negativo", -0.5),
    ("negativa", -0.5),
    ("triste", -0.8),
    ("polêmica", -0.3),
    ("escândalo", -0.7),
    ("corrupção", -0.7),
    ("fraude", -0.7),
    ("desemprego", -0.5),
    ("acidente", -0.6),
    ("desastre", -0.9),
    ("ameaça", -0.5),
    ("preso", -0.4),
    ("presos", -0.4),
    ("condenado", -0.5),
    ("denúncia", -0.4),
];

/// Multipliers for the word that follows.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("highly", 1.3),
    ("muito", 1.3),
    ("muita", 1.3),
    ("bastante", 1.2),
    ("extremamente", 1.5),
    ("super", 1.4),
    ("tão", 1.2),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "nor", "without", "don't", "doesn't", "didn't", "isn't", "wasn't",
    "aren't", "can't", "won't", "não", "nao", "nunca", "nem", "jamais", "sem",
];

/// Polarity classifier backed by a static word lexicon.
#[derive(Debug, Clone)]
pub struct LexiconClassifier {
    polarity: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl LexiconClassifier {
    /// Create a classifier with the built-in lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self {
            polarity: POLARITY.iter().map(|&(w, p)| (w.to_string(), p)).collect(),
            intensifiers: INTENSIFIERS.iter().map(|&(w, f)| (w.to_string(), f)).collect(),
            negations: NEGATIONS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Add or override a word's polarity (clamped to [-1.0, 1.0]).
    #[must_use]
    pub fn with_word(mut self, word: &str, polarity: f64) -> Self {
        self.polarity.insert(normalize(word), polarity.clamp(-1.0, 1.0));
        self
    }

    /// Per-word assessments for `text`, in reading order.
    #[must_use]
    pub fn assessments(&self, text: &str) -> Vec<f64> {
        let lowered = normalize(text);
        let mut scores = Vec::new();
        let mut intensity: Option<f64> = None;
        let mut negation_window = 0usize;

        for token in TOKEN.find_iter(&lowered).map(|m| m.as_str()) {
            if self.negations.contains(token) {
                negation_window = NEGATION_WINDOW;
                intensity = None;
                continue;
            }
            if let Some(&factor) = self.intensifiers.get(token) {
                intensity = Some(factor);
                continue;
            }
            if let Some(&polarity) = self.polarity.get(token) {
                let mut score = polarity * intensity.unwrap_or(1.0);
                if negation_window > 0 {
                    score *= NEGATION_FACTOR;
                }
                scores.push(score.clamp(-1.0, 1.0));
                intensity = None;
                negation_window = 0;
                continue;
            }
            intensity = None;
            negation_window = negation_window.saturating_sub(1);
        }

        scores
    }
}

/// NFC-compose, lowercase and fold typographic apostrophes to ASCII.
fn normalize(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase().replace('\u{2019}', "'")
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentClassifier for LexiconClassifier {
    fn polarity(&self, text: &str) -> f64 {
        let scores = self.assessments(text);
        if scores.is_empty() {
            return 0.0;
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}
