//! Input models for the HTTP query string.

use serde::{Deserialize, Serialize};

use crate::config::server::MIN_QUERY_LEN;
use crate::error::{AnalyzeError, AnalyzeResult};

/// Query parameters for `GET /analyze`.
///
/// `q` is optional at the parsing stage so a missing term is reported
/// through the same validation error as a short one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeQuery {
    /// Search term (e.g. "Tesla", "Brasil").
    #[serde(default)]
    pub q: Option<String>,
}

impl AnalyzeQuery {
    /// Return the search term if present and long enough.
    pub fn validate(&self) -> AnalyzeResult<&str> {
        let term = self
            .q
            .as_deref()
            .ok_or_else(|| AnalyzeError::validation("q", "field required"))?;
        validate_term(term)?;
        Ok(term)
    }
}

/// Check the minimum length of a search term, counted in characters.
pub fn validate_term(term: &str) -> AnalyzeResult<()> {
    if term.chars().count() < MIN_QUERY_LEN {
        return Err(AnalyzeError::validation(
            "q",
            format!("must have at least {MIN_QUERY_LEN} characters"),
        ));
    }
    Ok(())
}
