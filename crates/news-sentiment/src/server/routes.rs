//! Route handlers and error translation.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::analyzer::NewsSentimentAnalyzer;
use crate::error::AnalyzeError;
use crate::models::{AnalysisResponse, AnalyzeQuery};

/// Welcome text served at `/`.
pub const WELCOME_MESSAGE: &str =
    "Welcome to the News Sentiment Analysis API! Use GET /analyze?q=<term> to analyze headlines.";

/// Create the HTTP router.
pub fn create_router(analyzer: Arc<NewsSentimentAnalyzer>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/analyze", get(analyze))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(analyzer)
}

async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": WELCOME_MESSAGE }))
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn analyze(
    State(analyzer): State<Arc<NewsSentimentAnalyzer>>,
    query: Result<Query<AnalyzeQuery>, QueryRejection>,
) -> Result<Json<AnalysisResponse>, AnalyzeError> {
    let Query(query) =
        query.map_err(|rejection| AnalyzeError::validation("q", rejection.body_text()))?;
    let term = query.validate()?;
    analyzer.analyze(term).await.map(Json)
}

impl AnalyzeError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Misconfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::Validation { .. } => {}
            Self::Misconfigured(_) => {
                tracing::warn!(status = status.as_u16(), error = %self, "Analyze request rejected");
            }
            Self::UpstreamUnavailable(cause) => {
                tracing::error!(
                    status = status.as_u16(),
                    upstream_status = ?cause.status(),
                    error = %self,
                    "News search failed"
                );
            }
        }
        (status, Json(serde_json::json!({ "detail": self.to_user_message() }))).into_response()
    }
}
