//! Error types for the news sentiment service.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::time::Duration;

/// Errors from the upstream HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// No usable API key; raised before any request is sent.
    #[error("News API key is not configured")]
    MissingApiKey,

    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Key rejected by the upstream (401 response)
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Error message from API
        message: String,
    },

    /// Rate limited by the upstream (429 response)
    #[error("Rate limited: {message}")]
    RateLimited {
        /// Error message from API
        message: String,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Build the error for a non-success status.
    #[must_use]
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 => Self::BadRequest { message },
            401 => Self::Unauthorized { message },
            429 => Self::RateLimited { message },
            500..=599 => Self::Server { status, message },
            _ => Self::UnexpectedStatus { status, message },
        }
    }

    /// HTTP status returned by the upstream, if the request got that far.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest { .. } => Some(400),
            Self::Unauthorized { .. } => Some(401),
            Self::RateLimited { .. } => Some(429),
            Self::Server { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Errors from the analyze operation.
#[derive(thiserror::Error, Debug)]
pub enum AnalyzeError {
    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Service cannot run with the current configuration
    #[error("Misconfigured: {0}")]
    Misconfigured(String),

    /// The upstream call failed; no partial results are returned
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(#[source] ClientError),
}

impl AnalyzeError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Convert to a user-friendly error message for the HTTP response.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Validation { field, message } => {
                format!("Invalid input for '{field}': {message}")
            }
            Self::Misconfigured(message) => message.clone(),
            Self::UpstreamUnavailable(cause) => {
                format!("Failed to connect to the news API: {cause}")
            }
        }
    }
}

impl From<ClientError> for AnalyzeError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::MissingApiKey => Self::Misconfigured(
                "The news API key is not configured in the environment variables.".to_string(),
            ),
            other => Self::UpstreamUnavailable(other),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for analyze operations.
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;
