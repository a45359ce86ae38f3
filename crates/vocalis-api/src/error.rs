//! Internal error types for the HTTP adapter.
//!
//! These errors never leave the crate; they are mapped to
//! `GenerationError` at the port boundary in `port.rs`.

use thiserror::Error;

/// Result type alias for adapter operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised while talking to the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success HTTP status.
    #[error("API request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// The URL that was requested.
        url: String,
    },

    /// The backend answered with a body the adapter cannot use.
    #[error("Invalid response from API: {message}")]
    InvalidResponse {
        /// Description of what was invalid.
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL construction error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status carried by the error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend answered 404 for the requested resource.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::RequestFailed { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_reports_status_and_url() {
        let error = ApiError::RequestFailed {
            status: 500,
            url: "https://api.example/generate".to_string(),
        };
        assert!(error.to_string().contains("500"));
        assert_eq!(error.status(), Some(500));
        assert!(!error.is_not_found());
    }

    #[test]
    fn not_found_is_recognised() {
        let error = ApiError::RequestFailed {
            status: 404,
            url: "https://api.example/history?id=h1".to_string(),
        };
        assert!(error.is_not_found());
    }
}
