//! Errors from the character API layer

use thiserror::Error;

/// Errors from fetching the character collection
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint returned a non-2xx status code.
    #[error("Character API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The body was not a character page.
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured endpoint is not an absolute http(s) URL.
    #[error("Invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

impl ApiError {
    /// HTTP status for status failures
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<ApiError> for cdex_core::Error {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidEndpoint { url, reason } => {
                cdex_core::Error::invalid_endpoint(url, reason)
            }
            other => cdex_core::Error::fetch(other.to_string()),
        }
    }
}
