//! Error types for the back-office API client
//!
//! Failing HTTP statuses become [`ApiError::Api`] with the numeric status and
//! whatever could be salvaged from the response body. Everything the
//! transport layer reports — unreachable host, connection reset, or a success
//! response whose body does not decode — passes through as
//! [`ApiError::Http`] without further classification.

use serde_json::Value;
use thiserror::Error;

/// Result type alias for API client operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Error type for API client operations
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-success status code.
    ///
    /// `details` holds the response body when it could be read: parsed JSON
    /// if the response declared `application/json`, raw text otherwise. A
    /// body that cannot be read or parsed is dropped and `details` is `None`;
    /// the status is reported either way.
    #[error("API {status}")]
    Api {
        status: u16,
        details: Option<ErrorDetails>,
    },

    /// Transport failure, or a success response whose body failed to decode
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Best-effort capture of a failing response's body
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetails {
    /// Body parsed from a JSON response
    Json(Value),
    /// Body read verbatim from a non-JSON response
    Text(String),
}

impl ErrorDetails {
    /// Extract a human-readable message, if the body carries one.
    ///
    /// The backend reports failures as `{"error": "..."}`; non-JSON bodies
    /// are returned as-is. An empty body carries no message.
    pub fn message(&self) -> Option<&str> {
        match self {
            ErrorDetails::Json(value) => value.get("error").and_then(Value::as_str),
            ErrorDetails::Text(text) => (!text.is_empty()).then_some(text.as_str()),
        }
    }
}

impl ApiError {
    /// Create an API error for a failing status
    pub fn api(status: u16, details: Option<ErrorDetails>) -> Self {
        Self::Api { status, details }
    }

    /// HTTP status code, when the server produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Http(_) => None,
        }
    }

    /// Body details of a failing response, when extraction succeeded
    pub fn details(&self) -> Option<&ErrorDetails> {
        match self {
            ApiError::Api { details, .. } => details.as_ref(),
            ApiError::Http(_) => None,
        }
    }

    /// Human-readable failure reason for display.
    ///
    /// Prefers the message carried in the response body and falls back to
    /// the generic `API <status>` form, the same way the back-office pages
    /// render failures.
    pub fn reason(&self) -> String {
        match self {
            ApiError::Api { details, .. } => details
                .as_ref()
                .and_then(ErrorDetails::message)
                .map(str::to_string)
                .unwrap_or_else(|| self.to_string()),
            ApiError::Http(err) => err.to_string(),
        }
    }
}
