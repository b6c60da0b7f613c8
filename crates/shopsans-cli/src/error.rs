//! Error types for the ShopSans CLI
//!
//! Errors are user-facing. API failures render the human-readable reason
//! extracted from the response body when there is one, falling back to the
//! generic status message.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Back-office API request failed
    #[error("{}", .0.reason())]
    Api(#[from] shopsans_api::ApiError),

    /// Invalid argument or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON rendering failed
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
