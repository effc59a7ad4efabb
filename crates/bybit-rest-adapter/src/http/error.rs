/*
[INPUT]:  Error sources (transport, serialization, URL, headers, environment)
[OUTPUT]: Structured error types with retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Bybit adapter
#[derive(Error, Debug)]
pub enum BybitError {
    /// HTTP transport failed (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request params could not be serialized to JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A header value could not be encoded
    #[error("Invalid header {name}: {message}")]
    InvalidHeader { name: &'static str, message: String },

    /// A required environment variable is missing
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

impl BybitError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            BybitError::Http(err) => err.is_timeout() || err.is_connect(),
            _ => false,
        }
    }

    /// Get retry delay in seconds (if retryable)
    pub fn retry_delay(&self) -> Option<u64> {
        match self {
            BybitError::Http(err) if err.is_timeout() => Some(1),
            _ => None,
        }
    }

    /// Check if error stems from local setup rather than the network
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            BybitError::UrlParse(_)
                | BybitError::InvalidHeader { .. }
                | BybitError::MissingEnvVar(_)
        )
    }
}

/// Result type alias for Bybit operations
pub type Result<T> = std::result::Result<T, BybitError>;
