//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network, timeout, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered `success: false`
    #[error("API error: {message}")]
    Api { message: String, code: Option<i32> },

    /// Response arrived but did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required (401)
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected by the server (400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server-side failure (5xx and everything else)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Domain-level failure: the request reached the backend and the
    /// backend said no. Everything else is a transport-level failure.
    pub fn is_domain(&self) -> bool {
        matches!(self, ClientError::Api { .. })
    }

    /// Message suitable for surfacing in a notification
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
