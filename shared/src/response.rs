//! API Response envelope
//!
//! Every backend endpoint answers with the same shape:
//!
//! ```json
//! {
//!     "success": true,
//!     "message": "OK",
//!     "code": 200,
//!     "data": { ... }
//! }
//! ```
//!
//! `success: false` is a domain-level failure and must be kept distinct
//! from transport-level failures (the request never producing a parsable
//! envelope at all).

use serde::{Deserialize, Serialize};

/// Unified backend response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded at the domain level
    pub success: bool,
    /// Human-readable message (error text when `success` is false)
    #[serde(default)]
    pub message: String,
    /// Optional numeric code, mirrors HTTP status on some deployments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    /// Response payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: "OK".to_string(),
            code: None,
            data: Some(data),
        }
    }

    /// Create a domain-level failure response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            code: None,
            data: None,
        }
    }

    /// Attach a numeric code
    pub fn with_code(mut self, code: i32) -> Self {
        self.code = Some(code);
        self
    }
}
