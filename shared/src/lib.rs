//! Shared types for the Dokon catalog admin
//!
//! Wire-level data model and response envelope used by both the HTTP
//! client and the admin core.

pub mod locale;
pub mod models;
pub mod response;

// Re-exports
pub use locale::Locale;
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
