//! User Account Model

use serde::{Deserialize, Serialize};

/// Registration status of an admin user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Confirmed,
    Pending,
    Rejected,
}

/// Admin user record, looked up once by Telegram chat id at startup
///
/// Held read-only for the whole session; never refreshed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub username: String,
    pub chat_id: i64,
    pub status: UserStatus,
    #[serde(default)]
    pub category_id: Option<String>,
    /// Identifier-only deployments answer with a bare existence flag
    #[serde(default)]
    pub exists: Option<bool>,
}

impl UserAccount {
    /// Whether this record passes the access check
    pub fn is_confirmed(&self) -> bool {
        self.status == UserStatus::Confirmed || self.exists == Some(true)
    }
}
