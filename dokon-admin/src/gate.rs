//! Access gate
//!
//! One-shot check of the startup chat id against the remote user store.
//! The outcome is terminal for the session: there are no automatic
//! retries, and re-entering the gate requires a full restart.

use dokon_client::{CatalogApi, ClientError};
use shared::models::UserAccount;

/// Terminal outcome of the access check
#[derive(Debug)]
pub enum AccessState {
    /// Lookup succeeded and the record is confirmed
    Authorized(UserAccount),
    /// Lookup succeeded but the record fails the status check, or there
    /// is no record for this chat id
    Unauthorized { reason: String },
    /// The lookup call itself failed; distinct from `Unauthorized` so the
    /// shell can offer a retry affordance instead of a terminal denial
    Failed(ClientError),
}

impl AccessState {
    pub fn is_authorized(&self) -> bool {
        matches!(self, AccessState::Authorized(_))
    }
}

/// Run the one-shot access check
pub async fn check(api: &dyn CatalogApi, chat_id: &str) -> AccessState {
    match api.find_user_by_chat_id(chat_id).await {
        Ok(user) if user.is_confirmed() => {
            tracing::info!(%chat_id, user = %user.id, "access granted");
            AccessState::Authorized(user)
        }
        Ok(user) => {
            tracing::warn!(%chat_id, status = ?user.status, "access denied");
            AccessState::Unauthorized {
                reason: format!("user status is {:?}", user.status),
            }
        }
        // A domain-level "no such user" answer means the id is unknown,
        // not that the gate itself broke.
        Err(err @ (ClientError::Api { .. } | ClientError::NotFound(_))) => {
            tracing::warn!(%chat_id, error = %err, "no confirmed record for chat id");
            AccessState::Unauthorized {
                reason: err.user_message(),
            }
        }
        Err(err) => {
            tracing::error!(%chat_id, error = %err, "access check failed");
            AccessState::Failed(err)
        }
    }
}
