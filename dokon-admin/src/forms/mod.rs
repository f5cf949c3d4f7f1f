//! Entity form state
//!
//! In-memory drafts for categories and products (with nested variant
//! drafts). Validation failures are raised before any network call;
//! submissions report exactly which write calls were made.

mod category;
mod product;
mod variant;

pub use category::CategoryForm;
pub use product::{
    ProductForm, ProductFormTab, ProductSubmitOutcome, VariantSyncFailure, VariantSyncReport,
};
pub use variant::{VariantDraftState, VariantEditor, VariantFields};

use dokon_client::ClientError;
use thiserror::Error;

/// Client-side validation failure; never reaches the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("category name is required")]
    MissingCategoryName,

    #[error("product name is required")]
    MissingProductName,

    #[error("product needs at least one variant")]
    NoVariants,

    #[error("variant name is required")]
    MissingVariantName,

    #[error("variant image is required")]
    MissingVariantImage,
}

/// Submission failure: either caught before dispatch or returned by a call
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] FormError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl SubmitError {
    /// Message suitable for a notification
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(e) => e.to_string(),
            SubmitError::Client(e) => e.user_message(),
        }
    }
}
