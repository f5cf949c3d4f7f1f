//! Dokon Admin - headless admin core for the catalog dashboard
//!
//! Owns everything between the rendering shell and the backend: the
//! chat-id access gate, the category/product tree navigator, entity form
//! state with variant draft tracking, transient notifications with a
//! confirmation gate for destructive calls, and the root controller that
//! ties them together.

pub mod app;
pub mod config;
pub mod forms;
pub mod gate;
pub mod navigator;
pub mod notify;
pub mod prefs;

pub use app::AdminApp;
pub use config::AdminConfig;
pub use forms::{
    CategoryForm, FormError, ProductForm, ProductFormTab, ProductSubmitOutcome, SubmitError,
    VariantDraftState, VariantEditor, VariantFields, VariantSyncReport,
};
pub use gate::AccessState;
pub use navigator::{Crumb, NodeView, TreeNavigator};
pub use notify::{ConfirmationGate, Notification, Notifier, PendingAction, Severity};
pub use prefs::{PreferenceStore, Preferences, Theme};
