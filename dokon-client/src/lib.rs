//! Dokon Client - HTTP client for the catalog backend
//!
//! Provides the typed REST surface the admin core drives: user lookup,
//! category/product/variant CRUD, file upload, and the optional
//! translation assist. All endpoints answer with the unified
//! `ApiResponse` envelope; this crate normalizes transport failures,
//! domain failures (`success: false`) and payload extraction behind
//! [`ClientError`].

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod translate;

pub use api::CatalogApi;
pub use client::CatalogClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use translate::{TranslatedField, TranslationAssist, TranslationSet};

// Re-export shared types for convenience
pub use shared::ApiResponse;
pub use shared::models::{
    Category, CategoryCreate, CategoryUpdate, DiscountType, Product, ProductCreate, ProductStatus,
    ProductUpdate, ProductVariant, UploadedFile, UserAccount, UserStatus, VariantCreate,
    VariantUpdate,
};
