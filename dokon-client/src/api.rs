//! Catalog API surface
//!
//! The full backend contract behind one trait so the admin core can be
//! driven against the network client or an in-memory double.

use async_trait::async_trait;

use crate::ClientResult;
use shared::models::{
    Category, CategoryCreate, CategoryUpdate, Product, ProductCreate, ProductStatus, ProductUpdate,
    ProductVariant, UploadedFile, UserAccount, VariantCreate, VariantUpdate,
};

/// Catalog backend operations
#[async_trait]
pub trait CatalogApi: Send + Sync {
    // ========== User ==========

    /// Look up the admin user record for a Telegram chat id
    async fn find_user_by_chat_id(&self, chat_id: &str) -> ClientResult<UserAccount>;

    // ========== Categories ==========

    /// Root categories (`parent_id = null`)
    async fn list_root_categories(&self) -> ClientResult<Vec<Category>>;

    /// Direct children of a category
    async fn list_child_categories(&self, parent_id: &str) -> ClientResult<Vec<Category>>;

    /// Whether a category currently has child categories
    async fn has_children(&self, id: &str) -> ClientResult<bool>;

    async fn create_category(&self, draft: &CategoryCreate) -> ClientResult<Category>;

    async fn update_category(&self, id: &str, draft: &CategoryUpdate) -> ClientResult<Category>;

    async fn delete_category(&self, id: &str) -> ClientResult<bool>;

    // ========== Products ==========

    /// Products owned by a leaf category
    async fn list_products_by_category(&self, category_id: &str) -> ClientResult<Vec<Product>>;

    async fn create_product(&self, draft: &ProductCreate) -> ClientResult<Product>;

    async fn update_product(&self, id: &str, draft: &ProductUpdate) -> ClientResult<Product>;

    async fn change_product_status(
        &self,
        id: &str,
        status: ProductStatus,
    ) -> ClientResult<Product>;

    /// Soft delete (the backend models this as a PUT)
    async fn delete_product(&self, id: &str) -> ClientResult<bool>;

    // ========== Product variants ==========

    /// Attach a new variant to an existing product
    async fn add_product_variant(&self, draft: &VariantCreate) -> ClientResult<ProductVariant>;

    /// Update a variant; the variant id alone addresses it
    async fn update_product_variant(
        &self,
        id: &str,
        draft: &VariantUpdate,
    ) -> ClientResult<ProductVariant>;

    async fn delete_product_variant(&self, id: &str) -> ClientResult<bool>;

    // ========== Files ==========

    /// Upload raw file bytes, receiving the stored location back
    async fn upload_file(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        mime: &str,
    ) -> ClientResult<UploadedFile>;
}
