//! Network implementation of the catalog API

use async_trait::async_trait;

use crate::api::CatalogApi;
use crate::http::HttpClient;
use crate::{ClientConfig, ClientResult};
use shared::models::{
    Category, CategoryCreate, CategoryUpdate, Product, ProductCreate, ProductStatus, ProductUpdate,
    ProductVariant, UploadedFile, UserAccount, VariantCreate, VariantUpdate,
};

/// Catalog client backed by the remote REST API
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: HttpClient,
}

impl CatalogClient {
    /// Create a client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = HttpClient::new(config)?;
        Ok(Self { http })
    }

    /// Backend base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn find_user_by_chat_id(&self, chat_id: &str) -> ClientResult<UserAccount> {
        self.http
            .get(&format!("api/user/find-by-chat-id?chat_id={chat_id}"))
            .await
    }

    async fn list_root_categories(&self) -> ClientResult<Vec<Category>> {
        self.http.get("api/category").await
    }

    async fn list_child_categories(&self, parent_id: &str) -> ClientResult<Vec<Category>> {
        self.http
            .get(&format!("api/category/{parent_id}/children"))
            .await
    }

    async fn has_children(&self, id: &str) -> ClientResult<bool> {
        self.http.get(&format!("api/category/{id}/has-children")).await
    }

    async fn create_category(&self, draft: &CategoryCreate) -> ClientResult<Category> {
        tracing::debug!(name = %draft.name_uz, "creating category");
        self.http.post("api/category", draft).await
    }

    async fn update_category(&self, id: &str, draft: &CategoryUpdate) -> ClientResult<Category> {
        tracing::debug!(%id, "updating category");
        self.http.put(&format!("api/category/edit/{id}"), draft).await
    }

    async fn delete_category(&self, id: &str) -> ClientResult<bool> {
        tracing::debug!(%id, "deleting category");
        self.http.delete(&format!("api/category/delete/{id}")).await
    }

    async fn list_products_by_category(&self, category_id: &str) -> ClientResult<Vec<Product>> {
        self.http
            .get(&format!("api/product/products-by-category-id/{category_id}"))
            .await
    }

    async fn create_product(&self, draft: &ProductCreate) -> ClientResult<Product> {
        tracing::debug!(name = %draft.name_uz, category = %draft.category_id, "creating product");
        self.http.post("api/product", draft).await
    }

    async fn update_product(&self, id: &str, draft: &ProductUpdate) -> ClientResult<Product> {
        tracing::debug!(%id, "updating product");
        self.http.put(&format!("api/product/update/{id}"), draft).await
    }

    async fn change_product_status(
        &self,
        id: &str,
        status: ProductStatus,
    ) -> ClientResult<Product> {
        self.http
            .put_empty(&format!(
                "api/product/change-product-status/{id}?status={}",
                status.as_str()
            ))
            .await
    }

    async fn delete_product(&self, id: &str) -> ClientResult<bool> {
        tracing::debug!(%id, "deleting product");
        self.http
            .put_empty(&format!("api/product/delete-product/{id}"))
            .await
    }

    async fn add_product_variant(&self, draft: &VariantCreate) -> ClientResult<ProductVariant> {
        tracing::debug!(product = %draft.product_id, name = %draft.name_uz, "adding variant");
        self.http.post("api/product/add-product-type", draft).await
    }

    async fn update_product_variant(
        &self,
        id: &str,
        draft: &VariantUpdate,
    ) -> ClientResult<ProductVariant> {
        tracing::debug!(%id, "updating variant");
        self.http
            .put(&format!("api/product/update-product-type/{id}"), draft)
            .await
    }

    async fn delete_product_variant(&self, id: &str) -> ClientResult<bool> {
        tracing::debug!(%id, "deleting variant");
        self.http
            .delete(&format!("api/product/product-type/{id}"))
            .await
    }

    async fn upload_file(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        mime: &str,
    ) -> ClientResult<UploadedFile> {
        tracing::debug!(%filename, size = bytes.len(), "uploading file");
        self.http
            .post_multipart("api/file/upload-file", bytes, filename, mime)
            .await
    }
}
