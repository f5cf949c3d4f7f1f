// Shared in-memory test double for the catalog API.
//
// Records every call so tests can assert exactly which writes a flow
// issued, and serves fixture data from plain maps. Failure modes are
// toggled per concern: user lookup, listing fetches, variant writes.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use dokon_client::{CatalogApi, ClientError, ClientResult};
use shared::models::{
    Category, CategoryCreate, CategoryStatus, CategoryUpdate, DiscountType, Product,
    ProductCreate, ProductStatus, ProductUpdate, ProductVariant, UploadedFile, UserAccount,
    UserStatus, VariantCreate, VariantUpdate,
};

/// One recorded API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FindUser(String),
    ListRoot,
    ListChildren(String),
    HasChildren(String),
    CreateCategory,
    UpdateCategory(String),
    DeleteCategory(String),
    ListProducts(String),
    CreateProduct,
    UpdateProduct(String),
    ChangeProductStatus(String),
    DeleteProduct(String),
    AddVariant { product_id: String, name: String },
    UpdateVariant(String),
    DeleteVariant(String),
    UploadFile(String),
}

/// Configured outcome of the user lookup
#[derive(Debug, Clone, Default)]
pub enum UserLookup {
    Found(UserAccount),
    #[default]
    NotFound,
    TransportDown,
}

#[derive(Default)]
pub struct MockCatalogApi {
    pub calls: Mutex<Vec<Call>>,
    pub user: Mutex<UserLookup>,
    pub root_categories: Mutex<Vec<Category>>,
    /// parent id -> child categories
    pub children: Mutex<HashMap<String, Vec<Category>>>,
    /// category id -> products
    pub products: Mutex<HashMap<String, Vec<Product>>>,
    /// every listing fetch fails while set
    pub fail_listing: Mutex<bool>,
    /// add-variant fails for these variant names
    pub fail_add_variant: Mutex<Vec<String>>,
    /// update-variant fails for these variant ids
    pub fail_update_variant: Mutex<Vec<String>>,
}

impl MockCatalogApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Calls that mutate backend state (everything except lookups)
    pub fn write_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| {
                !matches!(
                    c,
                    Call::FindUser(_)
                        | Call::ListRoot
                        | Call::ListChildren(_)
                        | Call::HasChildren(_)
                        | Call::ListProducts(_)
                )
            })
            .collect()
    }

    fn listing_guard(&self) -> ClientResult<()> {
        if *self.fail_listing.lock().unwrap() {
            return Err(ClientError::Internal("mock backend down".into()));
        }
        Ok(())
    }
}

// ========== Fixture builders ==========

pub fn confirmed_user(chat_id: i64) -> UserAccount {
    UserAccount {
        id: "u1".into(),
        firstname: "Aziz".into(),
        lastname: "Karimov".into(),
        username: "aziz".into(),
        chat_id,
        status: UserStatus::Confirmed,
        category_id: None,
        exists: None,
    }
}

pub fn pending_user(chat_id: i64) -> UserAccount {
    UserAccount {
        status: UserStatus::Pending,
        ..confirmed_user(chat_id)
    }
}

pub fn category(id: &str, name: &str, order_index: i32) -> Category {
    Category {
        id: id.into(),
        name_uz: name.into(),
        name_uz_cyrillic: String::new(),
        name_ru: String::new(),
        name_en: String::new(),
        order_index,
        status: CategoryStatus::Open,
        parent_id: None,
    }
}

pub fn product(id: &str, name: &str, order_index: i32, price: i64) -> Product {
    Product {
        id: id.into(),
        name_uz: name.into(),
        name_uz_cyrillic: String::new(),
        name_ru: String::new(),
        name_en: String::new(),
        description_uz: String::new(),
        description_uz_cyrillic: String::new(),
        description_ru: String::new(),
        description_en: String::new(),
        price,
        stock: 5,
        image_url: "https://cdn.dokon.uz/p.jpg".into(),
        category_id: "c1".into(),
        status: ProductStatus::Open,
        discount_type: DiscountType::None,
        discount_value: None,
        discount_start_at: None,
        discount_end_at: None,
        order_index,
        seller_chat_id: None,
        created_at: None,
        updated_at: None,
        variants: Vec::new(),
    }
}

pub fn variant(id: &str, name: &str, price: i64) -> ProductVariant {
    ProductVariant {
        id: id.into(),
        name_uz: name.into(),
        name_uz_cyrillic: String::new(),
        name_ru: String::new(),
        name_en: String::new(),
        price,
        stock: 3,
        image_url: "https://cdn.dokon.uz/v.jpg".into(),
        img_name: Some("v.jpg".into()),
        img_size: Some(1024),
    }
}

#[async_trait]
impl CatalogApi for MockCatalogApi {
    async fn find_user_by_chat_id(&self, chat_id: &str) -> ClientResult<UserAccount> {
        self.record(Call::FindUser(chat_id.to_string()));
        match &*self.user.lock().unwrap() {
            UserLookup::Found(user) => Ok(user.clone()),
            UserLookup::NotFound => Err(ClientError::Api {
                message: "User not found".into(),
                code: Some(404),
            }),
            UserLookup::TransportDown => {
                Err(ClientError::Internal("connection refused".into()))
            }
        }
    }

    async fn list_root_categories(&self) -> ClientResult<Vec<Category>> {
        self.record(Call::ListRoot);
        self.listing_guard()?;
        Ok(self.root_categories.lock().unwrap().clone())
    }

    async fn list_child_categories(&self, parent_id: &str) -> ClientResult<Vec<Category>> {
        self.record(Call::ListChildren(parent_id.to_string()));
        self.listing_guard()?;
        Ok(self
            .children
            .lock()
            .unwrap()
            .get(parent_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn has_children(&self, id: &str) -> ClientResult<bool> {
        self.record(Call::HasChildren(id.to_string()));
        self.listing_guard()?;
        Ok(self
            .children
            .lock()
            .unwrap()
            .get(id)
            .is_some_and(|c| !c.is_empty()))
    }

    async fn create_category(&self, draft: &CategoryCreate) -> ClientResult<Category> {
        self.record(Call::CreateCategory);
        Ok(Category {
            id: "cat-new".into(),
            name_uz: draft.name_uz.clone(),
            name_uz_cyrillic: draft.name_uz_cyrillic.clone(),
            name_ru: draft.name_ru.clone(),
            name_en: draft.name_en.clone(),
            order_index: draft.order_index,
            status: CategoryStatus::Open,
            parent_id: draft.parent_id.clone(),
        })
    }

    async fn update_category(&self, id: &str, draft: &CategoryUpdate) -> ClientResult<Category> {
        self.record(Call::UpdateCategory(id.to_string()));
        Ok(Category {
            id: id.into(),
            name_uz: draft.name_uz.clone(),
            name_uz_cyrillic: draft.name_uz_cyrillic.clone(),
            name_ru: draft.name_ru.clone(),
            name_en: draft.name_en.clone(),
            order_index: draft.order_index,
            status: draft.status,
            parent_id: draft.parent_id.clone(),
        })
    }

    async fn delete_category(&self, id: &str) -> ClientResult<bool> {
        self.record(Call::DeleteCategory(id.to_string()));
        Ok(true)
    }

    async fn list_products_by_category(&self, category_id: &str) -> ClientResult<Vec<Product>> {
        self.record(Call::ListProducts(category_id.to_string()));
        self.listing_guard()?;
        Ok(self
            .products
            .lock()
            .unwrap()
            .get(category_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_product(&self, draft: &ProductCreate) -> ClientResult<Product> {
        self.record(Call::CreateProduct);
        let mut created = product("p-new", &draft.name_uz, draft.order_index, draft.price);
        created.category_id = draft.category_id.clone();
        created.status = draft.status;
        Ok(created)
    }

    async fn update_product(&self, id: &str, draft: &ProductUpdate) -> ClientResult<Product> {
        self.record(Call::UpdateProduct(id.to_string()));
        let mut updated = product(id, &draft.name_uz, draft.order_index, draft.price);
        updated.status = draft.status;
        Ok(updated)
    }

    async fn change_product_status(
        &self,
        id: &str,
        status: ProductStatus,
    ) -> ClientResult<Product> {
        self.record(Call::ChangeProductStatus(id.to_string()));
        let mut changed = product(id, "mock", 1, 0);
        changed.status = status;
        Ok(changed)
    }

    async fn delete_product(&self, id: &str) -> ClientResult<bool> {
        self.record(Call::DeleteProduct(id.to_string()));
        Ok(true)
    }

    async fn add_product_variant(&self, draft: &VariantCreate) -> ClientResult<ProductVariant> {
        self.record(Call::AddVariant {
            product_id: draft.product_id.clone(),
            name: draft.name_uz.clone(),
        });
        if self
            .fail_add_variant
            .lock()
            .unwrap()
            .contains(&draft.name_uz)
        {
            return Err(ClientError::Api {
                message: format!("cannot add variant {}", draft.name_uz),
                code: Some(422),
            });
        }
        Ok(variant("v-new", &draft.name_uz, draft.price))
    }

    async fn update_product_variant(
        &self,
        id: &str,
        draft: &VariantUpdate,
    ) -> ClientResult<ProductVariant> {
        self.record(Call::UpdateVariant(id.to_string()));
        if self.fail_update_variant.lock().unwrap().contains(&id.to_string()) {
            return Err(ClientError::Api {
                message: format!("cannot update variant {id}"),
                code: Some(422),
            });
        }
        Ok(variant(id, &draft.name_uz, draft.price))
    }

    async fn delete_product_variant(&self, id: &str) -> ClientResult<bool> {
        self.record(Call::DeleteVariant(id.to_string()));
        Ok(true)
    }

    async fn upload_file(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        _mime: &str,
    ) -> ClientResult<UploadedFile> {
        self.record(Call::UploadFile(filename.to_string()));
        Ok(UploadedFile {
            url: format!("https://cdn.dokon.uz/{filename}"),
            name: filename.to_string(),
            size: bytes.len() as i64,
        })
    }
}
