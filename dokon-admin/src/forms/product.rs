//! Product form state
//!
//! A product draft owns its variant drafts. Submission writes the base
//! record first, then syncs the tagged variants one call at a time; the
//! per-variant outcomes are collected into a [`VariantSyncReport`] so
//! partial success is reported precisely. There is no compensating
//! transaction: a failed variant call leaves the earlier calls committed
//! server-side, and the form stays open for the user to reconcile.

use chrono::{DateTime, Utc};
use dokon_client::{CatalogApi, ClientError, TranslationSet};
use shared::models::{
    DiscountType, Product, ProductCreate, ProductStatus, ProductUpdate,
};

use super::variant::{VariantDraftState, VariantEditor};
use super::{FormError, SubmitError};

/// Active tab of the product form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductFormTab {
    #[default]
    Uz,
    Ru,
    En,
    Variants,
}

/// One failed variant write
#[derive(Debug)]
pub struct VariantSyncFailure {
    /// Source-locale variant name, for the notification text
    pub name: String,
    pub error: ClientError,
}

/// Outcome of the per-variant write loop
#[derive(Debug, Default)]
pub struct VariantSyncReport {
    pub added: usize,
    pub updated: usize,
    pub failures: Vec<VariantSyncFailure>,
}

impl VariantSyncReport {
    /// Every issued call succeeded
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total write calls issued for variants
    pub fn calls_issued(&self) -> usize {
        self.added + self.updated + self.failures.len()
    }
}

/// Result of a product submission
#[derive(Debug)]
pub struct ProductSubmitOutcome {
    pub product: Product,
    pub report: VariantSyncReport,
}

/// Draft of a product being created or edited
#[derive(Debug)]
pub struct ProductForm {
    id: Option<String>,
    pub name_uz: String,
    pub name_uz_cyrillic: String,
    pub name_ru: String,
    pub name_en: String,
    pub description_uz: String,
    pub description_uz_cyrillic: String,
    pub description_ru: String,
    pub description_en: String,
    pub price: i64,
    pub stock: i32,
    pub image_url: String,
    pub status: ProductStatus,
    pub discount_type: DiscountType,
    pub discount_value: Option<i64>,
    pub discount_start_at: Option<DateTime<Utc>>,
    pub discount_end_at: Option<DateTime<Utc>>,
    pub order_index: i32,
    category_id: String,
    variants: Vec<VariantDraftState>,
    pub editor: VariantEditor,
    pub active_tab: ProductFormTab,
}

impl ProductForm {
    /// Open a create form for a product in the given leaf category
    pub fn create(category_id: impl Into<String>) -> Self {
        Self {
            id: None,
            name_uz: String::new(),
            name_uz_cyrillic: String::new(),
            name_ru: String::new(),
            name_en: String::new(),
            description_uz: String::new(),
            description_uz_cyrillic: String::new(),
            description_ru: String::new(),
            description_en: String::new(),
            price: 0,
            stock: 0,
            image_url: String::new(),
            status: ProductStatus::Open,
            discount_type: DiscountType::None,
            discount_value: None,
            discount_start_at: None,
            discount_end_at: None,
            order_index: 1,
            category_id: category_id.into(),
            variants: Vec::new(),
            editor: VariantEditor::new(),
            active_tab: ProductFormTab::Uz,
        }
    }

    /// Open an edit form; persisted variants start `Unchanged`
    pub fn edit(product: &Product) -> Self {
        Self {
            id: Some(product.id.clone()),
            name_uz: product.name_uz.clone(),
            name_uz_cyrillic: product.name_uz_cyrillic.clone(),
            name_ru: product.name_ru.clone(),
            name_en: product.name_en.clone(),
            description_uz: product.description_uz.clone(),
            description_uz_cyrillic: product.description_uz_cyrillic.clone(),
            description_ru: product.description_ru.clone(),
            description_en: product.description_en.clone(),
            price: product.price,
            stock: product.stock,
            image_url: product.image_url.clone(),
            status: product.status,
            discount_type: product.discount_type,
            discount_value: product.discount_value,
            discount_start_at: product.discount_start_at,
            discount_end_at: product.discount_end_at,
            order_index: product.order_index,
            category_id: product.category_id.clone(),
            variants: product
                .variants
                .iter()
                .cloned()
                .map(VariantDraftState::Unchanged)
                .collect(),
            editor: VariantEditor::new(),
            active_tab: ProductFormTab::Uz,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    pub fn variants(&self) -> &[VariantDraftState] {
        &self.variants
    }

    /// Commit the editor slot into the draft list
    pub fn save_variant_slot(&mut self) -> Result<(), FormError> {
        self.editor.add_or_update(&mut self.variants)
    }

    /// Load a committed draft into the editor slot
    pub fn edit_variant(&mut self, index: usize) {
        if let Some(draft) = self.variants.get(index) {
            let draft = draft.clone();
            self.editor.begin_edit(index, &draft);
        }
    }

    /// Drop a locally-new draft; persisted variants are deleted through
    /// the confirmation gate and [`Self::remove_persisted`] instead.
    pub fn remove_new_variant(&mut self, index: usize) {
        if matches!(self.variants.get(index), Some(VariantDraftState::New(_))) {
            self.variants.remove(index);
        }
    }

    /// Drop the draft for a variant that was just deleted server-side
    pub fn remove_persisted(&mut self, variant_id: &str) {
        self.variants.retain(|v| v.id() != Some(variant_id));
    }

    /// Merge assist translations into the draft
    ///
    /// A provided translation wins over the current field value; absent
    /// ones leave the field untouched. Assist failure therefore changes
    /// nothing.
    pub fn apply_translations(&mut self, set: &TranslationSet) {
        if let Some(name) = &set.cyr.name {
            self.name_uz_cyrillic = name.clone();
        }
        if let Some(desc) = &set.cyr.description {
            self.description_uz_cyrillic = desc.clone();
        }
        if let Some(name) = &set.ru.name {
            self.name_ru = name.clone();
        }
        if let Some(desc) = &set.ru.description {
            self.description_ru = desc.clone();
        }
        if let Some(name) = &set.en.name {
            self.name_en = name.clone();
        }
        if let Some(desc) = &set.en.description {
            self.description_en = desc.clone();
        }
    }

    fn validate(&mut self) -> Result<(), FormError> {
        if self.name_uz.trim().is_empty() {
            return Err(FormError::MissingProductName);
        }
        if self.variants.is_empty() {
            // Point the user at the list they need to fill.
            self.active_tab = ProductFormTab::Variants;
            return Err(FormError::NoVariants);
        }
        Ok(())
    }

    fn to_create(&self) -> ProductCreate {
        ProductCreate {
            name_uz: self.name_uz.clone(),
            name_uz_cyrillic: self.name_uz_cyrillic.clone(),
            name_ru: self.name_ru.clone(),
            name_en: self.name_en.clone(),
            description_uz: self.description_uz.clone(),
            description_uz_cyrillic: self.description_uz_cyrillic.clone(),
            description_ru: self.description_ru.clone(),
            description_en: self.description_en.clone(),
            price: self.price,
            stock: self.stock,
            image_url: self.image_url.clone(),
            category_id: self.category_id.clone(),
            status: self.status,
            discount_type: self.discount_type,
            discount_value: self.discount_value,
            discount_start_at: self.discount_start_at,
            discount_end_at: self.discount_end_at,
            order_index: self.order_index,
        }
    }

    fn to_update(&self) -> ProductUpdate {
        ProductUpdate {
            name_uz: self.name_uz.clone(),
            name_uz_cyrillic: self.name_uz_cyrillic.clone(),
            name_ru: self.name_ru.clone(),
            name_en: self.name_en.clone(),
            description_uz: self.description_uz.clone(),
            description_uz_cyrillic: self.description_uz_cyrillic.clone(),
            description_ru: self.description_ru.clone(),
            description_en: self.description_en.clone(),
            price: self.price,
            stock: self.stock,
            image_url: self.image_url.clone(),
            status: self.status,
            discount_type: self.discount_type,
            discount_value: self.discount_value,
            discount_start_at: self.discount_start_at,
            discount_end_at: self.discount_end_at,
            order_index: self.order_index,
        }
    }

    /// Submit the draft.
    ///
    /// Writes the base record (POST on create, PUT on edit; variants are
    /// never embedded), then syncs variant drafts sequentially: `New` via
    /// add-variant with the resolved product id, `Modified` via
    /// update-variant, `Unchanged` not at all. A base-record failure
    /// aborts before any variant call; variant failures are collected in
    /// the report while the loop keeps going.
    pub async fn submit(
        &mut self,
        api: &dyn CatalogApi,
    ) -> Result<ProductSubmitOutcome, SubmitError> {
        self.validate()?;

        let product = match &self.id {
            Some(id) => api.update_product(id, &self.to_update()).await?,
            None => api.create_product(&self.to_create()).await?,
        };

        let mut report = VariantSyncReport::default();
        for draft in &self.variants {
            match draft {
                VariantDraftState::Unchanged(_) => {}
                VariantDraftState::New(fields) => {
                    match api.add_product_variant(&fields.to_create(&product.id)).await {
                        Ok(_) => report.added += 1,
                        Err(error) => report.failures.push(VariantSyncFailure {
                            name: fields.name_uz.clone(),
                            error,
                        }),
                    }
                }
                VariantDraftState::Modified { id, fields } => {
                    match api.update_product_variant(id, &fields.to_update()).await {
                        Ok(_) => report.updated += 1,
                        Err(error) => report.failures.push(VariantSyncFailure {
                            name: fields.name_uz.clone(),
                            error,
                        }),
                    }
                }
            }
        }

        if !report.is_clean() {
            tracing::warn!(
                product = %product.id,
                failed = report.failures.len(),
                "variant sync partially failed, earlier writes remain committed"
            );
        }

        Ok(ProductSubmitOutcome { product, report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_variant_list_switches_tab_and_rejects() {
        let mut form = ProductForm::create("c1");
        form.name_uz = "Futbolka".into();
        assert_eq!(form.validate(), Err(FormError::NoVariants));
        assert_eq!(form.active_tab, ProductFormTab::Variants);
    }

    #[test]
    fn missing_name_rejected_before_variant_check() {
        let mut form = ProductForm::create("c1");
        assert_eq!(form.validate(), Err(FormError::MissingProductName));
        assert_eq!(form.active_tab, ProductFormTab::Uz);
    }

    #[test]
    fn translations_overwrite_only_provided_fields() {
        let mut form = ProductForm::create("c1");
        form.name_ru = "старое".into();
        form.description_en = "keep me".into();

        let set: TranslationSet = serde_json::from_str(
            r#"{"cyr": {"name": "Футболка"}, "ru": {"name": "Футболка"}, "en": {}}"#,
        )
        .unwrap();
        form.apply_translations(&set);

        assert_eq!(form.name_uz_cyrillic, "Футболка");
        assert_eq!(form.name_ru, "Футболка");
        assert_eq!(form.description_en, "keep me");
        assert!(form.name_en.is_empty());
    }

    #[test]
    fn remove_new_variant_ignores_persisted_entries() {
        let product = sample_product();
        let mut form = ProductForm::edit(&product);
        assert_eq!(form.variants().len(), 1);
        form.remove_new_variant(0);
        assert_eq!(form.variants().len(), 1, "persisted draft must stay");
        form.remove_persisted("v1");
        assert!(form.variants().is_empty());
    }

    fn sample_product() -> Product {
        use shared::models::ProductVariant;
        Product {
            id: "p1".into(),
            name_uz: "Futbolka".into(),
            name_uz_cyrillic: String::new(),
            name_ru: String::new(),
            name_en: String::new(),
            description_uz: String::new(),
            description_uz_cyrillic: String::new(),
            description_ru: String::new(),
            description_en: String::new(),
            price: 1000,
            stock: 2,
            image_url: String::new(),
            category_id: "c1".into(),
            status: ProductStatus::Open,
            discount_type: DiscountType::None,
            discount_value: None,
            discount_start_at: None,
            discount_end_at: None,
            order_index: 1,
            seller_chat_id: None,
            created_at: None,
            updated_at: None,
            variants: vec![ProductVariant {
                id: "v1".into(),
                name_uz: "M".into(),
                name_uz_cyrillic: String::new(),
                name_ru: String::new(),
                name_en: String::new(),
                price: 1000,
                stock: 2,
                image_url: "https://cdn/m.jpg".into(),
                img_name: None,
                img_size: None,
            }],
        }
    }
}
