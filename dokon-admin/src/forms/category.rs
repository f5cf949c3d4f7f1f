//! Category form state

use dokon_client::CatalogApi;
use shared::models::{Category, CategoryCreate, CategoryStatus, CategoryUpdate};

use super::{FormError, SubmitError};

/// Draft of a category being created or edited
#[derive(Debug, Clone)]
pub struct CategoryForm {
    id: Option<String>,
    pub name_uz: String,
    pub name_uz_cyrillic: String,
    pub name_ru: String,
    pub name_en: String,
    pub order_index: i32,
    pub status: CategoryStatus,
    parent_id: Option<String>,
}

impl CategoryForm {
    /// Open a create form; the parent is inherited from the navigator's
    /// current position and not editable afterwards.
    pub fn create(parent_id: Option<String>) -> Self {
        Self {
            id: None,
            name_uz: String::new(),
            name_uz_cyrillic: String::new(),
            name_ru: String::new(),
            name_en: String::new(),
            order_index: 1,
            status: CategoryStatus::Open,
            parent_id,
        }
    }

    /// Open an edit form over an existing category; keeps its parent.
    pub fn edit(category: &Category) -> Self {
        Self {
            id: Some(category.id.clone()),
            name_uz: category.name_uz.clone(),
            name_uz_cyrillic: category.name_uz_cyrillic.clone(),
            name_ru: category.name_ru.clone(),
            name_en: category.name_en.clone(),
            order_index: category.order_index,
            status: category.status,
            parent_id: category.parent_id.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    fn validate(&self) -> Result<(), FormError> {
        if self.name_uz.trim().is_empty() {
            return Err(FormError::MissingCategoryName);
        }
        Ok(())
    }

    /// Validate and dispatch create or update, depending on whether an
    /// existing id is present.
    pub async fn submit(&self, api: &dyn CatalogApi) -> Result<Category, SubmitError> {
        self.validate()?;

        let saved = match &self.id {
            Some(id) => {
                let draft = CategoryUpdate {
                    name_uz: self.name_uz.clone(),
                    name_uz_cyrillic: self.name_uz_cyrillic.clone(),
                    name_ru: self.name_ru.clone(),
                    name_en: self.name_en.clone(),
                    order_index: self.order_index,
                    parent_id: self.parent_id.clone(),
                    status: self.status,
                };
                api.update_category(id, &draft).await?
            }
            None => {
                let draft = CategoryCreate {
                    name_uz: self.name_uz.clone(),
                    name_uz_cyrillic: self.name_uz_cyrillic.clone(),
                    name_ru: self.name_ru.clone(),
                    name_en: self.name_en.clone(),
                    order_index: self.order_index,
                    parent_id: self.parent_id.clone(),
                };
                api.create_category(&draft).await?
            }
        };
        Ok(saved)
    }
}
