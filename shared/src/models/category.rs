//! Category Model

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Category visibility status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryStatus {
    Open,
    Closed,
}

/// Category entity
///
/// Categories form a forest: root categories have `parent_id = None`, and
/// any category may own further child categories. A category with no
/// children is a leaf and acts as a product container; that distinction is
/// never stored on the entity itself and must be re-derived per navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name_uz: String,
    pub name_uz_cyrillic: String,
    pub name_ru: String,
    pub name_en: String,
    pub order_index: i32,
    pub status: CategoryStatus,
    pub parent_id: Option<String>,
}

impl Category {
    /// Name in the given locale, falling back to the source locale when the
    /// requested one is empty.
    pub fn localized_name(&self, locale: Locale) -> &str {
        let name = match locale {
            Locale::Uz => &self.name_uz,
            Locale::UzCyrillic => &self.name_uz_cyrillic,
            Locale::Ru => &self.name_ru,
            Locale::En => &self.name_en,
        };
        if name.is_empty() { &self.name_uz } else { name }
    }
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreate {
    pub name_uz: String,
    pub name_uz_cyrillic: String,
    pub name_ru: String,
    pub name_en: String,
    pub order_index: i32,
    pub parent_id: Option<String>,
}

/// Update category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub name_uz: String,
    pub name_uz_cyrillic: String,
    pub name_ru: String,
    pub name_en: String,
    pub order_index: i32,
    pub parent_id: Option<String>,
    pub status: CategoryStatus,
}
