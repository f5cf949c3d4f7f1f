//! Product and Product Variant Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Product lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    Open,
    Closed,
    Deleted,
}

impl ProductStatus {
    /// Wire spelling, used when the status travels as a query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Open => "OPEN",
            ProductStatus::Closed => "CLOSED",
            ProductStatus::Deleted => "DELETED",
        }
    }
}

/// Discount kind applied to a product's base price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    None,
    Percent,
    Fixed,
}

/// Product entity
///
/// Belongs to exactly one leaf category. Prices are in the smallest
/// currency unit (so'm), kept integral.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
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
    pub category_id: String,
    pub status: ProductStatus,
    pub discount_type: DiscountType,
    pub discount_value: Option<i64>,
    pub discount_start_at: Option<DateTime<Utc>>,
    pub discount_end_at: Option<DateTime<Utc>>,
    pub order_index: i32,
    #[serde(default)]
    pub seller_chat_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Variants embedded in read responses; never sent back on writes
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Name in the given locale, falling back to the source locale.
    pub fn localized_name(&self, locale: Locale) -> &str {
        let name = match locale {
            Locale::Uz => &self.name_uz,
            Locale::UzCyrillic => &self.name_uz_cyrillic,
            Locale::Ru => &self.name_ru,
            Locale::En => &self.name_en,
        };
        if name.is_empty() { &self.name_uz } else { name }
    }

    /// Description in the given locale, falling back to the source locale.
    pub fn localized_description(&self, locale: Locale) -> &str {
        let desc = match locale {
            Locale::Uz => &self.description_uz,
            Locale::UzCyrillic => &self.description_uz_cyrillic,
            Locale::Ru => &self.description_ru,
            Locale::En => &self.description_en,
        };
        if desc.is_empty() { &self.description_uz } else { desc }
    }

    /// Whether the discount applies at `now`.
    ///
    /// Active only when a non-zero value is set and `now` falls within
    /// `[discount_start_at, discount_end_at]`; an absent bound is open-ended.
    pub fn discount_active(&self, now: DateTime<Utc>) -> bool {
        if self.discount_type == DiscountType::None {
            return false;
        }
        match self.discount_value {
            Some(v) if v > 0 => {}
            _ => return false,
        }
        if let Some(start) = self.discount_start_at
            && now < start
        {
            return false;
        }
        if let Some(end) = self.discount_end_at
            && now > end
        {
            return false;
        }
        true
    }

    /// Price after applying the active discount, floored at zero.
    pub fn effective_price(&self, now: DateTime<Utc>) -> i64 {
        if !self.discount_active(now) {
            return self.price;
        }
        let value = self.discount_value.unwrap_or(0);
        match self.discount_type {
            DiscountType::None => self.price,
            DiscountType::Percent => self.price - self.price * value / 100,
            DiscountType::Fixed => (self.price - value).max(0),
        }
    }
}

/// Create product payload
///
/// Variants are not embedded here; they are synced through the dedicated
/// variant endpoints after the base record exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
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
    pub category_id: String,
    pub status: ProductStatus,
    pub discount_type: DiscountType,
    pub discount_value: Option<i64>,
    pub discount_start_at: Option<DateTime<Utc>>,
    pub discount_end_at: Option<DateTime<Utc>>,
    pub order_index: i32,
}

/// Update product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
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
}

/// Product variant entity (size/color/... with its own price and stock)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    pub name_uz: String,
    pub name_uz_cyrillic: String,
    pub name_ru: String,
    pub name_en: String,
    pub price: i64,
    pub stock: i32,
    pub image_url: String,
    #[serde(default)]
    pub img_name: Option<String>,
    #[serde(default)]
    pub img_size: Option<i64>,
}

impl ProductVariant {
    /// Name in the given locale, falling back to the source locale.
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

/// Add variant payload; `product_id` attaches it to its owner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantCreate {
    pub product_id: String,
    pub name_uz: String,
    pub name_uz_cyrillic: String,
    pub name_ru: String,
    pub name_en: String,
    pub price: i64,
    pub stock: i32,
    pub image_url: String,
    pub img_name: Option<String>,
    pub img_size: Option<i64>,
}

/// Update variant payload; the variant id alone addresses it, no product id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantUpdate {
    pub name_uz: String,
    pub name_uz_cyrillic: String,
    pub name_ru: String,
    pub name_en: String,
    pub price: i64,
    pub stock: i32,
    pub image_url: String,
    pub img_name: Option<String>,
    pub img_size: Option<i64>,
}
