//! Catalog locales
//!
//! Every localized entity carries four name fields (and products four
//! description fields), one per locale. Uzbek Latin is the source locale;
//! the backend stores the other three alongside it.

use serde::{Deserialize, Serialize};

/// Supported catalog locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    Uz,
    UzCyrillic,
    Ru,
    En,
}

impl Locale {
    /// All locales, source locale first
    pub const ALL: [Locale; 4] = [Locale::Uz, Locale::UzCyrillic, Locale::Ru, Locale::En];

    /// The locale translations are produced from
    pub const SOURCE: Locale = Locale::Uz;

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Uz => "uz",
            Locale::UzCyrillic => "uz_cyrillic",
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
