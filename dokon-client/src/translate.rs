//! Generative translation assist
//!
//! Opaque external service: given an Uzbek name/description, it answers
//! with best-effort translations for the other locales. The assist is
//! strictly optional: any failure (no endpoint configured, network error,
//! malformed answer) yields `None` and must never block the form.

use serde::{Deserialize, Serialize};

/// One translated name/description pair
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslatedField {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "desc")]
    pub description: Option<String>,
}

/// Best-effort translations for the non-source locales
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationSet {
    #[serde(default)]
    pub cyr: TranslatedField,
    #[serde(default)]
    pub ru: TranslatedField,
    #[serde(default)]
    pub en: TranslatedField,
}

#[derive(Debug, Serialize)]
struct TranslationRequest<'a> {
    name: &'a str,
    description: &'a str,
}

/// Client for the translation assist endpoint
#[derive(Debug, Clone)]
pub struct TranslationAssist {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl TranslationAssist {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Whether an endpoint is configured at all
    pub fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Translate a source-locale name/description
    ///
    /// Swallows every failure: the caller merges whatever comes back and
    /// leaves the other locale fields unchanged otherwise.
    pub async fn translate(&self, name: &str, description: &str) -> Option<TranslationSet> {
        let endpoint = self.endpoint.as_deref()?;
        if name.is_empty() {
            return None;
        }

        let request = TranslationRequest { name, description };
        let result = self
            .client
            .post(endpoint)
            .json(&request)
            .send()
            .await
            .and_then(|r| r.error_for_status());

        let response = match result {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(error = %e, "translation assist unavailable");
                return None;
            }
        };

        match response.json::<TranslationSet>().await {
            Ok(set) => Some(set),
            Err(e) => {
                tracing::debug!(error = %e, "translation assist returned malformed data");
                None
            }
        }
    }
}
