//! Variant draft state
//!
//! While a product form is open each variant carries an explicit draft
//! tag: persisted-and-untouched, locally-new, or persisted-but-edited.
//! Only `New` drafts go to the add-variant endpoint and only `Modified`
//! drafts to the update-variant endpoint; `Unchanged` drafts trigger no
//! calls at all. The tags are constructed once per edit, never mutated in
//! place, and discarded when the form closes.

use shared::models::{ProductVariant, VariantCreate, VariantUpdate};

use super::FormError;

/// Editable variant fields, shared by all draft states
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantFields {
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

impl VariantFields {
    pub fn from_variant(variant: &ProductVariant) -> Self {
        Self {
            name_uz: variant.name_uz.clone(),
            name_uz_cyrillic: variant.name_uz_cyrillic.clone(),
            name_ru: variant.name_ru.clone(),
            name_en: variant.name_en.clone(),
            price: variant.price,
            stock: variant.stock,
            image_url: variant.image_url.clone(),
            img_name: variant.img_name.clone(),
            img_size: variant.img_size,
        }
    }

    pub fn to_create(&self, product_id: &str) -> VariantCreate {
        VariantCreate {
            product_id: product_id.to_string(),
            name_uz: self.name_uz.clone(),
            name_uz_cyrillic: self.name_uz_cyrillic.clone(),
            name_ru: self.name_ru.clone(),
            name_en: self.name_en.clone(),
            price: self.price,
            stock: self.stock,
            image_url: self.image_url.clone(),
            img_name: self.img_name.clone(),
            img_size: self.img_size,
        }
    }

    pub fn to_update(&self) -> VariantUpdate {
        VariantUpdate {
            name_uz: self.name_uz.clone(),
            name_uz_cyrillic: self.name_uz_cyrillic.clone(),
            name_ru: self.name_ru.clone(),
            name_en: self.name_en.clone(),
            price: self.price,
            stock: self.stock,
            image_url: self.image_url.clone(),
            img_name: self.img_name.clone(),
            img_size: self.img_size,
        }
    }

    fn validate(&self) -> Result<(), FormError> {
        if self.name_uz.trim().is_empty() {
            return Err(FormError::MissingVariantName);
        }
        if self.image_url.is_empty() {
            return Err(FormError::MissingVariantImage);
        }
        Ok(())
    }
}

/// Draft tag for one variant in an open product form
#[derive(Debug, Clone)]
pub enum VariantDraftState {
    /// Persisted and untouched; not resubmitted
    Unchanged(ProductVariant),
    /// Exists only locally; sent to the add-variant endpoint
    New(VariantFields),
    /// Persisted with edited fields; sent to the update-variant endpoint
    Modified { id: String, fields: VariantFields },
}

impl VariantDraftState {
    /// Persisted id, if any
    pub fn id(&self) -> Option<&str> {
        match self {
            VariantDraftState::Unchanged(v) => Some(&v.id),
            VariantDraftState::New(_) => None,
            VariantDraftState::Modified { id, .. } => Some(id),
        }
    }

    /// Current field values regardless of tag
    pub fn fields(&self) -> VariantFields {
        match self {
            VariantDraftState::Unchanged(v) => VariantFields::from_variant(v),
            VariantDraftState::New(fields) => fields.clone(),
            VariantDraftState::Modified { fields, .. } => fields.clone(),
        }
    }

    /// Display name (source locale)
    pub fn display_name(&self) -> &str {
        match self {
            VariantDraftState::Unchanged(v) => &v.name_uz,
            VariantDraftState::New(fields) => &fields.name_uz,
            VariantDraftState::Modified { fields, .. } => &fields.name_uz,
        }
    }
}

/// Single-slot editor for the variant currently being added or edited
///
/// The slot is separate from the committed draft list: saving validates
/// and appends/replaces, then resets the slot; cancelling just resets.
#[derive(Debug, Default)]
pub struct VariantEditor {
    slot: VariantFields,
    editing_index: Option<usize>,
}

impl VariantEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The slot under edit
    pub fn slot(&self) -> &VariantFields {
        &self.slot
    }

    pub fn slot_mut(&mut self) -> &mut VariantFields {
        &mut self.slot
    }

    /// Index of the committed entry being edited, if any
    pub fn editing_index(&self) -> Option<usize> {
        self.editing_index
    }

    /// Start a fresh variant
    pub fn begin_new(&mut self) {
        self.slot = VariantFields::default();
        self.editing_index = None;
    }

    /// Load a committed entry into the slot for editing
    pub fn begin_edit(&mut self, index: usize, draft: &VariantDraftState) {
        self.slot = draft.fields();
        self.editing_index = Some(index);
    }

    /// Abandon the slot without touching the committed list
    pub fn cancel(&mut self) {
        self.begin_new();
    }

    /// Validate the slot and commit it into the draft list
    ///
    /// A fresh slot appends a `New` draft. Saving over a committed entry
    /// re-tags it: an `Unchanged` entry becomes `Modified` only when the
    /// fields actually differ, a `New` entry stays `New`, and a
    /// `Modified` entry keeps its tag with the latest fields.
    pub fn add_or_update(
        &mut self,
        drafts: &mut Vec<VariantDraftState>,
    ) -> Result<(), FormError> {
        self.slot.validate()?;
        let fields = std::mem::take(&mut self.slot);

        match self.editing_index.take() {
            None => drafts.push(VariantDraftState::New(fields)),
            Some(index) => {
                let Some(existing) = drafts.get(index) else {
                    // The committed list shrank under us; treat as new.
                    drafts.push(VariantDraftState::New(fields));
                    return Ok(());
                };
                let replacement = match existing {
                    VariantDraftState::Unchanged(v) => {
                        if VariantFields::from_variant(v) == fields {
                            VariantDraftState::Unchanged(v.clone())
                        } else {
                            VariantDraftState::Modified {
                                id: v.id.clone(),
                                fields,
                            }
                        }
                    }
                    VariantDraftState::New(_) => VariantDraftState::New(fields),
                    VariantDraftState::Modified { id, .. } => VariantDraftState::Modified {
                        id: id.clone(),
                        fields,
                    },
                };
                drafts[index] = replacement;
            }
        }
        Ok(())
    }
}
