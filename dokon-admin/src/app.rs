//! Root controller
//!
//! Owns the whole application state in one place (access state, session,
//! navigator, open forms, notifications, confirmation gate, theme) and
//! exposes read-only projections to rendering concerns. Every mutating
//! flow funnels through here: forms submit, the navigator refreshes, the
//! notifier reports.

use std::sync::Arc;

use dokon_client::{CatalogApi, CatalogClient, ClientResult, TranslationAssist};
use shared::models::{Category, Product, ProductStatus, UserAccount};

use crate::config::AdminConfig;
use crate::forms::{CategoryForm, ProductForm};
use crate::gate::{self, AccessState};
use crate::navigator::TreeNavigator;
use crate::notify::{ConfirmationGate, Notifier, PendingAction};
use crate::prefs::{PreferenceStore, Preferences, Theme};

/// The admin application
pub struct AdminApp {
    config: AdminConfig,
    api: Arc<dyn CatalogApi>,
    assist: TranslationAssist,
    access: Option<AccessState>,
    session: Option<UserAccount>,
    navigator: TreeNavigator,
    category_form: Option<CategoryForm>,
    product_form: Option<ProductForm>,
    notifier: Notifier,
    confirmation: ConfirmationGate,
    prefs_store: PreferenceStore,
    theme: Theme,
}

impl AdminApp {
    /// Build the app against the real backend
    pub fn new(config: AdminConfig) -> ClientResult<Self> {
        let client = CatalogClient::new(&config.client_config())?;
        Ok(Self::with_api(config, Arc::new(client)))
    }

    /// Build the app against any API implementation (tests use a double)
    pub fn with_api(config: AdminConfig, api: Arc<dyn CatalogApi>) -> Self {
        let assist = TranslationAssist::new(config.translate_url.clone());
        let prefs_store = PreferenceStore::new(&config.work_dir);
        let theme = prefs_store.load().theme;
        let navigator = TreeNavigator::new(api.clone());
        Self {
            config,
            api,
            assist,
            access: None,
            session: None,
            navigator,
            category_form: None,
            product_form: None,
            notifier: Notifier::new(),
            confirmation: ConfirmationGate::new(),
            prefs_store,
            theme,
        }
    }

    // ========== Projections ==========

    pub fn access(&self) -> Option<&AccessState> {
        self.access.as_ref()
    }

    pub fn session(&self) -> Option<&UserAccount> {
        self.session.as_ref()
    }

    pub fn navigator(&self) -> &TreeNavigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut TreeNavigator {
        &mut self.navigator
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    pub fn confirmation(&self) -> &ConfirmationGate {
        &self.confirmation
    }

    pub fn category_form(&self) -> Option<&CategoryForm> {
        self.category_form.as_ref()
    }

    pub fn category_form_mut(&mut self) -> Option<&mut CategoryForm> {
        self.category_form.as_mut()
    }

    pub fn product_form(&self) -> Option<&ProductForm> {
        self.product_form.as_ref()
    }

    pub fn product_form_mut(&mut self) -> Option<&mut ProductForm> {
        self.product_form.as_mut()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    // ========== Startup ==========

    /// Resolve the chat id from the deep link, run the one-shot access
    /// gate, and on success position the navigator at the root.
    pub async fn start(&mut self, deep_link: Option<&str>) -> &AccessState {
        let chat_id = self.config.resolve_chat_id(deep_link);
        let state = gate::check(self.api.as_ref(), &chat_id).await;

        if let AccessState::Authorized(user) = &state {
            self.session = Some(user.clone());
            if let Err(err) = self.navigator.navigate_root().await {
                self.notifier.error(err.user_message());
            }
        }
        self.access.insert(state)
    }

    // ========== Category flows ==========

    /// Open a category form: create under the current position, or edit
    pub fn open_category_form(&mut self, editing: Option<&Category>) {
        self.category_form = Some(match editing {
            Some(category) => CategoryForm::edit(category),
            None => CategoryForm::create(
                self.navigator.current_parent_id().map(str::to_string),
            ),
        });
    }

    pub fn close_category_form(&mut self) {
        self.category_form = None;
    }

    /// Submit the open category form; closes it and refreshes the
    /// navigator on success, keeps it open otherwise.
    pub async fn submit_category_form(&mut self) {
        let Some(form) = &self.category_form else {
            return;
        };
        match form.submit(self.api.as_ref()).await {
            Ok(saved) => {
                tracing::info!(id = %saved.id, "category saved");
                self.notifier.success("Category saved");
                self.category_form = None;
                self.refresh_after_mutation().await;
            }
            Err(err) => self.notifier.error(err.user_message()),
        }
    }

    // ========== Product flows ==========

    /// Open a product form: create in the current leaf category, or edit.
    ///
    /// Creating requires the navigator to sit inside a category; at the
    /// root there is nothing to attach the product to.
    pub fn open_product_form(&mut self, editing: Option<&Product>) {
        match editing {
            Some(product) => self.product_form = Some(ProductForm::edit(product)),
            None => match self.navigator.current_parent_id() {
                Some(category_id) => {
                    self.product_form = Some(ProductForm::create(category_id));
                }
                None => self.notifier.error("Select a category first"),
            },
        }
    }

    pub fn close_product_form(&mut self) {
        self.product_form = None;
    }

    /// Submit the open product form.
    ///
    /// The form closes only when the base write and every variant write
    /// succeeded; a partial variant sync keeps it open and reports how
    /// many calls failed, since the committed part stays committed
    /// server-side.
    pub async fn submit_product_form(&mut self) {
        let Some(form) = &mut self.product_form else {
            return;
        };
        match form.submit(self.api.as_ref()).await {
            Ok(outcome) if outcome.report.is_clean() => {
                tracing::info!(id = %outcome.product.id, "product saved");
                self.notifier.success("Product saved");
                self.product_form = None;
                self.refresh_after_mutation().await;
            }
            Ok(outcome) => {
                let failed = outcome.report.failures.len();
                self.notifier.error(format!(
                    "Product saved, but {failed} variant update(s) failed"
                ));
                self.refresh_after_mutation().await;
            }
            Err(err) => self.notifier.error(err.user_message()),
        }
    }

    /// Flip a product's status straight from the list view
    pub async fn change_product_status(&mut self, id: &str, status: ProductStatus) {
        match self.api.change_product_status(id, status).await {
            Ok(_) => {
                self.notifier.success("Status updated");
                self.refresh_after_mutation().await;
            }
            Err(err) => self.notifier.error(err.user_message()),
        }
    }

    /// Upload an image and attach it to the open product form
    pub async fn upload_product_image(&mut self, bytes: Vec<u8>, filename: &str, mime: &str) {
        if self.product_form.is_none() {
            return;
        }
        match self.api.upload_file(bytes, filename, mime).await {
            Ok(file) => {
                if let Some(form) = &mut self.product_form {
                    form.image_url = file.url;
                }
            }
            Err(err) => self.notifier.error(err.user_message()),
        }
    }

    /// Upload an image into the variant editor slot
    pub async fn upload_variant_image(&mut self, bytes: Vec<u8>, filename: &str, mime: &str) {
        if self.product_form.is_none() {
            return;
        }
        match self.api.upload_file(bytes, filename, mime).await {
            Ok(file) => {
                if let Some(form) = &mut self.product_form {
                    let slot = form.editor.slot_mut();
                    slot.image_url = file.url;
                    slot.img_name = Some(file.name);
                    slot.img_size = Some(file.size);
                }
            }
            Err(err) => self.notifier.error(err.user_message()),
        }
    }

    /// Run the translation assist over the open product form's source
    /// fields. Assist failure changes nothing.
    pub async fn translate_product_form(&mut self) {
        let Some(form) = &self.product_form else {
            return;
        };
        let name = form.name_uz.clone();
        let description = form.description_uz.clone();

        if let Some(set) = self.assist.translate(&name, &description).await
            && let Some(form) = &mut self.product_form
        {
            form.apply_translations(&set);
        }
    }

    // ========== Destructive flows ==========

    pub fn request_delete_category(&mut self, id: impl Into<String>) {
        self.confirmation
            .request(PendingAction::DeleteCategory(id.into()));
    }

    pub fn request_delete_product(&mut self, id: impl Into<String>) {
        self.confirmation
            .request(PendingAction::DeleteProduct(id.into()));
    }

    pub fn request_delete_variant(&mut self, id: impl Into<String>) {
        self.confirmation
            .request(PendingAction::DeleteVariant(id.into()));
    }

    /// Cancel the pending destructive action; no call is issued
    pub fn cancel_pending(&mut self) {
        self.confirmation.cancel();
    }

    /// Execute the pending destructive action
    pub async fn confirm_pending(&mut self) {
        let Some(action) = self.confirmation.confirm() else {
            return;
        };
        let result = match &action {
            PendingAction::DeleteCategory(id) => self.api.delete_category(id).await,
            PendingAction::DeleteProduct(id) => self.api.delete_product(id).await,
            PendingAction::DeleteVariant(id) => self.api.delete_product_variant(id).await,
        };
        match result {
            Ok(_) => {
                tracing::info!(?action, "delete confirmed");
                self.notifier.success("Deleted");
                match action {
                    PendingAction::DeleteVariant(id) => {
                        // The variant list lives in the open form, not in
                        // the navigator's collection.
                        if let Some(form) = &mut self.product_form {
                            form.remove_persisted(&id);
                        }
                    }
                    _ => self.refresh_after_mutation().await,
                }
            }
            Err(err) => self.notifier.error(err.user_message()),
        }
    }

    // ========== Theme ==========

    /// Flip and persist the theme preference
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(err) = self.prefs_store.save(&Preferences { theme: self.theme }) {
            tracing::warn!(error = %err, "failed to persist theme preference");
        }
    }

    // ========== Helpers ==========

    async fn refresh_after_mutation(&mut self) {
        if let Err(err) = self.navigator.refresh().await {
            self.notifier.error(err.user_message());
        }
    }
}
