//! Category/product tree navigator
//!
//! Holds the current position in the catalog hierarchy and keeps the
//! displayed collection in sync with it. Whether a node acts as a
//! category container or a product container is never stored on the node:
//! it is re-derived on every navigation from a `has_children` probe, so a
//! category that gains or loses children changes traversal behavior with
//! no schema change.

use std::sync::Arc;

use dokon_client::{CatalogApi, ClientError, ClientResult};
use shared::models::{Category, Product};

/// One breadcrumb entry; the root position (no parent) is implicit and
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub id: String,
    pub name: String,
}

/// The classified contents of the current tree position
///
/// Consumers pattern-match instead of re-deriving the category-vs-product
/// distinction themselves.
#[derive(Debug, Clone)]
pub enum NodeView {
    Categories(Vec<Category>),
    Products(Vec<Product>),
}

impl NodeView {
    pub fn is_empty(&self) -> bool {
        match self {
            NodeView::Categories(items) => items.is_empty(),
            NodeView::Products(items) => items.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            NodeView::Categories(items) => items.len(),
            NodeView::Products(items) => items.len(),
        }
    }

    fn sort_by_order_index(&mut self) {
        match self {
            NodeView::Categories(items) => items.sort_by_key(|c| c.order_index),
            NodeView::Products(items) => items.sort_by_key(|p| p.order_index),
        }
    }
}

/// Tree navigator state machine
pub struct TreeNavigator {
    api: Arc<dyn CatalogApi>,
    current_parent_id: Option<String>,
    breadcrumb: Vec<Crumb>,
    view: NodeView,
    is_loading: bool,
    // Monotonic fetch counter: a completed fetch is applied only when its
    // number is still current, so a superseded response can never
    // overwrite a newer position (latest-wins).
    fetch_seq: u64,
    search_query: String,
}

impl TreeNavigator {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            current_parent_id: None,
            breadcrumb: Vec::new(),
            view: NodeView::Categories(Vec::new()),
            is_loading: false,
            fetch_seq: 0,
            search_query: String::new(),
        }
    }

    // ========== Projections ==========

    pub fn current_parent_id(&self) -> Option<&str> {
        self.current_parent_id.as_deref()
    }

    pub fn breadcrumb(&self) -> &[Crumb] {
        &self.breadcrumb
    }

    pub fn view(&self) -> &NodeView {
        &self.view
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// The current collection with the search filter applied
    ///
    /// Matches case-insensitively against the Uzbek and English names,
    /// without mutating the underlying collection.
    pub fn visible(&self) -> NodeView {
        if self.search_query.is_empty() {
            return self.view.clone();
        }
        let query = self.search_query.to_lowercase();
        match &self.view {
            NodeView::Categories(items) => NodeView::Categories(
                items
                    .iter()
                    .filter(|c| {
                        c.name_uz.to_lowercase().contains(&query)
                            || c.name_en.to_lowercase().contains(&query)
                    })
                    .cloned()
                    .collect(),
            ),
            NodeView::Products(items) => NodeView::Products(
                items
                    .iter()
                    .filter(|p| {
                        p.name_uz.to_lowercase().contains(&query)
                            || p.name_en.to_lowercase().contains(&query)
                    })
                    .cloned()
                    .collect(),
            ),
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    // ========== Navigation ==========

    /// Jump to the root position: clear the breadcrumb and show root
    /// categories.
    pub async fn navigate_root(&mut self) -> ClientResult<()> {
        self.breadcrumb.clear();
        self.current_parent_id = None;
        self.load().await
    }

    /// Navigate to a node.
    ///
    /// If the id is already on the breadcrumb this is a direct jump to
    /// that ancestor: the breadcrumb is truncated to end there and the
    /// deeper history is discarded. Otherwise the entry is appended.
    pub async fn navigate_to(&mut self, id: &str, name: &str) -> ClientResult<()> {
        if let Some(pos) = self.breadcrumb.iter().position(|c| c.id == id) {
            self.breadcrumb.truncate(pos + 1);
        } else {
            self.breadcrumb.push(Crumb {
                id: id.to_string(),
                name: name.to_string(),
            });
        }
        self.current_parent_id = Some(id.to_string());
        self.load().await
    }

    /// Pop one breadcrumb level and navigate to the new tail (root when
    /// the breadcrumb empties).
    pub async fn go_back(&mut self) -> ClientResult<()> {
        self.breadcrumb.pop();
        self.current_parent_id = self.breadcrumb.last().map(|c| c.id.clone());
        self.load().await
    }

    /// Re-fetch the current position, re-deriving its classification.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        self.load().await
    }

    // ========== Fetching ==========

    /// Classify the current position and fetch its collection.
    ///
    /// Stale items stay visible while the fetch is in flight; on failure
    /// they are kept untouched (no partial overwrite with empty data).
    async fn load(&mut self) -> ClientResult<()> {
        self.fetch_seq += 1;
        let seq = self.fetch_seq;
        self.is_loading = true;

        let result = self.classify(self.current_parent_id.clone()).await;

        if seq != self.fetch_seq {
            // A newer navigation superseded this fetch; drop the result.
            tracing::debug!(seq, current = self.fetch_seq, "dropping superseded fetch");
            return Ok(());
        }
        self.is_loading = false;

        match result {
            Ok(mut view) => {
                view.sort_by_order_index();
                self.view = view;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    parent = ?self.current_parent_id,
                    error = %err,
                    "navigation fetch failed, keeping last collection"
                );
                Err(err)
            }
        }
    }

    async fn classify(&self, parent: Option<String>) -> Result<NodeView, ClientError> {
        match parent {
            None => self
                .api
                .list_root_categories()
                .await
                .map(NodeView::Categories),
            Some(id) => {
                if self.api.has_children(&id).await? {
                    self.api
                        .list_child_categories(&id)
                        .await
                        .map(NodeView::Categories)
                } else {
                    self.api
                        .list_products_by_category(&id)
                        .await
                        .map(NodeView::Products)
                }
            }
        }
    }
}
