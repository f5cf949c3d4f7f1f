// dokon-admin/tests/navigator_flow.rs
// Tree navigation: classification, breadcrumb discipline, ordering,
// failure behavior.

mod support;

use std::sync::Arc;

use chrono::Utc;
use dokon_admin::{NodeView, TreeNavigator};
use shared::models::DiscountType;
use support::{Call, MockCatalogApi, category, product};

/// Root has A (order 2) and B (order 1); A contains C; B is a leaf with
/// one discounted product.
fn catalog() -> Arc<MockCatalogApi> {
    let api = MockCatalogApi::new();
    *api.root_categories.lock().unwrap() = vec![category("A", "Kiyimlar", 2), category("B", "Ichimliklar", 1)];
    api.children
        .lock()
        .unwrap()
        .insert("A".into(), vec![category("C", "Futbolkalar", 1)]);

    let mut discounted = product("p1", "Cola", 1, 1000);
    discounted.category_id = "B".into();
    discounted.discount_type = DiscountType::Percent;
    discounted.discount_value = Some(10);
    api.products.lock().unwrap().insert("B".into(), vec![discounted]);

    Arc::new(api)
}

#[tokio::test]
async fn root_collection_is_sorted_by_order_index() {
    let api = catalog();
    let mut nav = TreeNavigator::new(api.clone());

    nav.navigate_root().await.unwrap();

    match nav.view() {
        NodeView::Categories(items) => {
            let ids: Vec<_> = items.iter().map(|c| c.id.as_str()).collect();
            assert_eq!(ids, ["B", "A"]);
        }
        other => panic!("expected categories at root, got {other:?}"),
    }
}

#[tokio::test]
async fn parent_with_children_classifies_as_categories() {
    let api = catalog();
    let mut nav = TreeNavigator::new(api.clone());
    nav.navigate_root().await.unwrap();

    nav.navigate_to("A", "Kiyimlar").await.unwrap();

    assert!(matches!(nav.view(), NodeView::Categories(_)));
    assert_eq!(nav.current_parent_id(), Some("A"));
    let calls = api.calls();
    assert!(calls.contains(&Call::HasChildren("A".into())));
    assert!(calls.contains(&Call::ListChildren("A".into())));
    assert!(!calls.iter().any(|c| matches!(c, Call::ListProducts(_))));
}

#[tokio::test]
async fn leaf_classifies_as_products_with_effective_price() {
    let api = catalog();
    let mut nav = TreeNavigator::new(api.clone());
    nav.navigate_root().await.unwrap();

    nav.navigate_to("B", "Ichimliklar").await.unwrap();

    match nav.view() {
        NodeView::Products(items) => {
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].effective_price(Utc::now()), 900);
        }
        other => panic!("expected products in leaf, got {other:?}"),
    }
    assert!(api.calls().contains(&Call::ListProducts("B".into())));
}

#[tokio::test]
async fn crumb_click_truncates_never_appends() {
    let api = catalog();
    let mut nav = TreeNavigator::new(api.clone());
    nav.navigate_root().await.unwrap();

    nav.navigate_to("A", "Kiyimlar").await.unwrap();
    nav.navigate_to("C", "Futbolkalar").await.unwrap();
    assert_eq!(nav.breadcrumb().len(), 2);

    // Clicking the ancestor crumb jumps straight back to it.
    nav.navigate_to("A", "Kiyimlar").await.unwrap();
    let ids: Vec<_> = nav.breadcrumb().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["A"]);

    // Clicking the tail crumb is idempotent, never a duplicate.
    nav.navigate_to("A", "Kiyimlar").await.unwrap();
    assert_eq!(nav.breadcrumb().len(), 1);

    // No sequence of navigations may produce a repeated id.
    nav.navigate_to("C", "Futbolkalar").await.unwrap();
    let mut ids: Vec<_> = nav.breadcrumb().iter().map(|c| c.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), nav.breadcrumb().len());
}

#[tokio::test]
async fn classification_is_rederived_on_every_visit() {
    let api = catalog();
    let mut nav = TreeNavigator::new(api.clone());
    nav.navigate_root().await.unwrap();

    nav.navigate_to("B", "Ichimliklar").await.unwrap();
    assert!(matches!(nav.view(), NodeView::Products(_)));

    // B gains a child category; revisiting must flip it to a category
    // container without any schema change.
    api.children
        .lock()
        .unwrap()
        .insert("B".into(), vec![category("B1", "Gazli", 1)]);

    nav.navigate_to("B", "Ichimliklar").await.unwrap();
    match nav.view() {
        NodeView::Categories(items) => assert_eq!(items[0].id, "B1"),
        other => panic!("expected re-derived categories, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_failure_keeps_last_good_collection() {
    let api = catalog();
    let mut nav = TreeNavigator::new(api.clone());
    nav.navigate_root().await.unwrap();
    assert_eq!(nav.view().len(), 2);

    *api.fail_listing.lock().unwrap() = true;
    let result = nav.navigate_to("A", "Kiyimlar").await;

    assert!(result.is_err());
    assert!(!nav.is_loading());
    // No partial overwrite with empty data.
    assert_eq!(nav.view().len(), 2);
}

#[tokio::test]
async fn go_back_pops_one_level() {
    let api = catalog();
    let mut nav = TreeNavigator::new(api.clone());
    nav.navigate_root().await.unwrap();
    nav.navigate_to("A", "Kiyimlar").await.unwrap();
    nav.navigate_to("C", "Futbolkalar").await.unwrap();

    nav.go_back().await.unwrap();
    assert_eq!(nav.current_parent_id(), Some("A"));

    nav.go_back().await.unwrap();
    assert_eq!(nav.current_parent_id(), None);
    assert!(nav.breadcrumb().is_empty());
}

#[tokio::test]
async fn search_filters_without_mutating_collection() {
    let api = catalog();
    let mut nav = TreeNavigator::new(api.clone());
    nav.navigate_root().await.unwrap();

    nav.set_search_query("kiyim");
    match nav.visible() {
        NodeView::Categories(items) => {
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].id, "A");
        }
        other => panic!("expected filtered categories, got {other:?}"),
    }
    // The underlying collection is untouched.
    assert_eq!(nav.view().len(), 2);

    nav.set_search_query("");
    assert_eq!(nav.visible().len(), 2);
}
