use super::*;

fn lamp() -> Product {
    Product { id: 1, name: "Lamp".to_owned(), description: None, price: 12.0, quantity: Some(3) }
}

#[test]
fn begin_fetch_sets_loading_and_clears_error() {
    let mut state = CatalogState { error: Some("old".to_owned()), ..CatalogState::default() };
    state.begin_fetch();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn apply_success_replaces_items() {
    let mut state = CatalogState { loading: true, ..CatalogState::default() };
    state.apply(Ok(vec![lamp()]));
    assert!(!state.loading);
    assert_eq!(state.items, vec![lamp()]);
}

#[test]
fn apply_error_keeps_items_and_records_message() {
    let mut state = CatalogState { items: vec![lamp()], loading: true, error: None };
    state.apply(Err(ApiError::from_status(503, r#"{"message":"Catalog offline"}"#)));
    assert!(!state.loading);
    assert_eq!(state.items, vec![lamp()]);
    assert_eq!(state.error.as_deref(), Some("Catalog offline"));
}
