use super::*;

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k"), None);
    store.set("k", "v1");
    assert_eq!(store.get("k").as_deref(), Some("v1"));
    store.set("k", "v2");
    assert_eq!(store.get("k").as_deref(), Some("v2"));
    store.remove("k");
    assert!(!store.contains("k"));
}

#[test]
fn memory_store_remove_missing_key_is_noop() {
    let store = MemoryStore::with_entries([("a", "1")]);
    store.remove("missing");
    assert_eq!(store.get("a").as_deref(), Some("1"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_inert_without_browser() {
    let store = LocalStorage;
    store.set("k", "v");
    assert_eq!(store.get("k"), None);
    store.remove("k");
}
