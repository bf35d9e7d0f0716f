use std::sync::Arc;

use super::*;
use crate::config::{AUTH_TOKEN_KEY, USER_KEY};
use crate::session::MemoryStore;

const USER_JSON: &str = r#"{"id":3,"firstName":"Edsger","lastName":"Dijkstra","email":"ewd@example.com"}"#;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

// =============================================================
// from_session
// =============================================================

#[test]
fn from_session_restores_user_with_token() {
    let store = MemoryStore::with_entries([(AUTH_TOKEN_KEY, "tok"), (USER_KEY, USER_JSON)]);
    let state = AuthState::from_session(&SessionStore::new(Arc::new(store)));
    assert_eq!(state.user.map(|u| u.email), Some("ewd@example.com".to_owned()));
    assert!(!state.loading);
}

#[test]
fn from_session_ignores_user_without_token() {
    let store = MemoryStore::with_entries([(USER_KEY, USER_JSON)]);
    let state = AuthState::from_session(&SessionStore::new(Arc::new(store)));
    assert!(state.user.is_none());
}
