//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. Seeded from the persisted
//! session on startup so a reload keeps the user signed in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;
use crate::session::SessionStore;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State restored from storage. A user record without a token is stale
    /// and ignored.
    #[must_use]
    pub fn from_session(session: &SessionStore) -> Self {
        let user = if session.is_authenticated() { session.user() } else { None };
        Self { user, loading: false }
    }
}
