//! Session token and user record lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login/register begin a session, the request pipeline reads the token, and
//! logout or a 401 clears both keys. Token and user always leave together.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use super::storage::KeyValueStore;
use crate::config::{AUTH_TOKEN_KEY, USER_KEY};
use crate::net::types::{AuthResponse, User};

/// Typed view over the two session keys of a `KeyValueStore`.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl SessionStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Stored bearer token. Empty strings count as absent.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.backend.get(AUTH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Stored user record, if present and decodable.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        let raw = self.backend.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist the token and user from a login/register response.
    ///
    /// A response without a user clears any stale user record so the two keys
    /// never describe different accounts.
    pub fn begin(&self, auth: &AuthResponse) {
        self.backend.set(AUTH_TOKEN_KEY, &auth.token);
        match auth.user.as_ref().and_then(|u| serde_json::to_string(u).ok()) {
            Some(raw) => self.backend.set(USER_KEY, &raw),
            None => self.backend.remove(USER_KEY),
        }
    }

    /// Remove both the token and the user record.
    pub fn clear(&self) {
        self.backend.remove(AUTH_TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }
}
