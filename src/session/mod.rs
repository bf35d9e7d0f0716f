//! Browser session persistence and navigation capabilities.
//!
//! SYSTEM CONTEXT
//! ==============
//! `localStorage` and `window.location` are ambient browser globals. They are
//! modeled here as two injected capabilities (`KeyValueStore`, `Navigator`)
//! so the HTTP client can run against in-memory doubles in tests.
//!
//! `store` layers the token/user lifecycle on top of any `KeyValueStore`.

pub mod navigator;
pub mod storage;
pub mod store;

pub use navigator::{BrowserNavigator, Navigator, RecordingNavigator};
pub use storage::{KeyValueStore, LocalStorage, MemoryStore};
pub use store::SessionStore;
