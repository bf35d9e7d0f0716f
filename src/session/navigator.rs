//! Navigation capability: where the browser is, and moving it elsewhere.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use std::sync::{Mutex, PoisonError};

/// Read and change the current browser location.
pub trait Navigator: Send + Sync {
    /// Path component of the current location (e.g. `/cart`).
    fn current_path(&self) -> String;
    /// Full-page navigation to `path`.
    fn navigate(&self, path: &str);
}

/// `window.location`-backed navigator.
///
/// Uses a full-page `href` assignment so every in-memory signal is dropped
/// along with the cleared session.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_else(|| "/".to_owned())
        }
        #[cfg(not(feature = "csr"))]
        {
            "/".to_owned()
        }
    }

    fn navigate(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
        }
    }
}

/// Navigator double that records every navigation.
///
/// `navigate` also updates the current path, mirroring a real page load.
#[derive(Debug)]
pub struct RecordingNavigator {
    state: Mutex<RecordingState>,
}

#[derive(Debug)]
struct RecordingState {
    current: String,
    history: Vec<String>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(RecordingState { current: path.into(), history: Vec::new() }),
        }
    }

    /// Every path passed to `navigate`, oldest first.
    #[must_use]
    pub fn navigations(&self) -> Vec<String> {
        self.lock().history.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RecordingState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        Self::at("/")
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.lock().current.clone()
    }

    fn navigate(&self, path: &str) {
        let mut state = self.lock();
        state.current = path.to_owned();
        state.history.push(path.to_owned());
    }
}
