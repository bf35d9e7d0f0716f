//! Client configuration and fixed storage keys.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway address and login route are injected into `ApiClient` at the
//! composition root instead of being read from module-level globals, so tests
//! can point the client anywhere.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use url::{Origin, ParseError, Url};

/// Gateway address used when no other address is injected.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Route the browser is sent to when the session is rejected.
pub const LOGIN_PATH: &str = "/login";

/// Content type sent with every request unless the caller sets one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// `localStorage` key holding the bearer token.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// `localStorage` key holding the JSON-serialized session user.
pub const USER_KEY: &str = "user";

/// Settings for one `ApiClient` instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    /// Path to navigate to after a 401.
    pub login_path: String,
    /// Default `Content-Type` header value.
    pub content_type: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: directory(Url::parse(DEFAULT_BASE_URL).expect("default base url is a valid absolute url")),
            login_path: LOGIN_PATH.to_owned(),
            content_type: DEFAULT_CONTENT_TYPE.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Config for a different gateway address, keeping the other defaults.
    ///
    /// # Errors
    ///
    /// Returns the parse error when `base_url` is not an absolute URL that
    /// paths can be joined onto.
    pub fn with_base_url(base_url: &str) -> Result<Self, ParseError> {
        let parsed = Url::parse(base_url)?;
        if parsed.cannot_be_a_base() {
            return Err(ParseError::RelativeUrlWithoutBase);
        }
        Ok(Self { base_url: directory(parsed), ..Self::default() })
    }

    /// Absolute base address; always ends in `/`.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `url` against the base address.
    ///
    /// Absolute URLs are kept (with scheme and host normalized to lowercase).
    /// Protocol-relative `//host/path` takes the base scheme. Any other path
    /// is appended below the base path, with or without a leading `/`.
    ///
    /// # Errors
    ///
    /// Returns the parse error for malformed input.
    pub fn resolve(&self, url: &str) -> Result<Url, ParseError> {
        match Url::parse(url) {
            Err(ParseError::RelativeUrlWithoutBase) if url.starts_with("//") => self.base_url.join(url),
            Err(ParseError::RelativeUrlWithoutBase) => self.base_url.join(url.trim_start_matches('/')),
            other => other,
        }
    }

    /// Origin of the base address.
    #[must_use]
    pub fn origin(&self) -> Origin {
        self.base_url.origin()
    }

    /// Whether `url`, once resolved, shares the base address origin.
    ///
    /// Scheme and host compare case-insensitively and an explicit default
    /// port equals no port. Unparseable input never matches.
    #[must_use]
    pub fn is_own_origin(&self, url: &str) -> bool {
        self.resolve(url).is_ok_and(|target| target.origin() == self.origin())
    }
}

/// Give the base path a trailing `/` so joins append instead of replacing
/// the last segment.
fn directory(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
