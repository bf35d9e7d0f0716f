//! Ordered request/response stages run around every call.
//!
//! ARCHITECTURE
//! ============
//! Request stages transform the outgoing `RequestConfig` in order; the first
//! failure aborts the call before anything is sent. Response stages observe
//! the outcome (success or error) in order and hand it on. Stages hold their
//! own side-effect handles (session store, navigator) instead of reaching for
//! browser globals.
//!
//! The default pipeline is `AttachBearerToken` then `UnauthorizedRedirect`.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use std::sync::Arc;

use super::error::ApiError;
use super::request::{AUTHORIZATION, ApiResponse, RequestConfig};
use crate::config::ClientConfig;
use crate::session::{Navigator, SessionStore};

/// Transform applied to each outgoing request.
pub trait RequestStage: Send + Sync {
    /// # Errors
    ///
    /// Returns an error to abort the call; no request is sent.
    fn prepare(&self, request: RequestConfig) -> Result<RequestConfig, ApiError>;
}

/// Observer applied to each call outcome.
pub trait ResponseStage: Send + Sync {
    /// # Errors
    ///
    /// Returns the (possibly replaced) error for failed calls.
    fn observe(&self, outcome: Result<ApiResponse, ApiError>) -> Result<ApiResponse, ApiError>;
}

#[derive(Clone, Default)]
pub struct Pipeline {
    request_stages: Vec<Arc<dyn RequestStage>>,
    response_stages: Vec<Arc<dyn ResponseStage>>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("request_stages", &self.request_stages.len())
            .field("response_stages", &self.response_stages.len())
            .finish()
    }
}

impl Pipeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Token attach on the way out, 401 teardown on the way back.
    pub fn authenticated(config: &ClientConfig, session: SessionStore, navigator: Arc<dyn Navigator>) -> Self {
        Self::new()
            .with_request_stage(AttachBearerToken::new(session.clone(), config))
            .with_response_stage(UnauthorizedRedirect::new(session, navigator, config.login_path.clone()))
    }

    #[must_use]
    pub fn with_request_stage(mut self, stage: impl RequestStage + 'static) -> Self {
        self.request_stages.push(Arc::new(stage));
        self
    }

    #[must_use]
    pub fn with_response_stage(mut self, stage: impl ResponseStage + 'static) -> Self {
        self.response_stages.push(Arc::new(stage));
        self
    }

    /// Run every request stage in order.
    ///
    /// # Errors
    ///
    /// Returns the first stage failure.
    pub fn prepare(&self, request: RequestConfig) -> Result<RequestConfig, ApiError> {
        self.request_stages
            .iter()
            .try_fold(request, |req, stage| stage.prepare(req))
    }

    /// Run every response stage in order.
    ///
    /// # Errors
    ///
    /// Returns the error outcome after all stages have observed it.
    pub fn observe(&self, outcome: Result<ApiResponse, ApiError>) -> Result<ApiResponse, ApiError> {
        self.response_stages
            .iter()
            .fold(outcome, |acc, stage| stage.observe(acc))
    }
}

/// Adds `Authorization: Bearer <token>` when a session token is stored.
///
/// Only requests aimed at the client's own origin get the header; absolute
/// URLs on other hosts go out without credentials.
pub struct AttachBearerToken {
    session: SessionStore,
    config: ClientConfig,
}

impl AttachBearerToken {
    pub fn new(session: SessionStore, config: &ClientConfig) -> Self {
        Self { session, config: config.clone() }
    }
}

impl RequestStage for AttachBearerToken {
    fn prepare(&self, mut request: RequestConfig) -> Result<RequestConfig, ApiError> {
        if !self.config.is_own_origin(&request.url) {
            leptos::logging::log!("skipping auth token for foreign origin: {}", request.url);
            return Ok(request);
        }
        match self.session.token() {
            Some(token) => {
                request.set_header(AUTHORIZATION, bearer(&token));
                leptos::logging::log!("added auth token to request header");
            }
            None => leptos::logging::log!("no auth token available for request"),
        }
        Ok(request)
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// On a 401, clears the session and sends the browser to the login page.
///
/// The error is always handed back to the caller.
pub struct UnauthorizedRedirect {
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
    login_path: String,
}

impl UnauthorizedRedirect {
    pub fn new(session: SessionStore, navigator: Arc<dyn Navigator>, login_path: impl Into<String>) -> Self {
        Self { session, navigator, login_path: login_path.into() }
    }
}

impl ResponseStage for UnauthorizedRedirect {
    fn observe(&self, outcome: Result<ApiResponse, ApiError>) -> Result<ApiResponse, ApiError> {
        if let Err(err) = &outcome {
            if err.is_unauthorized() {
                leptos::logging::warn!("401 unauthorized response; clearing session");
                self.session.clear();
                if self.navigator.current_path() != self.login_path {
                    self.navigator.navigate(&self.login_path);
                }
            }
        }
        outcome
    }
}
