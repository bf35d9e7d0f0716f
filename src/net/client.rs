//! Authenticated HTTP client shared by every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `ApiClient` is built by the application root and handed to pages via
//! context. Each call resolves its URL against the configured base address,
//! applies the default content type, runs the request stages, sends, maps
//! non-2xx statuses to `ApiError::Status`, then runs the response stages.
//!
//! ERROR HANDLING
//! ==============
//! Every failure reaches the caller. A 401 additionally tears the session
//! down (see `pipeline::UnauthorizedRedirect`), but is still returned.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::pipeline::Pipeline;
use super::request::{ApiResponse, CONTENT_TYPE, RequestConfig};
use super::transport::{FetchTransport, Transport};
use crate::config::ClientConfig;
use crate::session::{BrowserNavigator, KeyValueStore, LocalStorage, Navigator, SessionStore};

#[derive(Clone)]
pub struct ApiClient<T = FetchTransport> {
    config: ClientConfig,
    transport: T,
    session: SessionStore,
    pipeline: Pipeline,
}

impl<T> std::fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("pipeline", &self.pipeline)
            .finish_non_exhaustive()
    }
}

impl ApiClient<FetchTransport> {
    /// Client backed by `fetch`, `localStorage` and `window.location`.
    pub fn browser(config: ClientConfig) -> Self {
        Self::new(config, FetchTransport, Arc::new(LocalStorage), Arc::new(BrowserNavigator))
    }
}

impl<T> ApiClient<T> {
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> ApiClient<T> {
    /// Client with the default authenticated pipeline.
    pub fn new(
        config: ClientConfig,
        transport: T,
        store: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let session = SessionStore::new(store);
        let pipeline = Pipeline::authenticated(&config, session.clone(), navigator);
        Self::with_pipeline(config, transport, session, pipeline)
    }

    /// Client with a caller-assembled pipeline.
    pub fn with_pipeline(config: ClientConfig, transport: T, session: SessionStore, pipeline: Pipeline) -> Self {
        Self { config, transport, session, pipeline }
    }

    /// Send `request` through the pipeline.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` or `ApiError::Stage` when the call is
    /// rejected before sending, `ApiError::Transport` on network failure, and
    /// `ApiError::Status` for non-2xx responses.
    pub async fn send(&self, mut request: RequestConfig) -> Result<ApiResponse, ApiError> {
        request.url = self
            .config
            .resolve(&request.url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", request.url)))?
            .into();
        request.set_default_header(CONTENT_TYPE, &self.config.content_type);
        let request = self.pipeline.prepare(request)?;
        let outcome = self
            .transport
            .send(request)
            .await
            .and_then(ApiResponse::into_result);
        self.pipeline.observe(outcome)
    }

    /// `GET path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`]; also `ApiError::Decode` for unexpected bodies.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send(RequestConfig::get(path)).await?.json()
    }

    /// `POST path` with a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`]; also `ApiError::Encode`/`ApiError::Decode`.
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(RequestConfig::post(path).json(body)?).await?.json()
    }

    /// `DELETE path`, ignoring the response body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(RequestConfig::delete(path)).await.map(|_| ())
    }
}
