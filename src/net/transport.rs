//! Wire transports: the browser `fetch` API and a scripted double.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Mutex, PoisonError};

use super::error::ApiError;
use super::request::{ApiResponse, RequestConfig};

/// Sends a fully prepared request and returns the raw response.
///
/// Any received status is returned as `Ok`; mapping non-2xx statuses to
/// errors is the client's job.
pub trait Transport {
    fn send(&self, request: RequestConfig) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// `fetch`-backed transport via `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    #[allow(clippy::unused_async)]
    async fn send(&self, request: RequestConfig) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use super::request::Method;
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Patch => Request::patch(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in request.headers() {
                builder = builder.header(name, value);
            }
            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;

            let resp = prepared
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(ApiResponse::new(status, body))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available outside the browser".to_owned()))
        }
    }
}

/// Transport double that replays queued outcomes and records every request.
///
/// When the queue is empty it answers `200` with an empty JSON object.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
    sent: Mutex<Vec<RequestConfig>>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with `status` and `body`.
    #[must_use]
    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.push(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Queue a transport-level failure.
    #[must_use]
    pub fn fail(self, message: impl Into<String>) -> Self {
        self.push(Err(ApiError::Transport(message.into())));
        self
    }

    /// Requests received so far, oldest first.
    #[must_use]
    pub fn sent(&self) -> Vec<RequestConfig> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn push(&self, outcome: Result<ApiResponse, ApiError>) {
        self.outcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(outcome);
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: RequestConfig) -> Result<ApiResponse, ApiError> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        self.outcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse::new(200, "{}")))
    }
}
