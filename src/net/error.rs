//! Error taxonomy for calls made through `ApiClient`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

pub const UNAUTHORIZED: u16 = 401;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Network failure before any status was received.
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-2xx response.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("could not encode request body: {0}")]
    Encode(String),
    #[error("could not decode response body: {0}")]
    Decode(String),
    /// The request URL could not be resolved against the base address.
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
    /// A request stage rejected the call; nothing was sent.
    #[error("request preparation failed: {0}")]
    Stage(String),
}

impl ApiError {
    /// Build a status error, preferring the server's `message` field over
    /// the raw body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.message)
            .unwrap_or_else(|_| body.trim().to_owned());
        Self::Status { status, message }
    }

    /// HTTP status, for errors that carry one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(UNAUTHORIZED)
    }

    /// Short text suitable for an inline form error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } if !message.is_empty() => message.clone(),
            Self::Status { status, .. } => format!("Request failed ({status})"),
            Self::Transport(_) => "Could not reach the server.".to_owned(),
            other => other.to_string(),
        }
    }
}
