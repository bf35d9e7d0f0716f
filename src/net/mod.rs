//! Networking modules for the authenticated gateway client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` owns the call flow, `pipeline` holds the request/response stages,
//! `transport` puts bytes on the wire, `api` exposes typed gateway routes, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod client;
pub mod error;
pub mod pipeline;
pub mod request;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
