//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual pages can depend on small focused
//! models provided through Leptos context.

pub mod auth;
pub mod catalog;
