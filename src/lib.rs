//! # storefront-client
//!
//! Leptos + WASM frontend for the storefront gateway.
//!
//! This crate contains the authenticated HTTP client (`net`), the browser
//! session store (`session`), reusable form components, pages, and the
//! application shell that wires them together.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and console logger, then
/// mount the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
