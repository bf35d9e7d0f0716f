//! Typed helpers for the storefront gateway routes.
//!
//! All calls go through the caller's `ApiClient`, so they carry the session
//! token and share its 401 handling.
//!
//! ERROR HANDLING
//! ==============
//! Helpers return `ApiError` untouched; pages decide what to show (usually
//! `ApiError::user_message` in a form field's error slot).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::client::ApiClient;
use super::error::ApiError;
use super::transport::Transport;
use super::types::{AddCartItem, AuthResponse, Cart, LoginRequest, Product, RegisterRequest, User};

const LOGIN_ENDPOINT: &str = "/api/auth/login";
const REGISTER_ENDPOINT: &str = "/api/auth/register";
const PRODUCTS_ENDPOINT: &str = "/api/products";
const CURRENT_CART_ENDPOINT: &str = "/api/carts/current";
const CURRENT_CART_ITEMS_ENDPOINT: &str = "/api/carts/current/items";

fn product_endpoint(id: i64) -> String {
    format!("{PRODUCTS_ENDPOINT}/{id}")
}

fn product_search_endpoint(term: &str) -> String {
    format!("{PRODUCTS_ENDPOINT}/search?term={}", urlencoding::encode(term))
}

/// Sign in with email and password via `POST /api/auth/login`.
///
/// On success the token and user are stored in the client's session.
///
/// # Errors
///
/// Returns the gateway's error (401 for bad credentials, 403 for disabled
/// accounts) or a transport/decode failure.
pub async fn login<T: Transport>(client: &ApiClient<T>, email: &str, password: &str) -> Result<Option<User>, ApiError> {
    let payload = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    let auth: AuthResponse = client.post_json(LOGIN_ENDPOINT, &payload).await?;
    client.session().begin(&auth);
    Ok(auth.user)
}

/// Create an account via `POST /api/auth/register` and start its session.
///
/// # Errors
///
/// Returns the gateway's error or a transport/decode failure.
pub async fn register<T: Transport>(client: &ApiClient<T>, request: &RegisterRequest) -> Result<Option<User>, ApiError> {
    let auth: AuthResponse = client.post_json(REGISTER_ENDPOINT, request).await?;
    client.session().begin(&auth);
    Ok(auth.user)
}

/// End the local session. The gateway keeps no server-side session to revoke.
pub fn logout<T>(client: &ApiClient<T>) {
    client.session().clear();
}

/// List the catalog via `GET /api/products`.
///
/// # Errors
///
/// Returns a status, transport or decode error.
pub async fn fetch_products<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Product>, ApiError> {
    client.get_json(PRODUCTS_ENDPOINT).await
}

/// Fetch one product via `GET /api/products/{id}`.
///
/// # Errors
///
/// Returns `ApiError::Status` with 404 for unknown ids.
pub async fn fetch_product<T: Transport>(client: &ApiClient<T>, id: i64) -> Result<Product, ApiError> {
    client.get_json(&product_endpoint(id)).await
}

/// Search the catalog via `GET /api/products/search?term=...`.
///
/// # Errors
///
/// Returns a status, transport or decode error.
pub async fn search_products<T: Transport>(client: &ApiClient<T>, term: &str) -> Result<Vec<Product>, ApiError> {
    client.get_json(&product_search_endpoint(term)).await
}

/// Fetch the signed-in user's cart via `GET /api/carts/current`.
///
/// # Errors
///
/// Returns a status, transport or decode error.
pub async fn fetch_current_cart<T: Transport>(client: &ApiClient<T>) -> Result<Cart, ApiError> {
    client.get_json(CURRENT_CART_ENDPOINT).await
}

/// Add a line to the current cart via `POST /api/carts/current/items`.
///
/// # Errors
///
/// Returns a status, transport or decode error.
pub async fn add_cart_item<T: Transport>(client: &ApiClient<T>, item: &AddCartItem) -> Result<Cart, ApiError> {
    client.post_json(CURRENT_CART_ITEMS_ENDPOINT, item).await
}
