//! Wire DTOs for the storefront gateway.
//!
//! DESIGN
//! ======
//! Field names mirror the gateway's camelCase JSON. Optional server fields
//! use `#[serde(default)]` so partially populated payloads still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user profile, also persisted as the session user record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub active: bool,
    /// Role names (e.g. `"ROLE_USER"`).
    #[serde(default)]
    pub roles: Vec<String>,
}

impl User {
    /// "First Last", falling back to the email when both names are blank.
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() { self.email.clone() } else { name.to_owned() }
    }
}

/// Token pair plus profile returned by login and register.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    /// Units in stock, when the catalog reports it.
    #[serde(default)]
    pub quantity: Option<i32>,
}

/// The current user's cart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub total_items: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i32,
    pub price: f64,
    #[serde(default)]
    pub subtotal: f64,
}

/// Payload for adding a product to the current cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItem {
    pub product_id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

impl AddCartItem {
    #[must_use]
    pub fn for_product(product: &Product, quantity: i32) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity,
        }
    }
}

/// Error body the gateway services send alongside non-2xx statuses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
