//! Product-list state for the catalog page.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::ApiError;
use crate::net::types::Product;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub items: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CatalogState {
    /// Mark a fetch as started, keeping the current items visible.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the outcome of a product fetch.
    pub fn apply(&mut self, outcome: Result<Vec<Product>, ApiError>) {
        self.loading = false;
        match outcome {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => self.error = Some(err.user_message()),
        }
    }
}
