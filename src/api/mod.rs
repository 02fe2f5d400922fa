//! Remote catalog access.
//!
//! [`CatalogApi`] is the seam the screens fetch through; [`CatalogClient`] is
//! the reqwest-backed implementation talking to dummyjson.com.

mod client;

pub use client::CatalogClient;

use crate::error::CatalogError;
use crate::model::Product;
use async_trait::async_trait;

#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /products`
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// `GET /products/{id}`. Absent records surface as [`CatalogError::NotFound`].
    async fn get_product(&self, id: u64) -> Result<Product, CatalogError>;

    /// `GET /products/search?q=...`; an empty result is not an error.
    async fn search_products(&self, query: &str) -> Result<Vec<Product>, CatalogError>;
}
