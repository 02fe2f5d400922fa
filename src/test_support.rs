//! Fixtures and an in-memory [`CatalogApi`] for unit tests.

use crate::api::CatalogApi;
use crate::error::CatalogError;
use crate::model::Product;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

pub fn product(id: u64, title: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: format!("Description of {}", title),
        price: 10.0 * id as f64 + 0.99,
        discount_percentage: 0.0,
        rating: 4.5,
        stock: 20,
        brand: "Acme".to_string(),
        category: "smartphones".to_string(),
        thumbnail: format!("https://cdn.example.com/{}/thumbnail.png", id),
        images: Vec::new(),
    }
}

pub fn product_with_images(id: u64, images: usize) -> Product {
    let mut p = product(id, &format!("Product {}", id));
    p.images = (1..=images)
        .map(|n| format!("https://cdn.example.com/{}/{}.png", id, n))
        .collect();
    p
}

pub fn products(count: u64) -> Vec<Product> {
    (1..=count)
        .map(|id| product(id, &format!("Product {}", id)))
        .collect()
}

/// Scripted replies; an `Err(status)` becomes [`CatalogError::Http`].
type Reply<T> = Result<T, u16>;

#[derive(Default)]
pub struct StubCatalog {
    list: Mutex<Option<Reply<Vec<Product>>>>,
    searches: Mutex<HashMap<String, Reply<Vec<Product>>>>,
    details: Mutex<HashMap<u64, Reply<Product>>>,
    list_calls: Mutex<usize>,
    search_calls: Mutex<Vec<String>>,
    product_calls: Mutex<Vec<u64>>,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(self, reply: Reply<Vec<Product>>) -> Self {
        *self.list.lock().unwrap() = Some(reply);
        self
    }

    pub fn set_list(&self, reply: Reply<Vec<Product>>) {
        *self.list.lock().unwrap() = Some(reply);
    }

    pub fn with_search(self, query: &str, reply: Reply<Vec<Product>>) -> Self {
        self.searches
            .lock()
            .unwrap()
            .insert(query.to_string(), reply);
        self
    }

    pub fn with_product(self, product: Product) -> Self {
        self.details.lock().unwrap().insert(product.id, Ok(product));
        self
    }

    pub fn with_product_error(self, id: u64, status: u16) -> Self {
        self.details.lock().unwrap().insert(id, Err(status));
        self
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }

    pub fn product_calls(&self) -> Vec<u64> {
        self.product_calls.lock().unwrap().clone()
    }
}

fn http_error(status: u16) -> CatalogError {
    CatalogError::Http {
        status,
        message: status.to_string(),
    }
}

#[async_trait]
impl CatalogApi for StubCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        *self.list_calls.lock().unwrap() += 1;
        match self.list.lock().unwrap().clone() {
            Some(reply) => reply.map_err(http_error),
            None => Ok(Vec::new()),
        }
    }

    async fn get_product(&self, id: u64) -> Result<Product, CatalogError> {
        self.product_calls.lock().unwrap().push(id);
        match self.details.lock().unwrap().get(&id).cloned() {
            Some(reply) => reply.map_err(http_error),
            None => Err(CatalogError::NotFound(id)),
        }
    }

    async fn search_products(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        self.search_calls.lock().unwrap().push(query.to_string());
        match self.searches.lock().unwrap().get(query).cloned() {
            Some(reply) => reply.map_err(http_error),
            None => Ok(Vec::new()),
        }
    }
}
