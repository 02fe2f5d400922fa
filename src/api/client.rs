use super::CatalogApi;
use crate::config::AppConfig;
use crate::error::CatalogError;
use crate::model::{Product, ProductPage};
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("catalog-cli/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    pub fn new(config: &AppConfig) -> Result<Self, CatalogError> {
        Self::build(config.base_url.clone(), config.timeout)
    }

    /// Client rooted at an arbitrary URL, e.g. a local mock server.
    pub fn with_base_url(base_url: &str) -> Result<Self, CatalogError> {
        Self::build(AppConfig::validate_base_url(base_url)?, None)
    }

    fn build(base_url: Url, timeout: Option<Duration>) -> Result<Self, CatalogError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, CatalogError> {
        self.base_url
            .join(path)
            .map_err(|e| CatalogError::Config(format!("Failed to build URL for {}: {}", path, e)))
    }

    pub fn search_url(&self, query: &str) -> Result<Url, CatalogError> {
        let mut url = self.endpoint("products/search")?;
        url.query_pairs_mut().append_pair("q", query);
        Ok(url)
    }

    async fn get_body(&self, url: Url) -> Result<String, CatalogError> {
        tracing::debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CatalogError::Http {
                status: status.as_u16(),
                message: upstream_message(&body),
            });
        }
        Ok(body)
    }

    async fn get_page(&self, url: Url) -> Result<Vec<Product>, CatalogError> {
        let body = self.get_body(url).await?;
        let page: ProductPage = serde_json::from_str(&body)?;
        Ok(page.products)
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = self.endpoint("products")?;
        let result = self.get_page(url).await;
        match &result {
            Ok(products) => tracing::info!(count = products.len(), "Fetched product list"),
            Err(e) => tracing::error!(error = %e, "Error fetching products"),
        }
        result
    }

    async fn get_product(&self, id: u64) -> Result<Product, CatalogError> {
        let url = self.endpoint(&format!("products/{}", id))?;
        let result = match self.get_body(url).await {
            Ok(body) => serde_json::from_str::<Option<Product>>(&body)
                .map_err(CatalogError::from)
                .and_then(|product| product.ok_or(CatalogError::NotFound(id))),
            Err(CatalogError::Http { status: 404, .. }) => Err(CatalogError::NotFound(id)),
            Err(e) => Err(e),
        };
        if let Err(ref e) = result {
            tracing::error!(id, error = %e, "Error fetching product");
        }
        result
    }

    async fn search_products(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        let url = self.search_url(query)?;
        let result = self.get_page(url).await;
        match &result {
            Ok(products) => {
                tracing::info!(query, count = products.len(), "Fetched search results")
            }
            Err(e) => tracing::error!(query, error = %e, "Error searching products"),
        }
        result
    }
}

/// dummyjson reports failures as `{"message": "..."}`; fall back to the raw body.
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| body.trim().to_string())
}
