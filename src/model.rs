use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: u64,
    /// Missing upstream for some catalog entries (groceries, mostly).
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    pub fn has_discount(&self) -> bool {
        self.discount_percentage > 0.0
    }
}

/// Envelope returned by the list and search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_upstream_product_with_missing_optionals() {
        let json = r#"{
            "id": 16,
            "title": "Apple",
            "description": "Fresh and crisp apples.",
            "price": 1.99,
            "discountPercentage": 12.62,
            "rating": 2.96,
            "stock": 8,
            "category": "groceries",
            "thumbnail": "https://cdn.dummyjson.com/apple/thumbnail.png",
            "tags": ["fruits"]
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 16);
        assert_eq!(product.brand, "");
        assert!(product.images.is_empty());
        assert!(product.has_discount());
    }

    #[test]
    fn page_envelope_defaults_counters() {
        let page: ProductPage = serde_json::from_str(r#"{"products": []}"#).unwrap();
        assert!(page.products.is_empty());
        assert_eq!(page.total, 0);
    }
}
