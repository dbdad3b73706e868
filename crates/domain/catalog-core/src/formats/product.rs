use crate::{Product, ProductId, Rating};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Product record as served by the catalog API.
///
/// Only `id`, `title`, `price`, `description` and `image` are required;
/// anything else the API adds is ignored unless listed here.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProductExternal {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub rating: Option<Rating>,
}

impl From<ProductExternal> for Product {
    fn from(p: ProductExternal) -> Product {
        Product {
            id: p.id,
            title: p.title,
            price: p.price,
            description: p.description,
            image_url: p.image.clone(),
            image: p.image,
            category: p.category,
            rating: p.rating,
        }
    }
}

/// Decode a catalog response body into products, preserving response order.
pub fn parse_catalog(data: &[u8]) -> Result<Vec<Product>> {
    // Tolerate a UTF-8 BOM and leading whitespace ahead of the array.
    let mut start = 0usize;
    if data.starts_with(&[0xEF, 0xBB, 0xBF]) {
        start = 3;
    }
    while start < data.len() && data[start].is_ascii_whitespace() {
        start += 1;
    }
    let records: Vec<ProductExternal> = serde_json::from_slice(&data[start..])
        .map_err(|e| anyhow::anyhow!("failed to parse product catalog: {e}"))?;
    Ok(records.into_iter().map(Product::from).collect())
}
