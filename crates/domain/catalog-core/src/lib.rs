use serde::{Deserialize, Serialize};

pub mod formats;
pub mod preview;

pub use preview::{description_preview, price_label, EllipsisPolicy};

pub type ProductId = u64;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// A catalog entry as held by the store. `image_url` always mirrors `image`.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub image_url: String,
    pub category: Option<String>,
    pub rating: Option<Rating>,
}

impl Product {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        let image = image.into();
        Self {
            id,
            title: title.into(),
            price,
            description: description.into(),
            image_url: image.clone(),
            image,
            category: None,
            rating: None,
        }
    }
}
