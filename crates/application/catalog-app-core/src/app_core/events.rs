use catalog_core::Product;
use chrono::{DateTime, Utc};

/// The only ways the catalog state can change.
#[derive(Debug, Clone)]
pub enum DomainEvent {
    ProductsRequested,
    ProductsLoaded {
        products: Vec<Product>,
        fetched_at: DateTime<Utc>,
    },
    ProductsFailed {
        message: String,
    },
}
