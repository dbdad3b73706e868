use catalog_core::Product;
use chrono::{DateTime, Utc};

/// Where the catalog is in its load cycle. Exactly one holds at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    #[default]
    Ready,
    Loading,
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub status: CatalogStatus,

    /// Bumped every time `products` is replaced by a successful load.
    pub revision: u64,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl CatalogState {
    pub fn loading(&self) -> bool {
        matches!(self.status, CatalogStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            CatalogStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.status, CatalogStatus::Ready)
    }
}
