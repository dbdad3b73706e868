use catalog_core::Product;

/// Anything that can produce the product catalog with a single read.
#[async_trait::async_trait]
pub trait ProductSource: Send + Sync + 'static {
    async fn fetch_products(&self) -> anyhow::Result<Vec<Product>>;
}
