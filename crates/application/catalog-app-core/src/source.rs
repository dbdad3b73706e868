use catalog_core::Product;
use catalog_infra::ProductsClient;

use crate::ports::ProductSource;

#[async_trait::async_trait]
impl ProductSource for ProductsClient {
    async fn fetch_products(&self) -> anyhow::Result<Vec<Product>> {
        Ok(ProductsClient::fetch_products(self).await?)
    }
}
