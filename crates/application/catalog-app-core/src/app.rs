use catalog_infra::ProductsClient;

use crate::app_core::AppStore;
use crate::domain::CatalogState;
use crate::kernel::AppKernel;
use crate::view::ProductListView;
use crate::viewmodel::Presentation;

/// The product list wired to the real HTTP catalog.
pub type CatalogApplication = ProductListView<ProductsClient>;

impl ProductListView<ProductsClient> {
    /// Connects to the default public catalog endpoint.
    pub fn connect(presentation: Presentation) -> anyhow::Result<Self> {
        Self::connect_to(catalog_config::DEFAULT_PRODUCTS_ENDPOINT, presentation)
    }

    pub fn connect_to(endpoint: &str, presentation: Presentation) -> anyhow::Result<Self> {
        let http = catalog_infra::default_http_client()?;
        let client = ProductsClient::new(http, endpoint)?;
        tracing::debug!("catalog endpoint: {}", client.endpoint());

        let store = AppStore::new(CatalogState::default());
        let kernel = AppKernel::new(store, client)?;
        Ok(Self::new(kernel, presentation))
    }
}
