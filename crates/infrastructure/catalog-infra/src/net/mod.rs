use catalog_core::formats::parse_catalog;
use catalog_core::Product;
use reqwest::{Client, Url};
use tracing::{debug, warn};

/// Everything that can go wrong while loading the catalog.
///
/// Callers that only surface a message can rely on `Display`; the variants
/// exist so logs can tell a dead network from a bad payload.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("Request failed with status code {0}")]
    Status(u16),
    #[error("{0}")]
    Decode(String),
}

/// HTTP client with the catalog user agent. No request timeout is set:
/// a stalled request stays pending until the server gives up.
pub fn default_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(catalog_config::USER_AGENT)
        .build()
}

/// Reads the product catalog from a single fixed endpoint.
#[derive(Debug, Clone)]
pub struct ProductsClient {
    client: Client,
    endpoint: Url,
}

impl ProductsClient {
    pub fn new(client: Client, endpoint: &str) -> Result<Self, FetchError> {
        let endpoint = Url::parse(endpoint).map_err(|e| FetchError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { client, endpoint })
    }

    pub fn with_default_endpoint(client: Client) -> Result<Self, FetchError> {
        Self::new(client, catalog_config::DEFAULT_PRODUCTS_ENDPOINT)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// One GET against the endpoint. Non-2xx statuses are failures; the
    /// body is decoded in response order with `image_url` filled from `image`.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        debug!("GET {}", self.endpoint);

        let resp = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .inspect_err(|e| warn!("catalog request to {} failed: {e}", self.endpoint))?;

        let status = resp.status();
        if !status.is_success() {
            warn!("catalog request to {} returned {status}", self.endpoint);
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = resp.bytes().await?;
        let products =
            parse_catalog(&bytes).map_err(|e| FetchError::Decode(e.to_string()))?;
        debug!("decoded {} products", products.len());
        Ok(products)
    }
}
