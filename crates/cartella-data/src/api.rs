//! Remote catalog service.

use async_trait::async_trait;
use cartella_commerce::catalog::RemoteProduct;
use tracing::debug;

use crate::{FetchClient, FetchError};

/// The three calls the storefront makes against the catalog service.
///
/// Records are returned in the service's own shape; mapping to the canonical
/// product is the caller's job.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /products`: the full catalog.
    async fn list_products(&self) -> Result<Vec<RemoteProduct>, FetchError>;

    /// `GET /search?q=`: products matching `query`.
    async fn search_products(&self, query: &str) -> Result<Vec<RemoteProduct>, FetchError>;

    /// `POST /products`: create a product and return the stored record.
    async fn create_product(&self, product: &RemoteProduct) -> Result<RemoteProduct, FetchError>;
}

/// [`CatalogApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: FetchClient,
}

impl HttpCatalogApi {
    /// Wrap a client. The client's base URL should point at the service root.
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &FetchClient {
        &self.client
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn list_products(&self) -> Result<Vec<RemoteProduct>, FetchError> {
        let records: Vec<RemoteProduct> = self
            .client
            .get("/products")
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?
            .json()?;
        debug!(count = records.len(), "listed products");
        Ok(records)
    }

    async fn search_products(&self, query: &str) -> Result<Vec<RemoteProduct>, FetchError> {
        let records: Vec<RemoteProduct> = self
            .client
            .get("/search")
            .query("q", query)
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?
            .json()?;
        debug!(query, count = records.len(), "searched products");
        Ok(records)
    }

    async fn create_product(&self, product: &RemoteProduct) -> Result<RemoteProduct, FetchError> {
        let created: RemoteProduct = self
            .client
            .post("/products")
            .json(product)?
            .send()
            .await?
            .error_for_status()?
            .json()?;
        debug!(id = ?created.id, "created product");
        Ok(created)
    }
}
