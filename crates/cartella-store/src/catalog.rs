//! The in-memory product catalog.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use cartella_commerce::catalog::{
    to_canonical, to_remote, Product, ProductDraft, ProductPatch, Rating, RemoteProduct,
};
use cartella_commerce::ProductId;
use cartella_data::CatalogApi;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::error::CatalogError;
use crate::loading::LoadingState;

/// Sequence number handed to each catalog read when it is issued.
pub type Ticket = u64;

/// Owns the product list shown to the shopper.
///
/// Reads (`fetch_all`, `search`) replace the whole list from the remote
/// service. Each read takes a ticket when issued and its response is only
/// applied if no newer read has been issued since, so a slow response can
/// never overwrite the result of a later request.
///
/// `update`, `delete` and `rate` change the local list only. They are not
/// sent to the service and are lost on the next reload.
///
/// The list lock is never held across an `.await`.
pub struct CatalogStore<A: CatalogApi> {
    api: Arc<A>,
    products: RwLock<Vec<Product>>,
    issued: AtomicU64,
    loading: LoadingState,
}

impl<A: CatalogApi> CatalogStore<A> {
    /// Create an empty store over `api`.
    pub fn new(api: A) -> Self {
        Self::with_shared_api(Arc::new(api))
    }

    /// Create an empty store over an API handle that is shared elsewhere.
    pub fn with_shared_api(api: Arc<A>) -> Self {
        Self {
            api,
            products: RwLock::new(Vec::new()),
            issued: AtomicU64::new(0),
            loading: LoadingState::new(),
        }
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    /// Snapshot of the current list.
    pub fn products(&self) -> Vec<Product> {
        self.products.read().clone()
    }

    /// Look up a single product.
    pub fn get(&self, id: &ProductId) -> Option<Product> {
        self.products.read().iter().find(|p| &p.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.products.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.read().is_empty()
    }

    /// True while any catalog read is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Replace the list with the full remote catalog.
    ///
    /// On failure the list is left as it was.
    pub async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError> {
        let ticket = self.issue_ticket();
        let _loading = self.loading.enter();
        debug!(ticket, "fetching catalog");

        let records = self.api.list_products().await.map_err(|e| {
            warn!(ticket, error = %e, "catalog fetch failed");
            CatalogError::FetchFailed(e)
        })?;

        Ok(self.apply_read(ticket, records))
    }

    /// Replace the list with the remote results for `query`.
    ///
    /// A blank query reloads the full catalog instead.
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        if query.trim().is_empty() {
            return self.fetch_all().await;
        }

        let ticket = self.issue_ticket();
        let _loading = self.loading.enter();
        debug!(ticket, query, "searching catalog");

        let records = self.api.search_products(query).await.map_err(|e| {
            warn!(ticket, query, error = %e, "catalog search failed");
            CatalogError::SearchFailed(e)
        })?;

        Ok(self.apply_read(ticket, records))
    }

    /// Create a product remotely and put it at the front of the list.
    pub async fn create(&self, draft: &ProductDraft) -> Result<Product, CatalogError> {
        let payload = to_remote(draft)?;

        let created = self.api.create_product(&payload).await.map_err(|e| {
            warn!(name = %draft.name, error = %e, "product create failed");
            CatalogError::CreateFailed(e)
        })?;

        let product = to_canonical(created);
        self.products.write().insert(0, product.clone());
        info!(product_id = %product.id, "product created");
        Ok(product)
    }

    /// Merge `patch` into the product locally. Returns false for unknown ids.
    pub fn update(&self, id: &ProductId, patch: &ProductPatch) -> bool {
        let mut products = self.products.write();
        match products.iter_mut().find(|p| &p.id == id) {
            Some(product) => {
                product.apply_patch(patch, Utc::now());
                debug!(product_id = %id, "product updated locally");
                true
            }
            None => false,
        }
    }

    /// Drop the product from the local list. Returns false for unknown ids.
    pub fn delete(&self, id: &ProductId) -> bool {
        let mut products = self.products.write();
        let len_before = products.len();
        products.retain(|p| &p.id != id);
        let removed = products.len() < len_before;
        if removed {
            debug!(product_id = %id, "product deleted locally");
        }
        removed
    }

    /// Append an anonymous rating locally.
    ///
    /// Returns `Ok(false)` for unknown ids. Values outside 1-5 are rejected
    /// without touching the list.
    pub fn rate(&self, id: &ProductId, value: i64) -> Result<bool, CatalogError> {
        let rating = Rating::anonymous(value)?;
        let mut products = self.products.write();
        match products.iter_mut().find(|p| &p.id == id) {
            Some(product) => {
                product.user_ratings.push(rating);
                debug!(product_id = %id, value, "product rated locally");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn issue_ticket(&self) -> Ticket {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Install a read result if `ticket` is still the newest read issued.
    fn apply_read(&self, ticket: Ticket, records: Vec<RemoteProduct>) -> Vec<Product> {
        let mapped: Vec<Product> = records.into_iter().map(to_canonical).collect();
        let mut products = self.products.write();

        let latest = self.issued.load(Ordering::SeqCst);
        if ticket != latest {
            debug!(ticket, latest, "discarding superseded catalog response");
            return products.clone();
        }

        *products = mapped;
        debug!(ticket, count = products.len(), "catalog replaced");
        products.clone()
    }
}
