//! In-process catalog service for tests and offline demos.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use cartella_commerce::catalog::RemoteProduct;
use cartella_commerce::ProductId;
use parking_lot::RwLock;

use crate::{CatalogApi, FetchError};

/// A [`CatalogApi`] backed by a vector.
///
/// Search is a case-insensitive substring match over name, description,
/// brand and category. Newly created records are appended and given a
/// generated id when the payload has none.
#[derive(Debug, Default)]
pub struct InMemoryCatalogApi {
    records: RwLock<Vec<RemoteProduct>>,
    unavailable: AtomicBool,
    calls: AtomicUsize,
}

impl InMemoryCatalogApi {
    /// Create an empty service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service seeded with `records`.
    pub fn with_records(records: Vec<RemoteProduct>) -> Self {
        Self {
            records: RwLock::new(records),
            ..Default::default()
        }
    }

    /// Make every call fail with a 503 until switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Snapshot of the stored records.
    pub fn records(&self) -> Vec<RemoteProduct> {
        self.records.read().clone()
    }

    fn begin_call(&self) -> Result<(), FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(FetchError::HttpError {
                status: 503,
                message: "service unavailable".to_string(),
            });
        }
        Ok(())
    }
}

fn matches(record: &RemoteProduct, needle: &str) -> bool {
    let fields = [
        Some(record.name.as_str()),
        record.description.as_deref(),
        record.brand.as_deref(),
        Some(record.category.as_str()),
    ];
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

#[async_trait]
impl CatalogApi for InMemoryCatalogApi {
    async fn list_products(&self) -> Result<Vec<RemoteProduct>, FetchError> {
        self.begin_call()?;
        Ok(self.records.read().clone())
    }

    async fn search_products(&self, query: &str) -> Result<Vec<RemoteProduct>, FetchError> {
        self.begin_call()?;
        let needle = query.trim().to_lowercase();
        Ok(self
            .records
            .read()
            .iter()
            .filter(|r| matches(r, &needle))
            .cloned()
            .collect())
    }

    async fn create_product(&self, product: &RemoteProduct) -> Result<RemoteProduct, FetchError> {
        self.begin_call()?;
        let mut created = product.clone();
        if created.id.is_none() {
            created.id = Some(ProductId::generate());
        }
        self.records.write().push(created.clone());
        Ok(created)
    }
}
