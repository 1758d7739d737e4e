//! Catalog store error types.

use cartella_commerce::CommerceError;
use cartella_data::FetchError;
use thiserror::Error;

/// Errors reported by the catalog store.
///
/// Remote failures never leave the product list half-written: by the time
/// one of these reaches the caller the list is exactly what it was before
/// the call.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Loading the full catalog failed.
    #[error("Failed to load products")]
    FetchFailed(#[source] FetchError),

    /// A search request failed.
    #[error("Search failed")]
    SearchFailed(#[source] FetchError),

    /// The remote service rejected or never answered a create.
    #[error("Failed to create product")]
    CreateFailed(#[source] FetchError),

    /// Input was rejected before anything was sent or changed.
    #[error(transparent)]
    Validation(#[from] CommerceError),
}

impl CatalogError {
    /// Whether the failure came from the network rather than from input.
    pub fn is_remote(&self) -> bool {
        !matches!(self, CatalogError::Validation(_))
    }
}
