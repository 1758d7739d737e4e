//! A shopping session: one catalog and one cart, wired together explicitly.

use std::sync::Arc;

use cartella_commerce::cart::CartStore;
use cartella_commerce::catalog::Product;
use cartella_commerce::search::{apply_filters, FilterCriteria};
use cartella_commerce::{CommerceError, ProductId};
use cartella_data::CatalogApi;
use parking_lot::{Mutex, MutexGuard};

use crate::catalog::CatalogStore;

/// Handles for a single browsing session.
///
/// Views receive a `Storefront` (or just the store they need) at
/// construction; there is no ambient global instance.
pub struct Storefront<A: CatalogApi> {
    catalog: CatalogStore<A>,
    cart: Mutex<CartStore>,
}

impl<A: CatalogApi> Storefront<A> {
    /// Start a session against `api` with an empty catalog and cart.
    pub fn new(api: A) -> Self {
        Self::with_shared_api(Arc::new(api))
    }

    pub fn with_shared_api(api: Arc<A>) -> Self {
        Self {
            catalog: CatalogStore::with_shared_api(api),
            cart: Mutex::new(CartStore::new()),
        }
    }

    pub fn catalog(&self) -> &CatalogStore<A> {
        &self.catalog
    }

    /// Lock the cart for reading or mutation.
    ///
    /// Do not hold the guard across an `.await`.
    pub fn cart(&self) -> MutexGuard<'_, CartStore> {
        self.cart.lock()
    }

    /// Add one unit of a catalog product to the cart.
    pub fn add_to_cart(&self, id: &ProductId) -> Result<(), CommerceError> {
        let product = self.lookup(id)?;
        self.cart.lock().add_to_cart(&product);
        Ok(())
    }

    /// Save a catalog product to the wishlist. Returns false if already saved.
    pub fn add_to_wishlist(&self, id: &ProductId) -> Result<bool, CommerceError> {
        let product = self.lookup(id)?;
        Ok(self.cart.lock().add_to_wishlist(&product))
    }

    /// The current catalog list narrowed by `criteria`.
    pub fn visible_products(&self, criteria: &FilterCriteria) -> Vec<Product> {
        apply_filters(criteria, &self.catalog.products())
    }

    fn lookup(&self, id: &ProductId) -> Result<Product, CommerceError> {
        self.catalog
            .get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }
}
