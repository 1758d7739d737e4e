//! Catalog, cart and filter domain logic for the Cartella storefront.
//!
//! This crate holds everything that does not talk to the network:
//!
//! - **Catalog**: the canonical [`Product`](catalog::Product), ratings, and the
//!   mapping to and from the remote service's record shape
//! - **Cart**: the session cart and wishlist with their quantity and
//!   uniqueness rules
//! - **Search**: the client-side filter engine and landing-page shelves
//!
//! # Example
//!
//! ```rust
//! use cartella_commerce::prelude::*;
//!
//! let shoe = Product::new("p1", "Trail Runner", "Shoes", 89.0);
//!
//! let mut store = CartStore::new();
//! store.add_to_cart(&shoe);
//! store.add_to_cart(&shoe);
//! assert_eq!(store.cart_count(), 2);
//!
//! let criteria = FilterCriteria::new(0.0, 100.0).with_category("Shoes");
//! assert_eq!(apply_filters(&criteria, &[shoe]).len(), 1);
//! ```

pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;

    // Catalog
    pub use crate::catalog::{
        to_canonical, to_remote, Gender, PriceInput, Product, ProductDraft, ProductPatch,
        Rating, RemoteProduct,
    };

    // Cart
    pub use crate::cart::{CartItem, CartStore, WishlistItem};

    // Search
    pub use crate::search::{apply_filters, FilterCriteria};
}
