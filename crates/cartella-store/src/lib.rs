//! Catalog state store and storefront handle for Cartella.
//!
//! This crate provides:
//! - `CatalogStore` - the product list, remote reads and creates, local edits
//! - `LoadingState` - in-flight read tracking with a drop guard
//! - `StorefrontConfig` - service and log settings
//! - `Storefront` - one session's catalog and cart, injected into views
//!
//! # Example
//!
//! ```rust,ignore
//! use cartella_data::{FetchClient, HttpCatalogApi};
//! use cartella_store::Storefront;
//!
//! let api = HttpCatalogApi::new(FetchClient::new().with_base_url("http://localhost:8000"));
//! let storefront = Storefront::new(api);
//!
//! storefront.catalog().fetch_all().await?;
//! let first = storefront.catalog().products()[0].id.clone();
//! storefront.add_to_cart(&first)?;
//! ```

mod catalog;
mod config;
mod error;
mod loading;
mod storefront;

pub use catalog::{CatalogStore, Ticket};
pub use config::{
    ApiConfig, LogConfig, LogFormat, StorefrontConfig, API_URL_ENV, DEFAULT_API_URL,
};
pub use error::CatalogError;
pub use loading::{LoadingGuard, LoadingState};
pub use storefront::Storefront;
