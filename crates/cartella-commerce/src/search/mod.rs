//! Search module.
//!
//! Contains the client-side filter engine and the derived landing-page shelves.

mod filter;
mod views;

pub use filter::{apply_filters, categories, price_bounds, FilterCriteria};
pub use views::{
    best_sellers, featured, in_categories, BEST_SELLER_MIN_RATINGS, ELECTRONICS_CATEGORIES,
};
