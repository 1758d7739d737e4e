//! Product catalog module.
//!
//! Contains the canonical product record, ratings, and the mapping to and
//! from the remote service's record shape.

mod mapping;
mod product;
mod rating;
mod timestamp;

pub use mapping::{to_canonical, to_remote, PriceInput, ProductDraft, RemoteProduct};
pub use product::{Gender, Product, ProductPatch, PLACEHOLDER_IMAGE, UNKNOWN_COMPANY};
pub use rating::{average, Rating, MAX_RATING, MIN_RATING};
