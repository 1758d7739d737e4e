//! Shopping cart module.
//!
//! Contains the session cart and wishlist and their entry types.

mod item;
mod store;

pub use item::{CartItem, WishlistItem};
pub use store::CartStore;
