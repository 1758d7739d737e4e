//! Cart and wishlist entries.

use crate::catalog::Product;
use crate::ids::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Snapshot of the product when it was first added.
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1 while the item is in the cart.
    pub quantity: i64,
    /// When the product was first added.
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub(crate) fn new(product: Product, added_at: DateTime<Utc>) -> Self {
        Self {
            product,
            quantity: 1,
            added_at,
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

/// A product saved for later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    #[serde(flatten)]
    pub product: Product,
    pub added_at: DateTime<Utc>,
}

impl WishlistItem {
    pub(crate) fn new(product: Product, added_at: DateTime<Utc>) -> Self {
        Self { product, added_at }
    }

    pub fn id(&self) -> &ProductId {
        &self.product.id
    }
}
