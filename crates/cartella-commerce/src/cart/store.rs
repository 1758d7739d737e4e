//! Session cart and wishlist.

use crate::cart::{CartItem, WishlistItem};
use crate::catalog::Product;
use crate::ids::ProductId;
use chrono::Utc;
use tracing::debug;

/// Cart and wishlist for a single browsing session.
///
/// Both collections are keyed by product id and hold at most one entry per
/// id. Nothing here is persisted; dropping the store discards the session.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    cart: Vec<CartItem>,
    wishlist: Vec<WishlistItem>,
}

impl CartStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// If the product is already in the cart only its quantity changes;
    /// otherwise a new entry with quantity 1 is appended.
    pub fn add_to_cart(&mut self, product: &Product) {
        if let Some(existing) = self.cart.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            debug!(product_id = %product.id, quantity = existing.quantity, "cart quantity increased");
            return;
        }

        self.cart.push(CartItem::new(product.clone(), Utc::now()));
        debug!(product_id = %product.id, "added to cart");
    }

    /// Remove a product from the cart regardless of quantity.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> bool {
        let len_before = self.cart.len();
        self.cart.retain(|i| &i.product.id != id);
        let removed = self.cart.len() < len_before;
        if removed {
            debug!(product_id = %id, "removed from cart");
        }
        removed
    }

    /// Take one unit off. The last unit removes the entry.
    pub fn decrease_quantity(&mut self, id: &ProductId) -> bool {
        let Some(item) = self.cart.iter_mut().find(|i| &i.product.id == id) else {
            return false;
        };

        if item.quantity > 1 {
            item.quantity -= 1;
            true
        } else {
            self.remove_from_cart(id)
        }
    }

    /// Set an absolute quantity. Zero or negative removes the entry.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_from_cart(id);
        }

        match self.cart.iter_mut().find(|i| &i.product.id == id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Empty the cart. The wishlist is untouched.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Save a product to the wishlist. Already saved products are left as-is.
    pub fn add_to_wishlist(&mut self, product: &Product) -> bool {
        if self.is_in_wishlist(&product.id) {
            return false;
        }
        self.wishlist
            .push(WishlistItem::new(product.clone(), Utc::now()));
        true
    }

    /// Remove a product from the wishlist.
    pub fn remove_from_wishlist(&mut self, id: &ProductId) -> bool {
        let len_before = self.wishlist.len();
        self.wishlist.retain(|i| &i.product.id != id);
        self.wishlist.len() < len_before
    }

    /// Empty the wishlist.
    pub fn clear_wishlist(&mut self) {
        self.wishlist.clear();
    }

    pub fn is_in_cart(&self, id: &ProductId) -> bool {
        self.cart.iter().any(|i| &i.product.id == id)
    }

    pub fn is_in_wishlist(&self, id: &ProductId) -> bool {
        self.wishlist.iter().any(|i| &i.product.id == id)
    }

    /// Total units in the cart (sum of quantities).
    pub fn cart_count(&self) -> i64 {
        self.cart.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct products in the cart.
    pub fn unique_item_count(&self) -> usize {
        self.cart.len()
    }

    /// Sum of line totals.
    pub fn cart_subtotal(&self) -> f64 {
        self.cart.iter().map(CartItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn cart_item(&self, id: &ProductId) -> Option<&CartItem> {
        self.cart.iter().find(|i| &i.product.id == id)
    }

    /// Cart entries in the order they were first added.
    pub fn cart_items(&self) -> &[CartItem] {
        &self.cart
    }

    /// Wishlist entries in the order they were saved.
    pub fn wishlist_items(&self) -> &[WishlistItem] {
        &self.wishlist
    }
}
