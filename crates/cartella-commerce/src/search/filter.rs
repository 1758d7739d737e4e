//! Client-side product filtering.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Multi-criteria filter applied to the displayed product list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Accepted categories. Empty accepts every category.
    #[serde(default)]
    pub categories: HashSet<String>,
    /// Inclusive `[min, max]` price window. Always enforced.
    pub price_range: (f64, f64),
    /// Minimum average rating. 0 disables the rating check.
    #[serde(default)]
    pub rating: f64,
}

impl FilterCriteria {
    /// Criteria that only restrict price.
    pub fn new(min_price: f64, max_price: f64) -> Self {
        Self {
            categories: HashSet::new(),
            price_range: (min_price, max_price),
            rating: 0.0,
        }
    }

    /// Criteria that let every product in `products` through.
    ///
    /// The price window spans the observed prices, which is how callers
    /// switch the price check off.
    pub fn unrestricted(products: &[Product]) -> Self {
        let (min, max) = price_bounds(products).unwrap_or((0.0, 0.0));
        Self::new(min, max)
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.extend(categories.into_iter().map(Into::into));
        self
    }

    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Whether a single product passes every predicate.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product) && self.matches_price(product) && self.matches_rating(product)
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.categories.is_empty() || self.categories.contains(&product.category)
    }

    fn matches_price(&self, product: &Product) -> bool {
        let (min, max) = self.price_range;
        product.price >= min && product.price <= max
    }

    fn matches_rating(&self, product: &Product) -> bool {
        self.rating <= 0.0 || product.average_rating() >= self.rating
    }
}

/// Products passing `criteria`, in their original relative order.
pub fn apply_filters(criteria: &FilterCriteria, products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}

/// Lowest and highest price in the list, or `None` when it is empty.
pub fn price_bounds(products: &[Product]) -> Option<(f64, f64)> {
    products.iter().map(|p| p.price).fold(None, |acc, price| match acc {
        None => Some((price, price)),
        Some((min, max)) => Some((min.min(price), max.max(price))),
    })
}

/// Distinct categories in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|p| seen.insert(p.category.as_str()))
        .map(|p| p.category.clone())
        .collect()
}
