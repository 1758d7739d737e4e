//! Derived shelves shown on the storefront landing page.

use crate::catalog::Product;

/// Products that need more ratings than this to count as best sellers.
pub const BEST_SELLER_MIN_RATINGS: usize = 2;

/// Categories shown on the electronics shelf.
pub const ELECTRONICS_CATEGORIES: [&str; 4] = ["phone", "earphone", "laptop", "watches"];

/// New or discounted products, in catalog order.
pub fn featured(products: &[Product]) -> Vec<Product> {
    products.iter().filter(|p| p.is_featured()).cloned().collect()
}

/// Products with more than [`BEST_SELLER_MIN_RATINGS`] ratings, most rated first.
///
/// Ties keep catalog order.
pub fn best_sellers(products: &[Product]) -> Vec<Product> {
    let mut sellers: Vec<Product> = products
        .iter()
        .filter(|p| p.rating_count() > BEST_SELLER_MIN_RATINGS)
        .cloned()
        .collect();
    sellers.sort_by(|a, b| b.rating_count().cmp(&a.rating_count()));
    sellers
}

/// Products whose category matches one of `names`, ignoring case.
pub fn in_categories(products: &[Product], names: &[&str]) -> Vec<Product> {
    let names: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
    products
        .iter()
        .filter(|p| names.contains(&p.category.to_lowercase()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Rating;

    fn with_ratings(id: &str, count: usize) -> Product {
        let mut p = Product::new(id, id, "Misc", 1.0);
        p.user_ratings = (0..count).map(|_| Rating::anonymous(5).unwrap()).collect();
        p
    }

    #[test]
    fn test_featured() {
        let mut fresh = Product::new("n", "n", "Misc", 1.0);
        fresh.is_new = true;
        let mut sale = Product::new("s", "s", "Misc", 1.0);
        sale.is_sale = true;
        let plain = Product::new("p", "p", "Misc", 1.0);

        let shelf = featured(&[fresh, plain, sale]);
        let ids: Vec<_> = shelf.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["n", "s"]);
    }

    #[test]
    fn test_best_sellers_sorted_and_stable() {
        let products = vec![
            with_ratings("two", 2),
            with_ratings("three-a", 3),
            with_ratings("five", 5),
            with_ratings("three-b", 3),
        ];
        let shelf = best_sellers(&products);
        let ids: Vec<_> = shelf.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["five", "three-a", "three-b"]);
    }

    #[test]
    fn test_in_categories_ignores_case() {
        let products = vec![
            Product::new("a", "a", "Phone", 1.0),
            Product::new("b", "b", "shoes", 1.0),
            Product::new("c", "c", "LAPTOP", 1.0),
        ];
        let shelf = in_categories(&products, &["phone", "laptop"]);
        assert_eq!(shelf.len(), 2);
    }

    #[test]
    fn test_in_categories_folds_unicode_case() {
        let products = vec![
            Product::new("a", "a", "ÉLECTRONIQUE", 1.0),
            Product::new("b", "b", "Straße", 1.0),
            Product::new("c", "c", "Shoes", 1.0),
        ];
        let shelf = in_categories(&products, &["électronique", "STRAßE"]);
        let ids: Vec<_> = shelf.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }
}
