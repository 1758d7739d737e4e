//! Canonical product record.

use crate::catalog::rating::{self, Rating};
use crate::ids::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Brand label used when the source omits one.
pub const UNKNOWN_COMPANY: &str = "Unknown";

/// Image used when the source omits one.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/400";

/// Target audience label.
///
/// The well-known labels get their own variants; anything else the remote
/// service sends is kept verbatim so it survives a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Men,
    Women,
    Kids,
    #[default]
    Unisex,
    Other(String),
}

impl Gender {
    pub fn as_str(&self) -> &str {
        match self {
            Gender::Men => "men",
            Gender::Women => "women",
            Gender::Kids => "kids",
            Gender::Unisex => "unisex",
            Gender::Other(label) => label,
        }
    }

    /// Parse a label. Known labels match case-insensitively; blank input is unisex.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "men" => Gender::Men,
            "women" => Gender::Women,
            "kids" => Gender::Kids,
            "unisex" | "" => Gender::Unisex,
            _ => Gender::Other(trimmed.to_string()),
        }
    }
}

impl From<String> for Gender {
    fn from(s: String) -> Self {
        Gender::parse(&s)
    }
}

impl From<Gender> for String {
    fn from(g: Gender) -> Self {
        g.as_str().to_string()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product in the catalog, in the engine's canonical shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque identifier, unique across the catalog.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Non-negative amount.
    pub price: f64,
    /// Brand or manufacturer.
    pub company: String,
    pub category: String,
    /// Image URI.
    pub image: String,
    /// Ratings in submission order.
    #[serde(default)]
    pub user_ratings: Vec<Rating>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_sale: bool,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Creation time reported by the remote service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Set by local edits only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Create a product with the catalog defaults for every optional field.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            company: UNKNOWN_COMPANY.to_string(),
            category: category.into(),
            image: PLACEHOLDER_IMAGE.to_string(),
            user_ratings: Vec::new(),
            is_new: false,
            is_sale: false,
            gender: Gender::Unisex,
            color: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Mean star rating, 0 when nobody has rated the product.
    pub fn average_rating(&self) -> f64 {
        rating::average(&self.user_ratings)
    }

    /// Number of ratings received.
    pub fn rating_count(&self) -> usize {
        self.user_ratings.len()
    }

    /// Whether the product belongs on the featured shelf.
    pub fn is_featured(&self) -> bool {
        self.is_new || self.is_sale
    }

    /// Merge the fields present in `patch` and stamp `updated_at`.
    pub fn apply_patch(&mut self, patch: &ProductPatch, now: DateTime<Utc>) {
        if let Some(ref name) = patch.name {
            self.name = name.clone();
        }
        if let Some(ref description) = patch.description {
            self.description = description.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(ref company) = patch.company {
            self.company = company.clone();
        }
        if let Some(ref category) = patch.category {
            self.category = category.clone();
        }
        if let Some(ref image) = patch.image {
            self.image = image.clone();
        }
        if let Some(is_new) = patch.is_new {
            self.is_new = is_new;
        }
        if let Some(is_sale) = patch.is_sale {
            self.is_sale = is_sale;
        }
        if let Some(ref gender) = patch.gender {
            self.gender = gender.clone();
        }
        if let Some(ref color) = patch.color {
            self.color = Some(color.clone());
        }
        self.updated_at = Some(now);
    }
}

/// Partial update for a product. Absent fields are left untouched.
///
/// Identity and ratings are not patchable; ratings only grow
/// through `rate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub company: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub is_new: Option<bool>,
    pub is_sale: Option<bool>,
    pub gender: Option<Gender>,
    pub color: Option<String>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self == &ProductPatch::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_defaults() {
        let product = Product::new("p1", "Trail Runner", "Shoes", 89.0);
        assert_eq!(product.company, UNKNOWN_COMPANY);
        assert_eq!(product.image, PLACEHOLDER_IMAGE);
        assert_eq!(product.gender, Gender::Unisex);
        assert!(product.user_ratings.is_empty());
        assert_eq!(product.average_rating(), 0.0);
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!(Gender::parse("Men"), Gender::Men);
        assert_eq!(Gender::parse(""), Gender::Unisex);
        assert_eq!(Gender::parse("girls"), Gender::Other("girls".into()));
        assert_eq!(Gender::Other("girls".into()).as_str(), "girls");
    }

    #[test]
    fn test_apply_patch_merges_only_present_fields() {
        let mut product = Product::new("p1", "Trail Runner", "Shoes", 89.0);
        let patch = ProductPatch {
            price: Some(79.0),
            is_sale: Some(true),
            ..Default::default()
        };
        let now = Utc::now();
        product.apply_patch(&patch, now);

        assert_eq!(product.price, 79.0);
        assert!(product.is_sale);
        assert_eq!(product.name, "Trail Runner");
        assert_eq!(product.updated_at, Some(now));
    }

    #[test]
    fn test_patch_deserializes_camel_case() {
        let patch: ProductPatch = serde_json::from_str(r#"{"isNew":true,"name":"X"}"#).unwrap();
        assert_eq!(patch.is_new, Some(true));
        assert_eq!(patch.name.as_deref(), Some("X"));
        assert!(!patch.is_empty());
        assert!(ProductPatch::default().is_empty());
    }
}
