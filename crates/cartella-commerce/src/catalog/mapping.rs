//! Translation between the remote service's record shape and [`Product`].
//!
//! The remote service names the brand `brand` and the image `image_url`, may
//! omit most optional fields, and expects a numeric price on writes. Both
//! directions are pure.

use crate::catalog::product::{Gender, Product, PLACEHOLDER_IMAGE, UNKNOWN_COMPANY};
use crate::catalog::rating::Rating;
use crate::error::CommerceError;
use crate::ids::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product record as the remote service sends and accepts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteProduct {
    /// Absent on create payloads; assigned by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(rename = "userRatings", default, skip_serializing_if = "Option::is_none")]
    pub user_ratings: Option<Vec<Rating>>,
    #[serde(rename = "isNew", default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    #[serde(rename = "isSale", default, skip_serializing_if = "Option::is_none")]
    pub is_sale: Option<bool>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::catalog::timestamp::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    /// Search synonyms maintained by the service; not part of the canonical shape.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
}

/// A price as it arrives from a form: either already numeric or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Amount(f64),
    Text(String),
}

impl PriceInput {
    /// Coerce to a finite, non-negative amount.
    pub fn to_amount(&self) -> Result<f64, CommerceError> {
        let amount = match self {
            PriceInput::Amount(value) => *value,
            PriceInput::Text(text) => text.trim().parse::<f64>().map_err(|_| {
                CommerceError::validation(format!("price is not a number: {:?}", text))
            })?,
        };
        if !amount.is_finite() {
            return Err(CommerceError::validation(format!(
                "price is not finite: {}",
                amount
            )));
        }
        if amount < 0.0 {
            return Err(CommerceError::validation(format!(
                "price is negative: {}",
                amount
            )));
        }
        Ok(amount)
    }
}

impl Default for PriceInput {
    fn default() -> Self {
        PriceInput::Amount(0.0)
    }
}

impl From<f64> for PriceInput {
    fn from(value: f64) -> Self {
        PriceInput::Amount(value)
    }
}

impl From<&str> for PriceInput {
    fn from(value: &str) -> Self {
        PriceInput::Text(value.to_string())
    }
}

impl From<String> for PriceInput {
    fn from(value: String) -> Self {
        PriceInput::Text(value)
    }
}

/// Product-like input for writes: a create form, or an existing product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDraft {
    /// Set when the draft was taken from an existing product.
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: PriceInput,
    pub company: String,
    pub category: String,
    pub image: Option<String>,
    pub gender: Option<Gender>,
    pub color: Option<String>,
}

impl ProductDraft {
    /// Start a draft with the required fields.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<PriceInput>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price: price.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            id: Some(product.id.clone()),
            name: product.name.clone(),
            description: product.description.clone(),
            price: PriceInput::Amount(product.price),
            company: product.company.clone(),
            category: product.category.clone(),
            image: Some(product.image.clone()),
            gender: Some(product.gender.clone()),
            color: product.color.clone(),
        }
    }
}

/// Map a remote record into the canonical shape, filling defaults.
///
/// Records without an id (which the service never sends on reads) get a
/// locally generated one so the result is always addressable.
pub fn to_canonical(remote: RemoteProduct) -> Product {
    Product {
        id: remote.id.unwrap_or_else(ProductId::generate),
        name: remote.name,
        description: remote.description.unwrap_or_default(),
        price: remote.price,
        company: non_empty(remote.brand).unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
        category: remote.category,
        image: non_empty(remote.image_url).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        user_ratings: remote.user_ratings.unwrap_or_default(),
        is_new: remote.is_new.unwrap_or(false),
        is_sale: remote.is_sale.unwrap_or(false),
        gender: remote
            .gender
            .as_deref()
            .map(Gender::parse)
            .unwrap_or_default(),
        color: remote.color,
        created_at: remote.created_at,
        updated_at: None,
    }
}

/// Map a draft into the remote write shape, coercing the price.
pub fn to_remote(draft: &ProductDraft) -> Result<RemoteProduct, CommerceError> {
    let price = draft.price.to_amount()?;
    Ok(RemoteProduct {
        id: draft.id.clone(),
        name: draft.name.clone(),
        description: Some(draft.description.clone()),
        price,
        brand: non_empty(Some(draft.company.clone())),
        category: draft.category.clone(),
        image_url: non_empty(draft.image.clone()),
        user_ratings: None,
        is_new: None,
        is_sale: None,
        gender: draft.gender.as_ref().map(|g| g.as_str().to_string()),
        color: draft.color.clone(),
        created_at: None,
        synonyms: Vec::new(),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(json: &str) -> RemoteProduct {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_missing_brand_and_image_get_defaults() {
        let product = to_canonical(remote(
            r#"{"id":"p1","name":"Mug","price":12.5,"category":"Kitchen"}"#,
        ));
        assert_eq!(product.company, "Unknown");
        assert_eq!(product.image, PLACEHOLDER_IMAGE);
        assert!(product.user_ratings.is_empty());
        assert!(!product.is_new);
        assert!(!product.is_sale);
        assert_eq!(product.gender, Gender::Unisex);
        assert_eq!(product.color, None);
    }

    #[test]
    fn test_empty_brand_and_image_get_defaults() {
        let product = to_canonical(remote(
            r#"{"id":"p1","name":"Mug","price":1,"category":"Kitchen","brand":"","image_url":""}"#,
        ));
        assert_eq!(product.company, UNKNOWN_COMPANY);
        assert_eq!(product.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_fields_are_renamed() {
        let product = to_canonical(remote(
            r#"{"id":"p2","name":"Phone","price":699,"category":"Electronics",
                "brand":"Acme","image_url":"https://img/p2.png","isNew":true,
                "gender":"women","color":"black","synonyms":["mobile"],
                "userRatings":[{"userId":"u","rating":5,"timestamp":"2024-01-01T00:00:00Z"}]}"#,
        ));
        assert_eq!(product.company, "Acme");
        assert_eq!(product.image, "https://img/p2.png");
        assert!(product.is_new);
        assert_eq!(product.gender, Gender::Women);
        assert_eq!(product.color.as_deref(), Some("black"));
        assert_eq!(product.rating_count(), 1);
    }

    #[test]
    fn test_service_record_with_naive_timestamps() {
        let product = to_canonical(remote(
            r#"{"id":"p1","name":"Mug","description":"Stoneware","price":12.5,
                "brand":"Clay","category":"Kitchen","image_url":"https://img/mug.png",
                "userRatings":[{"userId":"user1234","rating":4,"timestamp":"2025-01-10T08:15:30.123456"}],
                "isNew":false,"isSale":true,"gender":"unisex","color":"white",
                "created_at":"2025-01-10T08:15:30.123456","synonyms":["cup"]}"#,
        ));
        let created = product.created_at.unwrap();
        assert_eq!(created.to_rfc3339(), "2025-01-10T08:15:30.123456+00:00");
        assert_eq!(product.user_ratings[0].timestamp, created);
        assert!(product.is_sale);
    }

    #[test]
    fn test_null_created_at_is_absent() {
        let product = to_canonical(remote(
            r#"{"id":"p1","name":"Mug","price":1,"category":"Kitchen","created_at":null}"#,
        ));
        assert_eq!(product.created_at, None);
    }

    #[test]
    fn test_to_remote_renames_and_coerces_price() {
        let draft = ProductDraft::new("Lamp", "Home", "24.99")
            .with_company("Lumo")
            .with_image("https://img/lamp.png");
        let remote = to_remote(&draft).unwrap();
        assert_eq!(remote.brand.as_deref(), Some("Lumo"));
        assert_eq!(remote.image_url.as_deref(), Some("https://img/lamp.png"));
        assert_eq!(remote.price, 24.99);
        assert_eq!(remote.id, None);

        let json = serde_json::to_value(&remote).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["brand"], "Lumo");
    }

    #[test]
    fn test_to_remote_rejects_bad_price() {
        for bad in ["abc", "", "12abc", "-5", "NaN", "inf"] {
            let draft = ProductDraft::new("Lamp", "Home", bad);
            assert!(
                matches!(to_remote(&draft), Err(CommerceError::ValidationError(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_price_input_from_json() {
        let draft: ProductDraft =
            serde_json::from_str(r#"{"name":"A","category":"B","price":"7"}"#).unwrap();
        assert_eq!(draft.price.to_amount().unwrap(), 7.0);
        let draft: ProductDraft =
            serde_json::from_str(r#"{"name":"A","category":"B","price":7.5}"#).unwrap();
        assert_eq!(draft.price, PriceInput::Amount(7.5));
    }

    #[test]
    fn test_round_trip_preserves_identity_fields() {
        let mut product = Product::new("p9", "Desk", "Furniture", 149.5);
        product.description = "Standing desk".into();
        product.gender = Gender::Other("office".into());
        product.color = Some("oak".into());

        let back = to_canonical(to_remote(&ProductDraft::from(&product)).unwrap());
        assert_eq!(back.id, product.id);
        assert_eq!(back.name, product.name);
        assert_eq!(back.description, product.description);
        assert_eq!(back.category, product.category);
        assert_eq!(back.gender, product.gender);
        assert_eq!(back.color, product.color);
        assert_eq!(back.price, product.price);
    }
}
