//! Shopper ratings.

use crate::error::CommerceError;
use crate::ids::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest accepted rating.
pub const MIN_RATING: i64 = 1;
/// Highest accepted rating.
pub const MAX_RATING: i64 = 5;

/// A single rating left on a product. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    /// Who left the rating.
    pub user_id: UserId,
    /// Star value, 1-5.
    pub rating: u8,
    /// When the rating was submitted.
    #[serde(deserialize_with = "crate::catalog::timestamp::deserialize")]
    pub timestamp: DateTime<Utc>,
}

impl Rating {
    /// Create a rating stamped with the current time.
    pub fn new(user_id: UserId, value: i64) -> Result<Self, CommerceError> {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(CommerceError::InvalidRating(value));
        }
        Ok(Self {
            user_id,
            rating: value as u8,
            timestamp: Utc::now(),
        })
    }

    /// Create a rating from an anonymous shopper.
    pub fn anonymous(value: i64) -> Result<Self, CommerceError> {
        Self::new(UserId::anonymous(), value)
    }
}

/// Arithmetic mean of a rating sequence, 0 when empty.
pub fn average(ratings: &[Rating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: u32 = ratings.iter().map(|r| r.rating as u32).sum();
    sum as f64 / ratings.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::anonymous(1).is_ok());
        assert!(Rating::anonymous(5).is_ok());
        assert_eq!(
            Rating::anonymous(0).unwrap_err(),
            CommerceError::InvalidRating(0)
        );
        assert!(Rating::anonymous(6).is_err());
    }

    #[test]
    fn test_average() {
        assert_eq!(average(&[]), 0.0);
        let ratings = vec![Rating::anonymous(2).unwrap(), Rating::anonymous(4).unwrap()];
        assert_eq!(average(&ratings), 3.0);
    }

    #[test]
    fn test_rating_wire_shape() {
        let json = r#"{"userId":"u1","rating":4,"timestamp":"2024-05-01T10:00:00Z"}"#;
        let rating: Rating = serde_json::from_str(json).unwrap();
        assert_eq!(rating.user_id.as_str(), "u1");
        assert_eq!(rating.rating, 4);
    }

    #[test]
    fn test_rating_accepts_service_naive_timestamp() {
        let json = r#"{"userId":"user1234","rating":4,"timestamp":"2025-01-10T08:15:30.123456"}"#;
        let rating: Rating = serde_json::from_str(json).unwrap();
        assert_eq!(rating.timestamp.to_rfc3339(), "2025-01-10T08:15:30.123456+00:00");
    }
}
