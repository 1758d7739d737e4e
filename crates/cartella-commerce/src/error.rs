//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog and cart operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Rating outside the accepted 1-5 scale.
    #[error("Invalid rating: {0} (expected 1-5)")]
    InvalidRating(i64),

    /// A value could not be coerced into the shape the remote service expects.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl CommerceError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        CommerceError::ValidationError(msg.into())
    }
}
