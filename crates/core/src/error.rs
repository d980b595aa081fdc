//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Raised while parsing or validating input. Missing records and storage
/// failures are reported by the store layer, not here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_build_the_matching_variant() {
        assert_eq!(
            DomainError::invalid_id("ProductId: must be positive, got 0"),
            DomainError::InvalidId("ProductId: must be positive, got 0".to_string())
        );
        assert_eq!(
            DomainError::validation("unknown sales order status: refunded").to_string(),
            "validation failed: unknown sales order status: refunded"
        );
    }
}
