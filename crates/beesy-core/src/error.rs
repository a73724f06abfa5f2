//! # Error Types
//!
//! Domain-specific error types for beesy-core.
//!
//! ## Where Errors Can Occur
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Surface                                   │
//! │                                                                         │
//! │  Cart Store operations (add/increase/decrease/delete)  → NEVER fail     │
//! │    (missing ids degrade to a no-op)                                     │
//! │                                                                         │
//! │  Boundaries only:                                                       │
//! │  ├── Catalog::new        → ValidationError (bad record, duplicate id)   │
//! │  ├── Catalog::require    → CoreError::ProductNotFound                   │
//! │  └── View::from_str      → CoreError::UnknownView                       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError (app) → Shell output      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised at the edges of the storefront core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// No catalog entry carries this id.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A view name that is not one of `landing`, `products`, `cart`.
    #[error("Unknown view: {0}")]
    UnknownView(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog record validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., product id with spaces).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two products sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("cactus".to_string());
        assert_eq!(err.to_string(), "Product not found: cactus");

        let err = CoreError::UnknownView("checkout".to_string());
        assert_eq!(err.to_string(), "Unknown view: checkout");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "id".to_string(),
        };
        assert_eq!(err.to_string(), "id is required");

        let err = ValidationError::Duplicate {
            field: "id".to_string(),
            value: "snake".to_string(),
        };
        assert_eq!(err.to_string(), "id 'snake' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
