//! # Validation Module
//!
//! Rules a product record must satisfy before it enters a [`Catalog`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Happens                           │
//! │                                                                         │
//! │  Catalog::new(products)                                                 │
//! │  ├── validate_product(p) for every record   ◄── THIS MODULE             │
//! │  └── duplicate id check                                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Cart Store trusts every product it is handed.                          │
//! │  No validation runs on add / increase / decrease / delete.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`Catalog`]: crate::catalog::Catalog
//!
//! ## Usage
//! ```rust
//! use beesy_core::validation::{validate_product_id, validate_product_name};
//!
//! assert!(validate_product_id("fiddle-leaf").is_ok());
//! assert!(validate_product_id("Fiddle Leaf").is_err());
//! assert!(validate_product_name("").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_ID_LEN: usize = 50;
const MAX_NAME_LEN: usize = 200;
const MAX_CATEGORY_LEN: usize = 50;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Lowercase ASCII letters, digits and hyphens only (a URL-safe slug)
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only lowercase letters, digits, and hyphens".to_string(),
        });
    }

    Ok(())
}

/// Validates a product display name.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name, MAX_NAME_LEN)
}

/// Validates a category label.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    validate_text("category", category, MAX_CATEGORY_LEN)
}

fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price. Catalog prices are strictly positive.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates every field of a product record.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(&product.id)?;
    validate_product_name(&product.name)?;
    validate_price(product.price)?;
    validate_category(&product.category)?;

    if product.image.as_str().trim().is_empty() {
        return Err(ValidationError::Required {
            field: "image".to_string(),
        });
    }

    Ok(())
}
