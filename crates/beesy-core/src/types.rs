//! # Domain Types
//!
//! The records the catalog and the cart are made of.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐    CartLine::from_product    ┌─────────────────┐   │
//! │  │    Product      │ ───────────────────────────► │    CartLine     │   │
//! │  │  ─────────────  │       (copy + qty = 1)       │  ─────────────  │   │
//! │  │  id             │                              │  id             │   │
//! │  │  name           │                              │  name           │   │
//! │  │  price (Money)  │                              │  price (Money)  │   │
//! │  │  category       │                              │  category       │   │
//! │  │  image          │                              │  image          │   │
//! │  └─────────────────┘                              │  quantity ≥ 1   │   │
//! │                                                   └─────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A cart line is a frozen copy of the product at the moment it was added.
//! The catalog is static, so the copy never drifts, but the cart does not
//! need the catalog to render or total itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Image Reference
// =============================================================================

/// Opaque reference to a product image (an asset name for the UI layer).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(asset: impl Into<String>) -> Self {
        ImageRef(asset.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A plant available in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Slug identifier, unique within the catalog (e.g. `zz-plant`).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit price. Always positive for catalog entries.
    pub price: Money,

    /// Display grouping (e.g. `Low Light`).
    pub category: String,

    pub image: ImageRef,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        image: ImageRef,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            category: category.into(),
            image,
        }
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// A product's display fields plus a quantity.
///
/// ## Invariants (upheld by [`Cart`](crate::cart::Cart))
/// - `quantity >= 1`; a line at 1 that is decreased is removed instead
/// - `id` equals the key the cart stores it under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    /// Unit price copied from the product.
    pub price: Money,
    pub category: String,
    pub image: ImageRef,
    pub quantity: u32,
}

impl CartLine {
    /// Creates a line at quantity 1 from a product.
    pub fn from_product(product: &Product) -> Self {
        CartLine {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}
