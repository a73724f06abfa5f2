//! # beesy-core: Pure Storefront Logic for BeesyBoutique
//!
//! Catalog, cart store, navigation and the session reducer, as pure
//! functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      BeesyBoutique Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                UI layer (terminal shell, or a web view)         │   │
//! │  │        Landing ──► Product Listing ──► Cart                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Action            ▲ Screen             │
//! │  ┌─────────────────────────────▼───────────────────┴───────────────┐   │
//! │  │               ★ beesy-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌────────────┐ ┌──────────────┐     │   │
//! │  │   │ catalog  │ │   cart   │ │  session   │ │  projection  │     │   │
//! │  │   │ Catalog  │ │   Cart   │ │  Action    │ │  Screen      │     │   │
//! │  │   │ groups   │ │ CartLine │ │  reduce    │ │  Page        │     │   │
//! │  │   └──────────┘ └──────────┘ └────────────┘ └──────────────┘     │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING SINKS • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, CartLine, ImageRef
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - The fixed plant list and its category grouping
//! - [`cart`] - Cart store transitions and derived totals
//! - [`navigation`] - The three storefront views
//! - [`session`] - Owned `(view, cart)` state and its reducer
//! - [`projection`] - View models derived from a session
//! - [`validation`] - Product record rules
//! - [`error`] - Boundary error types
//!
//! ## Example Usage
//!
//! ```rust
//! use beesy_core::{Action, Catalog, Money, Session, View};
//!
//! let catalog = Catalog::plants();
//! let monstera = catalog.get("monstera").unwrap().clone();
//!
//! let session = Session::new()
//!     .reduce(&Action::Navigate(View::Products))
//!     .reduce(&Action::AddToCart(monstera))
//!     .reduce(&Action::Increase("monstera".to_string()));
//!
//! assert_eq!(session.totals().total_cost, Money::from_major(56));
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod navigation;
pub mod projection;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartTotals};
pub use catalog::{Catalog, CategoryGroup};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use navigation::View;
pub use projection::Screen;
pub use session::{reduce, Action, Session};
pub use types::*;

/// Store name shown on the landing page and in the header brand.
pub const STORE_NAME: &str = "BeesyBoutique";
