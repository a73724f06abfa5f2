//! # View Projection
//!
//! Turns a [`Session`] and the [`Catalog`] into plain view models a UI layer
//! can draw without knowing any cart rules.
//!
//! ## Screen Anatomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HeaderView (hidden on landing)        brand · Plants · Cart · [badge] │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Page::Landing   → blurb + "Get Started" (→ products)                   │
//! │  Page::Products  → CategorySection* → ProductCard { product, in_cart }  │
//! │  Page::Cart      → CartLineView* + CartTotals, or the empty message     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is derived on demand; nothing is cached.

use serde::Serialize;
use ts_rs::TS;

use crate::cart::{Cart, CartTotals};
use crate::catalog::Catalog;
use crate::money::Money;
use crate::navigation::View;
use crate::session::Session;
use crate::types::{CartLine, Product};

pub const LANDING_BLURB: &str = "Discover elegant plants in decorative vases, each one \
hand-nurtured to bring life and style into your space. From lush Monsteras to graceful \
Orchids, every plant is a living piece of art ready to brighten your home.";

pub const LISTING_INTRO: &str =
    "Explore plants chosen for every skill level and lighting condition.";

pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty. Add a few plants to begin.";

/// Shown instead of a real checkout flow.
pub const CHECKOUT_NOTICE: &str = "Checkout is coming soon!";

// =============================================================================
// View Models
// =============================================================================

/// Header strip with the cart badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HeaderView {
    /// Total plants in the cart (sum of quantities, not distinct lines).
    pub cart_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LandingPage {
    pub blurb: String,
    /// Where "Get Started" leads.
    pub get_started: View,
}

/// A product tile in the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductCard {
    pub product: Product,
    /// Already in the cart: the add button is disabled and reads "Added".
    pub in_cart: bool,
}

impl ProductCard {
    pub fn button_label(&self) -> &'static str {
        if self.in_cart {
            "Added"
        } else {
            "Add to Cart"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategorySection {
    pub category: String,
    pub cards: Vec<ProductCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ListingPage {
    pub intro: String,
    pub sections: Vec<CategorySection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineView {
    pub line: CartLine,
    /// Unit price × quantity.
    pub line_total: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartPage {
    pub lines: Vec<CartLineView>,
    pub totals: CartTotals,
    /// Set only when the cart has no lines.
    pub empty_message: Option<String>,
    /// Where "Continue Shopping" leads.
    pub continue_shopping: View,
}

/// The body of the current view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "view", rename_all = "camelCase")]
#[ts(export)]
pub enum Page {
    Landing(LandingPage),
    Products(ListingPage),
    Cart(CartPage),
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Screen {
    pub header: Option<HeaderView>,
    pub page: Page,
}

// =============================================================================
// Projections
// =============================================================================

impl Screen {
    /// Projects the session's current view.
    pub fn project(session: &Session, catalog: &Catalog) -> Screen {
        let cart = session.cart();

        let header = session.view().shows_header().then(|| HeaderView {
            cart_count: cart.total_items(),
        });

        let page = match session.view() {
            View::Landing => Page::Landing(landing()),
            View::Products => Page::Products(listing(catalog, cart)),
            View::Cart => Page::Cart(cart_page(cart)),
        };

        Screen { header, page }
    }
}

pub fn landing() -> LandingPage {
    LandingPage {
        blurb: LANDING_BLURB.to_string(),
        get_started: View::Products,
    }
}

/// The catalog grouped by category, with each card flagged if its product
/// already has a cart line.
pub fn listing(catalog: &Catalog, cart: &Cart) -> ListingPage {
    let sections = catalog
        .by_category()
        .into_iter()
        .map(|group| CategorySection {
            category: group.category.to_string(),
            cards: group
                .products
                .into_iter()
                .map(|product| ProductCard {
                    product: product.clone(),
                    in_cart: cart.contains(&product.id),
                })
                .collect(),
        })
        .collect();

    ListingPage {
        intro: LISTING_INTRO.to_string(),
        sections,
    }
}

pub fn cart_page(cart: &Cart) -> CartPage {
    let lines = cart
        .lines()
        .map(|line| CartLineView {
            line: line.clone(),
            line_total: line.line_total(),
        })
        .collect();

    CartPage {
        lines,
        totals: cart.totals(),
        empty_message: cart.is_empty().then(|| EMPTY_CART_MESSAGE.to_string()),
        continue_shopping: View::Products,
    }
}
