//! # Cart Commands
//!
//! One function per cart button in the UI.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart  ┌──────────┐   checkout   ┌──────────────┐  │
//! │  │  Empty   │──────────────►│ In Cart  │─────────────►│ "coming      │  │
//! │  │  Cart    │◄──────────────│          │              │  soon" notice│  │
//! │  └──────────┘  last line    └──────────┘              └──────────────┘  │
//! │                removed          │  ▲                                    │
//! │                                 │  │ increase / decrease                │
//! │                                 └──┘ remove                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only `add_to_cart` can fail, and only because the id is looked up in the
//! catalog first. Every other command is total.

use beesy_core::projection::CHECKOUT_NOTICE;
use beesy_core::{Action, Cart, CartLine, CartTotals, Catalog};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::SessionState;

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub totals: CartTotals,
    /// False when the command left the cart as it was.
    pub changed: bool,
}

impl CartResponse {
    fn from_cart(cart: &Cart, changed: bool) -> Self {
        CartResponse {
            items: cart.items(),
            totals: cart.totals(),
            changed,
        }
    }
}

/// Reply to the checkout button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub notice: String,
    pub totals: CartTotals,
}

fn respond(session: &SessionState, changed: bool) -> CartResponse {
    session.with_session(|s| CartResponse::from_cart(s.cart(), changed))
}

/// Gets the current cart contents.
pub fn get_cart(session: &SessionState) -> CartResponse {
    debug!("get_cart command");
    respond(session, false)
}

/// Adds a catalog product to the cart.
///
/// ## Behavior
/// - Unknown id: `NOT_FOUND`
/// - Already in cart: unchanged (`changed: false`), quantity stays put
/// - Otherwise: new line at quantity 1
pub fn add_to_cart(
    catalog: &Catalog,
    session: &mut SessionState,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = catalog.require(product_id)?.clone();
    let changed = session.dispatch(Action::AddToCart(product));

    Ok(respond(session, changed))
}

/// Raises a line's quantity by one. Unknown ids are ignored.
pub fn increase_cart_item(session: &mut SessionState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "increase_cart_item command");
    let changed = session.dispatch(Action::Increase(product_id.to_string()));
    respond(session, changed)
}

/// Lowers a line's quantity by one; a line at 1 is removed.
pub fn decrease_cart_item(session: &mut SessionState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "decrease_cart_item command");
    let changed = session.dispatch(Action::Decrease(product_id.to_string()));
    respond(session, changed)
}

/// Removes a line regardless of quantity.
pub fn remove_from_cart(session: &mut SessionState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");
    let changed = session.dispatch(Action::Delete(product_id.to_string()));
    respond(session, changed)
}

/// Placeholder checkout. Leaves the cart as it is.
pub fn checkout(session: &SessionState) -> CheckoutResponse {
    debug!("checkout command");
    CheckoutResponse {
        notice: CHECKOUT_NOTICE.to_string(),
        totals: session.with_session(|s| s.totals()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use beesy_core::Money;

    #[test]
    fn test_add_unknown_product() {
        let mut session = SessionState::new();
        let err = add_to_cart(&Catalog::plants(), &mut session, "cactus").unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&session).items.is_empty());
    }

    #[test]
    fn test_walkthrough() {
        let catalog = Catalog::plants();
        let mut session = SessionState::new();

        let resp = add_to_cart(&catalog, &mut session, "monstera").unwrap();
        assert!(resp.changed);
        assert_eq!(resp.totals.total_cost, Money::from_major(28));

        let resp = add_to_cart(&catalog, &mut session, "monstera").unwrap();
        assert!(!resp.changed);

        let resp = increase_cart_item(&mut session, "monstera");
        assert_eq!(resp.items[0].quantity, 2);

        add_to_cart(&catalog, &mut session, "snake").unwrap();
        let resp = decrease_cart_item(&mut session, "monstera");
        assert_eq!(resp.totals.total_cost, Money::from_major(50));

        let resp = decrease_cart_item(&mut session, "monstera");
        assert_eq!(resp.items.len(), 1);
        assert_eq!(resp.items[0].id, "snake");

        let resp = remove_from_cart(&mut session, "snake");
        assert!(resp.items.is_empty());
        assert_eq!(resp.totals, CartTotals::default());
    }

    #[test]
    fn test_noop_commands_report_unchanged() {
        let mut session = SessionState::new();

        assert!(!increase_cart_item(&mut session, "snake").changed);
        assert!(!decrease_cart_item(&mut session, "snake").changed);
        assert!(!remove_from_cart(&mut session, "snake").changed);
    }

    #[test]
    fn test_checkout_is_placeholder() {
        let catalog = Catalog::plants();
        let mut session = SessionState::new();
        add_to_cart(&catalog, &mut session, "orchid").unwrap();

        let resp = checkout(&session);
        assert_eq!(resp.notice, "Checkout is coming soon!");
        assert_eq!(resp.totals.total_items, 1);
        assert_eq!(get_cart(&session).items.len(), 1);
    }
}
