//! # Session Reducer
//!
//! The storefront's whole mutable state is one owned [`Session`] value:
//! the current view plus the cart. It changes only by feeding an
//! [`Action`] to [`Session::reduce`], which returns the next session.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   UI event ──► Action ──► Session::reduce(&state, &action) ──► next     │
//! │                                      │                           │      │
//! │                                      │  pure, total, synchronous │      │
//! │                                      ▼                           ▼      │
//! │                         Cart::add / increase /        next.changed_from │
//! │                         decrease / remove             (state)? render   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, CartTotals};
use crate::navigation::View;
use crate::types::Product;

/// A user intent the storefront can act on.
///
/// Serialized adjacently tagged, e.g.
/// `{"type": "increase", "payload": "monstera"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
#[ts(export)]
pub enum Action {
    /// Put a catalog product in the cart at quantity 1.
    AddToCart(Product),
    /// Raise the quantity of the line with this product id.
    Increase(String),
    /// Lower the quantity of the line with this product id.
    Decrease(String),
    /// Drop the line with this product id.
    Delete(String),
    /// Switch the current view.
    Navigate(View),
}

/// View + cart. Cheap to clone: the cart shares its storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    view: View,
    cart: Cart,
}

impl Session {
    /// A fresh session: landing page, empty cart.
    pub fn new() -> Self {
        Session::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// Applies one action and returns the next session.
    ///
    /// Never fails. Actions naming an id that is not in the cart leave the
    /// cart storage untouched.
    pub fn reduce(&self, action: &Action) -> Session {
        match action {
            Action::AddToCart(product) => self.with_cart(self.cart.add(product)),
            Action::Increase(id) => self.with_cart(self.cart.increase(id)),
            Action::Decrease(id) => self.with_cart(self.cart.decrease(id)),
            Action::Delete(id) => self.with_cart(self.cart.remove(id)),
            Action::Navigate(view) => Session {
                view: *view,
                cart: self.cart.clone(),
            },
        }
    }

    fn with_cart(&self, cart: Cart) -> Session {
        Session {
            view: self.view,
            cart,
        }
    }

    /// True if this session differs from `previous` in view or cart storage.
    ///
    /// Cart comparison is by identity, so a reduce that was a no-op on the
    /// cart reports no change without walking the lines.
    pub fn changed_from(&self, previous: &Session) -> bool {
        self.view != previous.view || !self.cart.same_state(&previous.cart)
    }
}

/// Free-function form of [`Session::reduce`] for callers that fold a
/// sequence of actions.
///
/// ```rust
/// use beesy_core::{reduce, Action, Catalog, Session, View};
///
/// let catalog = Catalog::plants();
/// let actions = vec![
///     Action::Navigate(View::Products),
///     Action::AddToCart(catalog.get("orchid").unwrap().clone()),
///     Action::Increase("orchid".to_string()),
/// ];
///
/// let session = actions.iter().fold(Session::new(), |s, a| reduce(&s, a));
/// assert_eq!(session.view(), View::Products);
/// assert_eq!(session.totals().total_items, 2);
/// ```
pub fn reduce(state: &Session, action: &Action) -> Session {
    state.reduce(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::money::Money;

    fn add(id: &str) -> Action {
        Action::AddToCart(Catalog::plants().require(id).unwrap().clone())
    }

    #[test]
    fn test_new_session() {
        let session = Session::new();
        assert_eq!(session.view(), View::Landing);
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_navigate_keeps_cart() {
        let session = Session::new().reduce(&add("snake"));
        let next = session.reduce(&Action::Navigate(View::Cart));

        assert_eq!(next.view(), View::Cart);
        assert!(next.cart().same_state(session.cart()));
        assert!(next.changed_from(&session));
    }

    #[test]
    fn test_cart_actions_keep_view() {
        let session = Session::new().reduce(&Action::Navigate(View::Products));
        let next = session.reduce(&add("orchid"));

        assert_eq!(next.view(), View::Products);
        assert!(next.cart().contains("orchid"));
    }

    #[test]
    fn test_noops_report_no_change() {
        let session = Session::new().reduce(&add("snake"));

        for action in [
            add("snake"),
            Action::Increase("cactus".to_string()),
            Action::Decrease("cactus".to_string()),
            Action::Delete("cactus".to_string()),
            Action::Navigate(View::Landing),
        ] {
            let next = session.reduce(&action);
            assert!(!next.changed_from(&session), "{action:?} changed state");
            assert_eq!(next, session);
        }
    }

    #[test]
    fn test_walkthrough_via_actions() {
        let actions = [
            add("monstera"),
            Action::Increase("monstera".to_string()),
            add("snake"),
            Action::Decrease("monstera".to_string()),
            Action::Decrease("monstera".to_string()),
        ];
        let session = actions.iter().fold(Session::new(), |s, a| reduce(&s, a));

        assert_eq!(
            session.totals(),
            CartTotals {
                total_items: 1,
                total_cost: Money::from_major(22),
            }
        );

        let session = session.reduce(&Action::Delete("snake".to_string()));
        assert_eq!(session.totals(), CartTotals::default());
    }

    #[test]
    fn test_action_json_shape() {
        let json = serde_json::to_value(Action::Increase("zz-plant".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({"type": "increase", "payload": "zz-plant"}));

        let action: Action =
            serde_json::from_str(r#"{"type": "navigate", "payload": "cart"}"#).unwrap();
        assert_eq!(action, Action::Navigate(View::Cart));

        let json = serde_json::to_value(add("snake")).unwrap();
        assert_eq!(json["type"], "addToCart");
        assert_eq!(json["payload"]["id"], "snake");
    }
}
