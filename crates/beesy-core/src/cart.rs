//! # Cart Store
//!
//! The shopping cart: an insertion-ordered map from product id to
//! [`CartLine`], changed only through pure state transitions.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Transitions                               │
//! │                                                                         │
//! │  Operation        Line absent              Line present (qty = q)       │
//! │  ─────────        ───────────              ──────────────────────       │
//! │  add(product)     insert at qty 1          no-op                        │
//! │  increase(id)     no-op                    q + 1                        │
//! │  decrease(id)     no-op                    q - 1, or REMOVE when q = 1  │
//! │  remove(id)       no-op                    remove                       │
//! │                                                                         │
//! │  Every operation borrows the current cart and returns the next one.     │
//! │  A no-op returns a cart sharing the same storage, so the caller can     │
//! │  tell "nothing changed" with `same_state` without comparing lines.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use beesy_core::{Cart, Catalog, Money};
//!
//! let catalog = Catalog::plants();
//! let monstera = catalog.get("monstera").unwrap();
//!
//! let cart = Cart::new().add(monstera).increase("monstera");
//! assert_eq!(cart.totals().total_items, 2);
//! assert_eq!(cart.totals().total_cost, Money::from_major(56));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use std::sync::Arc;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CartLine, Product};

/// The shopping cart.
///
/// ## Invariants
/// - every key equals the `id` of its line
/// - every line has `quantity >= 1`
/// - at most one line per product id
///
/// Lines keep the order in which they were first added. Changing a quantity
/// does not move a line; removing and re-adding puts it last.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Arc<IndexMap<String, CartLine>>,
}

impl Cart {
    /// An empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Adds a product at quantity 1.
    ///
    /// If the product already has a line the cart is returned unchanged, so
    /// repeated adds are idempotent. Use [`increase`](Self::increase) to
    /// raise a quantity.
    pub fn add(&self, product: &Product) -> Cart {
        if self.lines.contains_key(&product.id) {
            return self.clone();
        }

        self.with_lines(|lines| {
            lines.insert(product.id.clone(), CartLine::from_product(product));
        })
    }

    /// Raises a line's quantity by one. Unknown ids are a no-op.
    pub fn increase(&self, id: &str) -> Cart {
        if !self.lines.contains_key(id) {
            return self.clone();
        }

        self.with_lines(|lines| {
            if let Some(line) = lines.get_mut(id) {
                line.quantity = line.quantity.saturating_add(1);
            }
        })
    }

    /// Lowers a line's quantity by one.
    ///
    /// A line at quantity 1 is removed entirely; no zero-quantity line is
    /// ever stored. Unknown ids are a no-op.
    pub fn decrease(&self, id: &str) -> Cart {
        match self.lines.get(id) {
            None => self.clone(),
            Some(line) if line.quantity <= 1 => self.with_lines(|lines| {
                lines.shift_remove(id);
            }),
            Some(_) => self.with_lines(|lines| {
                if let Some(line) = lines.get_mut(id) {
                    line.quantity -= 1;
                }
            }),
        }
    }

    /// Removes a line whatever its quantity. Unknown ids are a no-op.
    pub fn remove(&self, id: &str) -> Cart {
        if !self.lines.contains_key(id) {
            return self.clone();
        }

        self.with_lines(|lines| {
            lines.shift_remove(id);
        })
    }

    /// Copies the lines, applies `change`, and wraps the result in fresh
    /// storage. The receiver is never touched.
    fn with_lines<F>(&self, change: F) -> Cart
    where
        F: FnOnce(&mut IndexMap<String, CartLine>),
    {
        let mut lines = (*self.lines).clone();
        change(&mut lines);
        Cart {
            lines: Arc::new(lines),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn get(&self, id: &str) -> Option<&CartLine> {
        self.lines.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lines.contains_key(id)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Owned copy of the lines in insertion order, for handing to a view.
    pub fn items(&self) -> Vec<CartLine> {
        self.lines.values().cloned().collect()
    }

    /// Number of distinct lines (not the number of plants).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities over all lines.
    pub fn total_items(&self) -> u64 {
        self.lines().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of price × quantity over all lines.
    pub fn total_cost(&self) -> Money {
        self.lines().map(CartLine::line_total).sum()
    }

    /// Both aggregates in one pass. Recomputed on every call.
    pub fn totals(&self) -> CartTotals {
        self.lines().fold(CartTotals::default(), |mut totals, line| {
            totals.total_items += u64::from(line.quantity);
            totals.total_cost += line.line_total();
            totals
        })
    }

    /// True when both carts share storage, i.e. one was produced from the
    /// other by a no-op (or they are clones of each other).
    pub fn same_state(&self, other: &Cart) -> bool {
        Arc::ptr_eq(&self.lines, &other.lines)
    }
}

/// Carts are equal when they hold the same lines in the same order.
impl PartialEq for Cart {
    fn eq(&self, other: &Self) -> bool {
        self.same_state(other)
            || (self.lines.len() == other.lines.len()
                && self.lines.iter().eq(other.lines.iter()))
    }
}

impl Eq for Cart {}

/// Serializes as the ordered list of lines.
impl Serialize for Cart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.lines.values())
    }
}

/// Derived cart aggregates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Sum of quantities.
    pub total_items: u64,
    /// Sum of price × quantity.
    pub total_cost: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn plant(id: &str) -> Product {
        Catalog::plants()
            .get(id)
            .cloned()
            .unwrap_or_else(|| panic!("no plant {id}"))
    }

    fn quantity(cart: &Cart, id: &str) -> Option<u32> {
        cart.get(id).map(|line| line.quantity)
    }

    #[test]
    fn test_add_creates_line_at_quantity_one() {
        let cart = Cart::new().add(&plant("monstera"));

        assert_eq!(cart.len(), 1);
        assert_eq!(quantity(&cart, "monstera"), Some(1));
        assert_eq!(cart.get("monstera").unwrap().name, "Monstera Deliciosa");
    }

    #[test]
    fn test_repeated_add_is_noop() {
        let monstera = plant("monstera");
        let once = Cart::new().add(&monstera);
        let twice = once.add(&monstera);

        assert!(twice.same_state(&once));
        assert_eq!(quantity(&twice, "monstera"), Some(1));
    }

    #[test]
    fn test_add_does_not_reset_raised_quantity() {
        let monstera = plant("monstera");
        let cart = Cart::new().add(&monstera).increase("monstera").add(&monstera);
        assert_eq!(quantity(&cart, "monstera"), Some(2));
    }

    #[test]
    fn test_increase_and_decrease() {
        let cart = Cart::new().add(&plant("snake"));

        let raised = cart.increase("snake").increase("snake");
        assert_eq!(quantity(&raised, "snake"), Some(3));

        let lowered = raised.decrease("snake");
        assert_eq!(quantity(&lowered, "snake"), Some(2));
    }

    #[test]
    fn test_decrease_at_one_removes_line() {
        let cart = Cart::new().add(&plant("snake")).add(&plant("orchid"));
        let after = cart.decrease("snake");

        assert!(!after.contains("snake"));
        assert_eq!(after.len(), 1);
        assert!(after.lines().all(|line| line.quantity >= 1));
    }

    #[test]
    fn test_decrease_at_one_is_not_undone_by_increase() {
        let cart = Cart::new().add(&plant("snake")).decrease("snake");
        let after = cart.increase("snake");

        assert!(after.is_empty());
        assert!(after.same_state(&cart));
    }

    #[test]
    fn test_remove_ignores_quantity() {
        let cart = Cart::new()
            .add(&plant("zz-plant"))
            .increase("zz-plant")
            .increase("zz-plant");

        assert!(cart.remove("zz-plant").is_empty());
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let cart = Cart::new().add(&plant("orchid"));

        assert!(cart.increase("cactus").same_state(&cart));
        assert!(cart.decrease("cactus").same_state(&cart));
        assert!(cart.remove("cactus").same_state(&cart));
    }

    #[test]
    fn test_transitions_leave_previous_state_untouched() {
        let before = Cart::new().add(&plant("orchid"));
        let after = before.increase("orchid").add(&plant("snake"));

        assert_eq!(quantity(&before, "orchid"), Some(1));
        assert_eq!(before.len(), 1);
        assert_eq!(quantity(&after, "orchid"), Some(2));
        assert!(!after.same_state(&before));
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let cart = Cart::new()
            .add(&plant("orchid"))
            .add(&plant("monstera"))
            .add(&plant("snake"))
            .increase("orchid");

        let ids: Vec<&str> = cart.lines().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["orchid", "monstera", "snake"]);

        let readded = cart.remove("orchid").add(&plant("orchid"));
        let ids: Vec<String> = readded.items().into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec!["monstera", "snake", "orchid"]);
    }

    #[test]
    fn test_empty_totals_are_zero() {
        let totals = Cart::new().totals();
        assert_eq!(totals.total_items, 0);
        assert!(totals.total_cost.is_zero());
    }

    #[test]
    fn test_checkout_walkthrough() {
        let monstera = plant("monstera");
        let snake = plant("snake");

        let cart = Cart::new().add(&monstera);
        assert_eq!(cart.totals().total_items, 1);
        assert_eq!(cart.totals().total_cost.to_string(), "$28.00");

        let cart = cart.increase("monstera");
        assert_eq!(quantity(&cart, "monstera"), Some(2));
        assert_eq!(cart.totals().total_cost.to_string(), "$56.00");

        let cart = cart.add(&snake);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.totals().total_items, 3);
        assert_eq!(cart.totals().total_cost.to_string(), "$78.00");

        let cart = cart.decrease("monstera");
        assert_eq!(quantity(&cart, "monstera"), Some(1));
        assert_eq!(cart.totals().total_cost.to_string(), "$50.00");

        let cart = cart.decrease("monstera");
        assert!(!cart.contains("monstera"));
        assert_eq!(quantity(&cart, "snake"), Some(1));
        assert_eq!(
            cart.totals(),
            CartTotals {
                total_items: 1,
                total_cost: Money::from_major(22),
            }
        );

        let cart = cart.remove("snake");
        assert!(cart.is_empty());
        assert_eq!(cart.totals(), CartTotals::default());
    }

    #[test]
    fn test_equality_is_by_content() {
        let a = Cart::new().add(&plant("snake"));
        let b = Cart::new().add(&plant("snake"));

        assert!(!a.same_state(&b));
        assert_eq!(a, b);
        assert_ne!(a, b.increase("snake"));
    }

    #[test]
    fn test_serializes_as_line_list() {
        let cart = Cart::new().add(&plant("snake"));
        let json = serde_json::to_value(&cart).unwrap();

        assert_eq!(json[0]["id"], "snake");
        assert_eq!(json[0]["quantity"], 1);

        let totals = serde_json::to_value(cart.totals()).unwrap();
        assert_eq!(totals["totalItems"], 1);
        assert_eq!(totals["totalCost"], 2200);
    }
}
