//! # Commands Module
//!
//! Every user action the storefront supports, as a plain function over the
//! state types it needs. The shell parses a line and calls one of these;
//! a different front end could call them the same way.
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  catalog     list_products, get_product                                 │
//! │  cart        get_cart, add_to_cart, increase_cart_item,                 │
//! │              decrease_cart_item, remove_from_cart, checkout             │
//! │  navigation  get_screen, navigate, navigate_by_name                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod navigation;

pub use cart::{
    add_to_cart, checkout, decrease_cart_item, get_cart, increase_cart_item, remove_from_cart,
    CartResponse, CheckoutResponse,
};
pub use catalog::{get_product, list_products};
pub use navigation::{get_screen, navigate, navigate_by_name};
