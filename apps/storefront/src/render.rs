//! # Text Rendering
//!
//! Draws core view models as plain text for the terminal. Each wrapper
//! implements `Display`, so callers write them straight into any sink.
//!
//! ```text
//! BeesyBoutique  |  Plants  Cart  |  Cart (3)       ◄── HeaderView
//! ───────────────────────────────────────────────
//! Your Cart                                         ◄── Page::Cart
//! Total Plants: 3
//! Total Cost: $78.00
//!   monstera      Monstera Deliciosa     $28.00 each  x2   $56.00
//! ```

use std::fmt;

use beesy_core::projection::{CartPage, HeaderView, LandingPage, ListingPage, Page};
use beesy_core::{Product, Screen};

use crate::commands::{CartResponse, CheckoutResponse};
use crate::state::ConfigState;

const RULE: &str = "───────────────────────────────────────────────";

/// A full screen: header (if any) followed by the page body.
pub struct ScreenText<'a> {
    pub screen: &'a Screen,
    pub config: &'a ConfigState,
}

impl fmt::Display for ScreenText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(header) = &self.screen.header {
            write_header(f, header, self.config)?;
        }

        match &self.screen.page {
            Page::Landing(page) => write_landing(f, page, self.config),
            Page::Products(page) => write_listing(f, page, self.config),
            Page::Cart(page) => write_cart(f, page, self.config),
        }
    }
}

fn write_header(f: &mut fmt::Formatter<'_>, header: &HeaderView, config: &ConfigState) -> fmt::Result {
    writeln!(
        f,
        "{}  |  Plants  Cart  |  Cart ({})",
        config.store_name, header.cart_count
    )?;
    writeln!(f, "{}", RULE)
}

fn write_landing(f: &mut fmt::Formatter<'_>, page: &LandingPage, config: &ConfigState) -> fmt::Result {
    writeln!(f, "{}", config.store_name)?;
    writeln!(f)?;
    writeln!(f, "{}", page.blurb)?;
    writeln!(f)?;
    writeln!(f, "[Get Started]  type `start` to browse {}", page.get_started)
}

fn write_listing(f: &mut fmt::Formatter<'_>, page: &ListingPage, config: &ConfigState) -> fmt::Result {
    writeln!(f, "Our Collection")?;
    writeln!(f, "{}", page.intro)?;

    for section in &page.sections {
        writeln!(f)?;
        writeln!(f, "## {}", section.category)?;
        for card in &section.cards {
            writeln!(
                f,
                "  {:<12} {:<22} {:>8}  [{}]",
                card.product.id,
                card.product.name,
                config.format_currency(card.product.price),
                card.button_label()
            )?;
        }
    }

    Ok(())
}

fn write_cart(f: &mut fmt::Formatter<'_>, page: &CartPage, config: &ConfigState) -> fmt::Result {
    writeln!(f, "Your Cart")?;

    match &page.empty_message {
        Some(message) => writeln!(f, "{}", message)?,
        None => {
            writeln!(f, "Total Plants: {}", page.totals.total_items)?;
            writeln!(f, "Total Cost: {}", config.format_currency(page.totals.total_cost))?;
            writeln!(f)?;
            for view in &page.lines {
                writeln!(
                    f,
                    "  {:<12} {:<22} {:>8} each  x{:<3} {:>9}",
                    view.line.id,
                    view.line.name,
                    config.format_currency(view.line.price),
                    view.line.quantity,
                    config.format_currency(view.line_total)
                )?;
            }
        }
    }

    writeln!(f)?;
    writeln!(f, "[Continue Shopping]  [Checkout]")
}

/// One-line cart summary printed after a cart command.
pub struct CartSummaryText<'a> {
    pub response: &'a CartResponse,
    pub config: &'a ConfigState,
}

impl fmt::Display for CartSummaryText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let totals = &self.response.totals;
        write!(
            f,
            "cart: {} plant(s), {}",
            totals.total_items,
            self.config.format_currency(totals.total_cost)
        )?;
        if !self.response.changed {
            write!(f, " (unchanged)")?;
        }
        writeln!(f)
    }
}

pub struct CheckoutText<'a> {
    pub response: &'a CheckoutResponse,
    pub config: &'a ConfigState,
}

impl fmt::Display for CheckoutText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} (cart total {})",
            self.response.notice,
            self.config.format_currency(self.response.totals.total_cost)
        )
    }
}

pub struct ProductText<'a> {
    pub product: &'a Product,
    pub config: &'a ConfigState,
}

impl fmt::Display for ProductText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.product;
        writeln!(f, "{} ({})", p.name, p.id)?;
        writeln!(f, "  price:    {}", self.config.format_currency(p.price))?;
        writeln!(f, "  category: {}", p.category)?;
        writeln!(f, "  image:    {}", p.image)
    }
}

pub const HELP: &str = "\
Commands:
  home | plants | start | cart       switch view
  go <landing|products|cart>         switch view by name
  continue                           back to the plants
  add <id>                           put a plant in the cart
  inc <id>  | + <id>                 one more
  dec <id>  | - <id>                 one fewer (removes at 1)
  del <id>  | rm <id>                remove the line
  info <id>                          product details
  show                               redraw the current view
  checkout                           check out
  help                               this text
  quit | exit                        leave the shop
";
