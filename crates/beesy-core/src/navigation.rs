//! # Navigation
//!
//! Which of the three storefront views is showing. There is no history
//! stack and no guard: the current view is whatever was last navigated to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;

/// A named storefront view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum View {
    /// Hero page with the "Get Started" call to action.
    #[default]
    Landing,
    /// Product grid grouped by category.
    Products,
    /// Cart lines, totals, checkout.
    Cart,
}

impl View {
    pub const ALL: [View; 3] = [View::Landing, View::Products, View::Cart];

    pub const fn as_str(&self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Products => "products",
            View::Cart => "cart",
        }
    }

    /// The header (brand, nav links, cart badge) is hidden on the landing
    /// page and shown everywhere else.
    pub const fn shows_header(&self) -> bool {
        !matches!(self, View::Landing)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = CoreError;

    /// Parses a view name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        View::ALL
            .into_iter()
            .find(|view| view.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| CoreError::UnknownView(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_landing() {
        assert_eq!(View::default(), View::Landing);
    }

    #[test]
    fn test_parse() {
        assert_eq!("products".parse::<View>(), Ok(View::Products));
        assert_eq!(" Cart ".parse::<View>(), Ok(View::Cart));
        assert_eq!(
            "checkout".parse::<View>(),
            Err(CoreError::UnknownView("checkout".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for view in View::ALL {
            assert_eq!(view.to_string().parse::<View>(), Ok(view));
        }
    }

    #[test]
    fn test_header_visibility() {
        assert!(!View::Landing.shows_header());
        assert!(View::Products.shows_header());
        assert!(View::Cart.shows_header());
    }
}
