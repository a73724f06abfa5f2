//! # Catalog Commands
//!
//! Read-only product queries.

use beesy_core::projection::{listing, ListingPage};
use beesy_core::{Catalog, Product};
use tracing::debug;

use crate::error::ApiError;
use crate::state::SessionState;

/// The product grid, grouped by category, with in-cart flags.
pub fn list_products(catalog: &Catalog, session: &SessionState) -> ListingPage {
    debug!("list_products command");
    session.with_session(|s| listing(catalog, s.cart()))
}

/// A single product by id.
pub fn get_product(catalog: &Catalog, product_id: &str) -> Result<Product, ApiError> {
    debug!(product_id = %product_id, "get_product command");
    Ok(catalog.require(product_id)?.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::error::ErrorCode;

    #[test]
    fn test_list_products_marks_added() {
        let catalog = Catalog::plants();
        let mut session = SessionState::new();
        add_to_cart(&catalog, &mut session, "anthurium").unwrap();

        let page = list_products(&catalog, &session);
        let added: Vec<&str> = page
            .sections
            .iter()
            .flat_map(|s| s.cards.iter())
            .filter(|c| c.in_cart)
            .map(|c| c.product.id.as_str())
            .collect();
        assert_eq!(added, vec!["anthurium"]);
    }

    #[test]
    fn test_get_product() {
        let catalog = Catalog::plants();
        assert_eq!(get_product(&catalog, "orchid").unwrap().name, "Phalaenopsis Orchid");
        assert_eq!(
            get_product(&catalog, "fern").unwrap_err().code,
            ErrorCode::NotFound
        );
    }
}
