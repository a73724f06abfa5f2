//! # Catalog
//!
//! The fixed, ordered list of plants the store sells, and its grouping by
//! category for the product listing.
//!
//! ## Grouping Rules
//! ```text
//! Catalog order                       by_category()
//! ─────────────                       ─────────────
//! monstera     Tropicals      ──►     Tropicals : monstera, fiddle-leaf
//! fiddle-leaf  Tropicals              Low Light : snake, zz-plant
//! snake        Low Light              Flowering : orchid, anthurium
//! zz-plant     Low Light
//! orchid       Flowering      • categories in first-seen order
//! anthurium    Flowering      • products keep catalog order inside a group
//! ```

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{ImageRef, Product};
use crate::validation::validate_product;

/// The plants on sale: `(id, name, price in dollars, category, image asset)`.
const PLANTS: &[(&str, &str, i64, &str, &str)] = &[
    ("monstera", "Monstera Deliciosa", 28, "Tropicals", "monstera.jpg"),
    ("fiddle-leaf", "Fiddle Leaf Fig", 42, "Tropicals", "fiddle-leaf.jpg"),
    ("snake", "Snake Plant", 22, "Low Light", "snake.jpg"),
    ("zz-plant", "ZZ Plant", 24, "Low Light", "zz-plant.jpg"),
    ("orchid", "Phalaenopsis Orchid", 36, "Flowering", "orchid.jpg"),
    ("anthurium", "Anthurium Flamingo", 32, "Flowering", "anthurium.jpg"),
];

/// An immutable, ordered product list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
}

/// One category and its products, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub products: Vec<&'a Product>,
}

impl Catalog {
    /// Builds a catalog from arbitrary records.
    ///
    /// ## Errors
    /// - `CoreError::Validation` if a record fails [`validate_product`]
    /// - `CoreError::Validation(Duplicate)` if two records share an id
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            validate_product(product)?;

            if !seen.insert(product.id.as_str()) {
                return Err(CoreError::Validation(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: product.id.clone(),
                }));
            }
        }

        Ok(Catalog { products })
    }

    /// The store's six plants.
    pub fn plants() -> Self {
        let products = PLANTS
            .iter()
            .map(|(id, name, dollars, category, image)| {
                Product::new(
                    *id,
                    *name,
                    Money::from_major(*dollars),
                    *category,
                    ImageRef::new(*image),
                )
            })
            .collect();

        Catalog { products }
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`get`](Self::get), but an unknown id is an error.
    pub fn require(&self, id: &str) -> CoreResult<&Product> {
        self.get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// Products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Partitions the catalog by category.
    ///
    /// Categories appear in first-seen order and products keep their
    /// catalog order within a group.
    pub fn by_category(&self) -> Vec<CategoryGroup<'_>> {
        let mut groups: IndexMap<&str, Vec<&Product>> = IndexMap::new();

        for product in &self.products {
            groups
                .entry(product.category.as_str())
                .or_default()
                .push(product);
        }

        groups
            .into_iter()
            .map(|(category, products)| CategoryGroup { category, products })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<'a>(group: &CategoryGroup<'a>) -> Vec<&'a str> {
        group.products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_plants_pass_validation() {
        let plants = Catalog::plants();
        let rebuilt = Catalog::new(plants.iter().cloned().collect()).unwrap();
        assert_eq!(rebuilt, plants);
        assert_eq!(plants.len(), 6);
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::plants();

        let monstera = catalog.get("monstera").unwrap();
        assert_eq!(monstera.name, "Monstera Deliciosa");
        assert_eq!(monstera.price, Money::from_major(28));

        assert!(catalog.get("cactus").is_none());
        assert_eq!(
            catalog.require("cactus"),
            Err(CoreError::ProductNotFound("cactus".to_string()))
        );
    }

    #[test]
    fn test_by_category_keeps_first_seen_order() {
        let catalog = Catalog::plants();
        let groups = catalog.by_category();

        let categories: Vec<&str> = groups.iter().map(|g| g.category).collect();
        assert_eq!(categories, vec!["Tropicals", "Low Light", "Flowering"]);

        assert_eq!(ids(&groups[0]), vec!["monstera", "fiddle-leaf"]);
        assert_eq!(ids(&groups[1]), vec!["snake", "zz-plant"]);
        assert_eq!(ids(&groups[2]), vec!["orchid", "anthurium"]);
    }

    #[test]
    fn test_by_category_with_interleaved_records() {
        let product = |id: &str, category: &str| {
            Product::new(id, id, Money::from_major(1), category, ImageRef::new("x.jpg"))
        };
        let catalog = Catalog::new(vec![
            product("a", "Ferns"),
            product("b", "Cacti"),
            product("c", "Ferns"),
        ])
        .unwrap();

        let groups = catalog.by_category();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Ferns");
        assert_eq!(ids(&groups[0]), vec!["a", "c"]);
        assert_eq!(ids(&groups[1]), vec!["b"]);
    }

    #[test]
    fn test_new_rejects_duplicates_and_bad_records() {
        let snake = Catalog::plants().require("snake").unwrap().clone();

        let err = Catalog::new(vec![snake.clone(), snake.clone()]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { ref value, .. }) if value == "snake"
        ));

        let mut free = snake;
        free.price = Money::zero();
        assert!(Catalog::new(vec![free]).is_err());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.by_category().is_empty());
    }
}
