//! Cart State
//!
//! Explicit selection state for the shop page. Each user action maps to a
//! single update method and the UI re-renders from the resulting value; no
//! ambient globals.

use crate::item::LineItem;
use crate::product::Product;

/// One selected product with its quantity
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub product: Product,
    pub quantity: u32,
}

/// Selection state for the product list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cart {
    selections: Vec<Selection>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a product in or out of the selection. A newly added product
    /// starts with quantity 1.
    pub fn toggle(&mut self, product: &Product) {
        if let Some(index) = self.position(&product.id) {
            self.selections.remove(index);
        } else {
            self.selections.push(Selection {
                product: product.clone(),
                quantity: 1,
            });
        }
    }

    /// Set the quantity for a selected product. Quantities clamp to at
    /// least 1; unknown ids are ignored.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if let Some(index) = self.position(product_id) {
            self.selections[index].quantity = quantity.max(1);
        }
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.position(product_id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Selection total in minor units
    pub fn total(&self) -> i64 {
        self.selections
            .iter()
            .map(|s| s.product.price.saturating_mul(i64::from(s.quantity)))
            .sum()
    }

    /// Line items for the checkout request, in selection order
    pub fn line_items(&self) -> Vec<LineItem> {
        self.selections
            .iter()
            .map(|s| s.product.to_line_item(s.quantity))
            .collect()
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.selections
            .iter()
            .position(|s| s.product.id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            price,
            image: String::new(),
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut cart = Cart::new();
        let cap = product("cap", 500);

        cart.toggle(&cap);
        assert!(cart.contains("cap"));
        assert_eq!(cart.selections()[0].quantity, 1);

        cart.toggle(&cap);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_clamps_to_one() {
        let mut cart = Cart::new();
        cart.toggle(&product("cap", 500));

        cart.set_quantity("cap", 3);
        assert_eq!(cart.selections()[0].quantity, 3);

        cart.set_quantity("cap", 0);
        assert_eq!(cart.selections()[0].quantity, 1);

        // unknown id is a no-op
        cart.set_quantity("shoes", 5);
        assert_eq!(cart.selections().len(), 1);
    }

    #[test]
    fn test_total_and_line_items() {
        let mut cart = Cart::new();
        cart.toggle(&product("cap", 500));
        cart.toggle(&product("shoes", 11300));
        cart.set_quantity("cap", 2);

        assert_eq!(cart.total(), 2 * 500 + 11300);

        let items = cart.line_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id.as_deref(), Some("cap"));
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[1].quantity, 1);
    }
}
