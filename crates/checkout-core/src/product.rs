//! Catalog Products

use serde::{Deserialize, Serialize};

use crate::item::LineItem;

/// One entry from the product catalog endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,

    pub name: String,

    pub description: String,

    /// Unit price in minor currency units
    pub price: i64,

    /// Image URL for the product card
    pub image: String,
}

impl Product {
    /// Convert to a line item with the given quantity
    pub fn to_line_item(&self, quantity: u32) -> LineItem {
        LineItem::new(self.name.clone(), self.price, quantity)
            .with_id(self.id.clone())
            .with_description(self.description.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_line_item() {
        let product = Product {
            id: "prod_cap".into(),
            name: "Cap".into(),
            description: "A stylish cap".into(),
            price: 500,
            image: "https://example.com/cap.png".into(),
        };

        let item = product.to_line_item(2);
        assert_eq!(item.id.as_deref(), Some("prod_cap"));
        assert_eq!(item.price, 500);
        assert_eq!(item.quantity, 2);
        assert_eq!(item.subtotal(), 1000);
    }
}
