//! Product Catalog
//!
//! Static demo catalog served by `GET /api/products`. Prices are minor
//! currency units.

use checkout_core::Product;

const ENTRIES: &[(&str, &str, &str, i64)] = &[
    (
        "prod_cap",
        "Cap",
        "A stylish cap to keep the sun away. Great for adventures and weekends.",
        500,
    ),
    (
        "prod_tshirt",
        "T-Shirt",
        "Soft, comfy, and goes with anything. The classic tee for every day.",
        2900,
    ),
    (
        "prod_shoes",
        "Shoes",
        "Run faster with these sneakers. Comfort meets style.",
        11300,
    ),
];

/// Static product catalog
pub struct Catalog {
    products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        let products = ENTRIES
            .iter()
            .map(|(id, name, description, price)| Product {
                id: (*id).into(),
                name: (*name).into(),
                description: (*description).into(),
                price: *price,
                image: format!("https://via.placeholder.com/150?text={name}"),
            })
            .collect();

        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entries_are_valid() {
        let catalog = Catalog::new();
        assert!(!catalog.products().is_empty());

        for product in catalog.products() {
            assert!(!product.id.is_empty());
            assert!(product.price >= 0);
            assert!(product.to_line_item(1).validate().is_ok());
        }
    }
}
