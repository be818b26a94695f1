//! Line Items
//!
//! The checkout request body: an ordered sequence of line items, sent
//! verbatim as JSON to the session endpoint. Items are immutable once
//! submitted.

use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, Result};

/// One product/quantity/price entry in a checkout request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog id, when the item came from the product list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name shown on the hosted payment page
    pub name: String,

    /// Longer description shown under the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Unit price in minor currency units
    pub price: i64,

    /// Positive quantity
    pub quantity: u32,
}

impl LineItem {
    pub fn new(name: impl Into<String>, price: i64, quantity: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            price,
            quantity,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check the line-item invariants: a name, a non-negative price, and a
    /// quantity of at least 1.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CheckoutError::Validation("line item has no name".into()));
        }
        if self.price < 0 {
            return Err(CheckoutError::Validation(format!(
                "'{}' has a negative price",
                self.name
            )));
        }
        if self.quantity == 0 {
            return Err(CheckoutError::Validation(format!(
                "'{}' has a zero quantity",
                self.name
            )));
        }
        Ok(())
    }

    /// Subtotal in minor units
    pub fn subtotal(&self) -> i64 {
        self.price.saturating_mul(i64::from(self.quantity))
    }
}

/// Request body for session creation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub items: Vec<LineItem>,
}

impl CheckoutRequest {
    pub fn new(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    /// Reject empty selections, invalid items, and non-positive totals.
    /// Runs before any network call.
    pub fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(CheckoutError::Validation("no items selected".into()));
        }
        for item in &self.items {
            item.validate()?;
        }
        if self.total() <= 0 {
            return Err(CheckoutError::Validation(
                "Please enter a valid amount greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Order total in minor units
    pub fn total(&self) -> i64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = CheckoutRequest::new(vec![
            LineItem::new("Cap", 500, 1),
            LineItem::new("Shoes", 11300, 2).with_id("prod_shoes"),
        ]);
        assert!(request.validate().is_ok());
        assert_eq!(request.total(), 23100);
    }

    #[test]
    fn test_empty_selection_rejected() {
        let request = CheckoutRequest::new(Vec::new());
        assert!(matches!(
            request.validate(),
            Err(CheckoutError::Validation(_))
        ));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let request = CheckoutRequest::new(vec![LineItem::new("Cap", 500, 0)]);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let request = CheckoutRequest::new(vec![LineItem::new("Refund", -500, 1)]);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_zero_total_rejected() {
        let request = CheckoutRequest::new(vec![LineItem::new("Freebie", 0, 3)]);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_request_body_shape() {
        let request = CheckoutRequest::new(vec![
            LineItem::new("Custom Payment", 1234, 1).with_description("One-time payment"),
        ]);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["items"][0]["name"], "Custom Payment");
        assert_eq!(body["items"][0]["price"], 1234);
        assert_eq!(body["items"][0]["quantity"], 1);
        // absent id is omitted, not null
        assert!(body["items"][0].get("id").is_none());
    }
}
