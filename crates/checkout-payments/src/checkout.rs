//! Stripe Checkout Integration
//!
//! Implements the "Stripe Checkout (Hosted)" approach: the backend turns
//! the submitted line items into a payment-mode session and the shopper
//! finishes on Stripe's hosted page.

use serde::{Deserialize, Serialize};
use stripe::{
    CheckoutSession as StripeCheckoutSession, CheckoutSessionMode, Client,
    CreateCheckoutSession, CreateCheckoutSessionLineItems,
    CreateCheckoutSessionLineItemsPriceData,
    CreateCheckoutSessionLineItemsPriceDataProductData, Currency,
};

use checkout_core::CheckoutRequest;

use crate::error::{PaymentError, Result};

/// Session endpoint configuration
#[derive(Clone, Debug)]
pub struct CheckoutConfig {
    /// Public origin the hosted page returns to
    pub domain: String,

    /// Currency for line-item price data
    pub currency: Currency,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            domain: "http://localhost:4242".into(),
            currency: Currency::GBP,
        }
    }
}

impl CheckoutConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let domain = std::env::var("CHECKOUT_DOMAIN")
            .map(|d| d.trim_end_matches('/').to_string())
            .unwrap_or(defaults.domain);
        let currency = std::env::var("CHECKOUT_CURRENCY")
            .ok()
            .and_then(|c| parse_currency(&c))
            .unwrap_or(defaults.currency);

        Self { domain, currency }
    }
}

fn parse_currency(code: &str) -> Option<Currency> {
    match code.to_lowercase().as_str() {
        "gbp" => Some(Currency::GBP),
        "usd" => Some(Currency::USD),
        "eur" => Some(Currency::EUR),
        other => {
            tracing::warn!("unsupported currency '{}', keeping default", other);
            None
        }
    }
}

/// Stripe client wrapper
pub struct StripeClient {
    client: Client,
    config: CheckoutConfig,
}

impl StripeClient {
    /// Create a new Stripe client
    pub fn new(secret_key: &str, config: CheckoutConfig) -> Self {
        Self {
            client: Client::new(secret_key),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .map_err(|_| PaymentError::Config("STRIPE_SECRET_KEY not set".into()))?;

        Ok(Self::new(&secret_key, CheckoutConfig::from_env()))
    }

    /// Create a hosted Checkout session for the given line items.
    ///
    /// Returns the session id and, when Stripe supplies one, the direct
    /// URL of the hosted payment page.
    pub async fn create_session(&self, request: &CheckoutRequest) -> Result<CreatedSession> {
        request
            .validate()
            .map_err(|e| PaymentError::InvalidRequest(e.to_string()))?;

        let success_url = format!("{}/?success=true", self.config.domain);
        let cancel_url = format!("{}/?canceled=true", self.config.domain);
        let line_items = to_stripe_line_items(request, self.config.currency);

        let mut params = CreateCheckoutSession::new();
        params.success_url = Some(&success_url);
        params.cancel_url = Some(&cancel_url);
        params.mode = Some(CheckoutSessionMode::Payment);
        params.line_items = Some(line_items);

        let session = StripeCheckoutSession::create(&self.client, params)
            .await
            .map_err(map_stripe_error)?;

        Ok(CreatedSession {
            id: session.id.to_string(),
            url: session.url,
        })
    }
}

/// Map line items onto Stripe's inline price data
fn to_stripe_line_items(
    request: &CheckoutRequest,
    currency: Currency,
) -> Vec<CreateCheckoutSessionLineItems> {
    request
        .items
        .iter()
        .map(|item| CreateCheckoutSessionLineItems {
            quantity: Some(u64::from(item.quantity)),
            price_data: Some(CreateCheckoutSessionLineItemsPriceData {
                currency,
                unit_amount: Some(item.price),
                product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                    name: item.name.clone(),
                    description: item.description.clone(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        })
        .collect()
}

fn map_stripe_error(err: stripe::StripeError) -> PaymentError {
    match err {
        stripe::StripeError::Stripe(ref request_err) if request_err.http_status == 401 => {
            PaymentError::Auth(err.to_string())
        }
        other => PaymentError::Stripe(other.to_string()),
    }
}

/// Result of creating a checkout session; serialized verbatim to the
/// frontend as `{ id, url }`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreatedSession {
    /// Stripe session id
    pub id: String,

    /// Hosted payment page URL, when the API returned one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use checkout_core::LineItem;

    use super::*;

    #[test]
    fn test_line_item_mapping() {
        let request = CheckoutRequest::new(vec![
            LineItem::new("Custom Payment", 1234, 1).with_description("One-time payment"),
            LineItem::new("Cap", 500, 3),
        ]);

        let mapped = to_stripe_line_items(&request, Currency::GBP);
        assert_eq!(mapped.len(), 2);

        let first = mapped[0].price_data.as_ref().unwrap();
        assert_eq!(first.unit_amount, Some(1234));
        assert_eq!(
            first.product_data.as_ref().unwrap().name,
            "Custom Payment"
        );
        assert_eq!(
            first.product_data.as_ref().unwrap().description.as_deref(),
            Some("One-time payment")
        );
        assert_eq!(mapped[1].quantity, Some(3));
    }

    #[tokio::test]
    async fn test_invalid_request_rejected_before_stripe() {
        let client = StripeClient::new("sk_test_placeholder", CheckoutConfig::default());
        let request = CheckoutRequest::new(Vec::new());

        let result = client.create_session(&request).await;
        assert!(matches!(result, Err(PaymentError::InvalidRequest(_))));
    }

    #[test]
    fn test_currency_parsing() {
        assert_eq!(parse_currency("GBP"), Some(Currency::GBP));
        assert_eq!(parse_currency("usd"), Some(Currency::USD));
        assert_eq!(parse_currency("doubloons"), None);
    }

    #[test]
    fn test_config_defaults() {
        let config = CheckoutConfig::default();
        assert_eq!(config.domain, "http://localhost:4242");
        assert_eq!(config.currency, Currency::GBP);
    }
}
