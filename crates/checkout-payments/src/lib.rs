//! # checkout-payments
//!
//! Stripe Checkout (Hosted) integration for the storefront backend.
//!
//! **Flow:** Shop page → Redirect to Stripe's hosted page → Redirect back
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌─────────────┐
//! │  Storefront │────▶│  Stripe Hosted  │────▶│ Storefront  │
//! │   (shop)    │     │  Checkout Page  │     │ (success)   │
//! └─────────────┘     └─────────────────┘     └─────────────┘
//! ```
//!
//! The hosted approach keeps payment details off this codebase entirely:
//! the backend creates a payment-mode session from the submitted line
//! items and hands the shopper to Stripe. The frontend receives exactly
//! `{ id, url }` back and drives the redirect.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use checkout_core::{CheckoutRequest, LineItem};
//! use checkout_payments::StripeClient;
//!
//! let client = StripeClient::from_env()?;
//!
//! let session = client
//!     .create_session(&CheckoutRequest::new(vec![LineItem::new("Cap", 500, 1)]))
//!     .await?;
//!
//! // Redirect user to: session.url (or hand session.id to Stripe.js)
//! ```

mod checkout;
mod error;

pub use checkout::{CheckoutConfig, CreatedSession, StripeClient};
pub use error::{PaymentError, Result};
