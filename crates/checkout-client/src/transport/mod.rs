//! Checkout Transport
//!
//! Abstraction over the backend endpoints (Strategy pattern): one
//! implementation per backend, plus scripted mocks in tests.

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use checkout_core::{CheckoutRequest, Product, Result, SessionPayload};

/// Transport to the checkout backend
///
/// Futures are `?Send`: the requester runs on the single-threaded browser
/// event loop, and reqwest's wasm futures are not `Send`.
#[async_trait(?Send)]
pub trait CheckoutTransport {
    /// POST the line items to the session endpoint
    async fn create_session(&self, request: &CheckoutRequest) -> Result<SessionPayload>;

    /// GET the product catalog
    async fn fetch_products(&self) -> Result<Vec<Product>>;
}
