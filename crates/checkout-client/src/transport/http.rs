//! HTTP Transport
//!
//! reqwest-backed implementation of [`CheckoutTransport`].

use std::time::Duration;

use async_trait::async_trait;
use checkout_core::{CheckoutError, CheckoutRequest, Product, Result, SessionPayload};

use super::CheckoutTransport;

const SESSION_PATH: &str = "/api/create-checkout-session";
const PRODUCTS_PATH: &str = "/api/products";

const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP transport to the checkout backend
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    attempt_timeout: Duration,
}

impl HttpTransport {
    /// Create a transport against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
        }
    }

    /// Override the per-attempt timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Read a non-2xx response into the matching error. The body carries
    /// the backend's diagnostic message; 401 signals a payment-provider
    /// credential misconfiguration, not a generic failure.
    async fn read_failure(response: reqwest::Response) -> CheckoutError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        if status == 401 {
            CheckoutError::Auth(body)
        } else {
            CheckoutError::Server { status, body }
        }
    }

    fn send_with_timeout(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        // reqwest exposes per-request timeouts on native targets only; on
        // wasm the browser's fetch defaults apply.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(self.attempt_timeout);
        builder
    }
}

#[async_trait(?Send)]
impl CheckoutTransport for HttpTransport {
    async fn create_session(&self, request: &CheckoutRequest) -> Result<SessionPayload> {
        let builder = self
            .client
            .post(self.url(SESSION_PATH))
            .header("Accept", "application/json")
            .json(request);

        let response = self
            .send_with_timeout(builder)
            .send()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::read_failure(response).await);
        }

        response
            .json::<SessionPayload>()
            .await
            .map_err(|e| CheckoutError::InvalidResponse(e.to_string()))
    }

    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let builder = self.client.get(self.url(PRODUCTS_PATH));

        let response = self
            .send_with_timeout(builder)
            .send()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::read_failure(response).await);
        }

        response
            .json::<Vec<Product>>()
            .await
            .map_err(|e| CheckoutError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining_strips_trailing_slash() {
        let transport = HttpTransport::new("http://localhost:4242/");
        assert_eq!(
            transport.url(SESSION_PATH),
            "http://localhost:4242/api/create-checkout-session"
        );
        assert_eq!(
            transport.url(PRODUCTS_PATH),
            "http://localhost:4242/api/products"
        );
    }

    #[test]
    fn test_timeout_override() {
        let transport =
            HttpTransport::new("http://localhost:4242").with_timeout(Duration::from_secs(3));
        assert_eq!(transport.attempt_timeout, Duration::from_secs(3));
    }
}
