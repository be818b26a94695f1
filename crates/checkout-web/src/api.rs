//! API Wiring
//!
//! Browser implementations of the requester's injected capabilities and
//! the two entry points the pages call.

use std::time::Duration;

use async_trait::async_trait;
use wasm_bindgen_futures::JsFuture;

use checkout_client::{
    Connectivity, HostedCheckout, HttpTransport, Navigator, SessionRequester, Sleeper,
};
use checkout_core::{CheckoutError, LineItem, Product, Result};

use crate::stripe;

/// Backend origin; the bundle is served from the same origin as the API.
fn base_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:4242".into())
}

/// `navigator.onLine` probe
struct BrowserConnectivity;

impl Connectivity for BrowserConnectivity {
    fn is_online(&self) -> bool {
        web_sys::window().map_or(true, |w| w.navigator().on_line())
    }
}

/// `setTimeout`-backed sleeper
struct BrowserSleeper;

#[async_trait(?Send)]
impl Sleeper for BrowserSleeper {
    async fn sleep(&self, duration: Duration) {
        let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis);
            }
        });
        let _ = JsFuture::from(promise).await;
    }
}

/// Full-page navigation via `window.location`
struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn navigate(&self, url: &str) -> Result<()> {
        let window = web_sys::window()
            .ok_or_else(|| CheckoutError::Redirect("no window available".into()))?;
        window
            .location()
            .set_href(url)
            .map_err(|_| CheckoutError::Redirect("navigation was blocked".into()))
    }
}

/// Stripe.js `redirectToCheckout` primitive
struct StripeHosted;

#[async_trait(?Send)]
impl HostedCheckout for StripeHosted {
    async fn redirect_to_session(&self, session_id: &str) -> Result<()> {
        stripe::redirect_to_checkout(session_id)
            .await
            .map_err(CheckoutError::Redirect)
    }
}

fn requester() -> SessionRequester<HttpTransport, BrowserConnectivity, BrowserSleeper> {
    SessionRequester::new(
        HttpTransport::new(base_url()),
        BrowserConnectivity,
        BrowserSleeper,
    )
}

/// Create a session for the items and drive the redirect to the hosted
/// payment page.
pub async fn checkout(items: &[LineItem]) -> Result<()> {
    requester()
        .checkout(items, &WindowNavigator, &StripeHosted)
        .await
}

/// Load the product catalog
pub async fn load_products() -> Result<Vec<Product>> {
    requester().load_products().await
}

/// Blocking notification, the only error surface the flow has
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
