//! Stripe.js Binding
//!
//! Minimal interop with the globally loaded Stripe.js bundle: construct a
//! client with the publishable key and call `redirectToCheckout` with a
//! session id. The promise only resolves with `{ error }` when the
//! redirect did not happen.

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Publishable key injected at build time
const PUBLISHABLE_KEY: Option<&str> = option_env!("STRIPE_PUBLISHABLE_KEY");

fn stripe_client() -> std::result::Result<JsValue, String> {
    let window = web_sys::window().ok_or_else(|| "no window available".to_string())?;
    let ctor = Reflect::get(&window, &JsValue::from_str("Stripe"))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or_else(|| "Stripe.js is not loaded".to_string())?;

    let key = PUBLISHABLE_KEY.unwrap_or("pk_test_placeholder");
    ctor.call1(&JsValue::NULL, &JsValue::from_str(key))
        .map_err(|_| "failed to construct the Stripe client".to_string())
}

/// Call `stripe.redirectToCheckout({ sessionId })`
pub async fn redirect_to_checkout(session_id: &str) -> std::result::Result<(), String> {
    let stripe = stripe_client()?;
    let redirect = Reflect::get(&stripe, &JsValue::from_str("redirectToCheckout"))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or_else(|| "redirectToCheckout is unavailable".to_string())?;

    let options = Object::new();
    Reflect::set(
        &options,
        &JsValue::from_str("sessionId"),
        &JsValue::from_str(session_id),
    )
    .map_err(|_| "failed to build redirect options".to_string())?;

    let promise: Promise = redirect
        .call1(&stripe, &options)
        .map_err(|_| "redirectToCheckout call failed".to_string())?
        .unchecked_into();
    let result = JsFuture::from(promise)
        .await
        .map_err(|e| format!("{e:?}"))?;

    let error = Reflect::get(&result, &JsValue::from_str("error")).unwrap_or(JsValue::UNDEFINED);
    if error.is_undefined() || error.is_null() {
        return Ok(());
    }

    let message = Reflect::get(&error, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| "Failed to redirect to checkout".to_string());
    Err(message)
}
