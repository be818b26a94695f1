//! Redirect Seams
//!
//! The two ways a created session reaches the hosted payment page: a
//! direct full-page navigation when the backend returned a URL, or the
//! payment provider's client-side redirect primitive fed with a bare
//! session id.

use async_trait::async_trait;
use checkout_core::Result;

/// Full-page navigation
pub trait Navigator {
    /// Navigate the browser to the given URL
    fn navigate(&self, url: &str) -> Result<()>;
}

/// The payment provider's client-side redirect primitive
#[async_trait(?Send)]
pub trait HostedCheckout {
    /// Redirect to the hosted page for an existing session id
    async fn redirect_to_session(&self, session_id: &str) -> Result<()>;
}
