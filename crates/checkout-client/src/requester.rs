//! Resilient Session Requester
//!
//! Wraps session creation in a bounded retry loop: exponential backoff
//! between counted attempts, a fixed pause while the client is offline
//! (offline waits consume no attempt), and validation before any network
//! traffic.

use checkout_core::{
    CheckoutError, CheckoutRequest, LineItem, Product, Result, RetryPolicy, SessionResult,
};

use crate::connectivity::Connectivity;
use crate::redirect::{HostedCheckout, Navigator};
use crate::sleep::Sleeper;
use crate::transport::CheckoutTransport;

/// Requests hosted checkout sessions with bounded retries
pub struct SessionRequester<T, C, S> {
    transport: T,
    connectivity: C,
    sleeper: S,
    policy: RetryPolicy,
}

impl<T, C, S> SessionRequester<T, C, S>
where
    T: CheckoutTransport,
    C: Connectivity,
    S: Sleeper,
{
    pub fn new(transport: T, connectivity: C, sleeper: S) -> Self {
        Self {
            transport,
            connectivity,
            sleeper,
            policy: RetryPolicy::default(),
        }
    }

    /// Override the retry policy
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Create a checkout session for the given items.
    ///
    /// Validation failures and an offline client fail before any network
    /// call. Transient failures (transport errors and non-2xx statuses)
    /// are retried up to the policy's attempt budget with exponential
    /// backoff; time spent waiting for connectivity consumes no attempt.
    /// Auth and invalid-response failures are surfaced immediately.
    pub async fn request_session(&self, items: &[LineItem]) -> Result<SessionResult> {
        let request = CheckoutRequest::new(items.to_vec());
        request.validate()?;

        if !self.connectivity.is_online() {
            return Err(CheckoutError::Network("no network connectivity".into()));
        }

        let mut attempt = 1;
        loop {
            let err = match self.transport.create_session(&request).await {
                Ok(payload) => return payload.into_result(),
                Err(err) => err,
            };

            if !err.is_retryable() {
                return Err(err);
            }

            // Losing connectivity mid-flow is not a failed attempt: hold
            // the same attempt until the client is back online.
            if !self.connectivity.is_online() {
                tracing::warn!("client offline, waiting for connectivity");
                self.sleeper.sleep(self.policy.connectivity_wait).await;
                continue;
            }

            if attempt >= self.policy.max_attempts {
                tracing::warn!(attempt, error = %err, "retry budget exhausted");
                return Err(err);
            }

            let delay = self.policy.next_delay(attempt);
            tracing::warn!(attempt, ?delay, error = %err, "session creation failed, retrying");
            self.sleeper.sleep(delay).await;
            attempt += 1;
        }
    }

    /// Create a session and drive the redirect to the hosted payment page.
    ///
    /// A direct URL navigates immediately and never touches the provider
    /// primitive; a bare session id goes through it.
    pub async fn checkout<N, H>(&self, items: &[LineItem], navigator: &N, hosted: &H) -> Result<()>
    where
        N: Navigator,
        H: HostedCheckout,
    {
        match self.request_session(items).await? {
            SessionResult::RedirectUrl(url) => navigator.navigate(&url),
            SessionResult::SessionId(id) => hosted.redirect_to_session(&id).await,
        }
    }

    /// Fetch the product catalog. A single attempt: the shop page shows a
    /// load error instead of retrying.
    pub async fn load_products(&self) -> Result<Vec<Product>> {
        self.transport.fetch_products().await
    }
}
