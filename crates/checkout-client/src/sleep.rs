//! Backoff Sleep
//!
//! Injected clock so the retry loop stays testable: tests record the
//! requested delays instead of waiting them out.

use std::time::Duration;

use async_trait::async_trait;

/// Suspends the requester between attempts
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// Tokio-based sleeper for native targets
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioSleeper;

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
