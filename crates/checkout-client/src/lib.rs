//! # checkout-client
//!
//! The resilient session requester: turns a validated selection into a
//! hosted checkout session and drives the redirect, surviving transient
//! backend failures and offline windows.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     SessionRequester                          │
//! │  ┌────────────┐  ┌──────────────┐  ┌──────────────────────┐  │
//! │  │   Retry    │  │ Connectivity │  │  CheckoutTransport   │  │
//! │  │   Loop     │──│   + Sleeper  │──│  (HTTP / mock)       │  │
//! │  └────────────┘  └──────────────┘  └──────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//!                │ SessionResult
//!                ▼
//!     Navigator (direct URL)  /  HostedCheckout (session id)
//! ```
//!
//! Every capability is an injected trait, so tests simulate offline
//! transitions and observe backoff delays deterministically, with no
//! timers and no network.

pub mod connectivity;
pub mod redirect;
pub mod requester;
pub mod sleep;
pub mod transport;

pub use connectivity::{AlwaysOnline, Connectivity};
pub use redirect::{HostedCheckout, Navigator};
pub use requester::SessionRequester;
pub use sleep::Sleeper;
pub use transport::{CheckoutTransport, HttpTransport};

#[cfg(not(target_arch = "wasm32"))]
pub use sleep::TokioSleeper;
