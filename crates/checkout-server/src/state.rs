//! Application State

use std::sync::Arc;

use checkout_payments::StripeClient;

use crate::catalog::Catalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Product catalog served to the storefront
    pub catalog: Arc<Catalog>,

    /// Stripe client (None when payments are not configured)
    pub stripe: Option<Arc<StripeClient>>,
}
