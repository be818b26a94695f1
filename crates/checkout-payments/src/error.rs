//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-provider errors surfaced by the session endpoint
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Stripe API error
    #[error("Stripe error: {0}")]
    Stripe(String),

    /// Stripe rejected the API credentials
    #[error("Stripe authentication failed: {0}")]
    Auth(String),

    /// Request failed validation before reaching Stripe
    #[error("Invalid checkout request: {0}")]
    InvalidRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, PaymentError::Stripe(_))
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            PaymentError::Stripe(_) => "Payment processing failed. Please try again.",
            PaymentError::Auth(_) => {
                "Authentication error: please check your Stripe API keys."
            }
            PaymentError::InvalidRequest(_) => "The checkout request was rejected.",
            PaymentError::Config(_) => "Payments are not configured.",
        }
    }
}
