//! Error Types

use thiserror::Error;

/// Result type alias for checkout operations
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Checkout error types
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Invalid amount or empty selection, rejected before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// No connectivity or transport-level failure
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx HTTP status from the session endpoint
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// Payment-provider credential misconfiguration (HTTP 401)
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Session response carried neither a redirect URL nor a session id
    #[error("Invalid session response: {0}")]
    InvalidResponse(String),

    /// The provider's client-side redirect primitive reported an error
    #[error("Redirect failed: {0}")]
    Redirect(String),
}

impl CheckoutError {
    /// Check if error is transient and worth another attempt
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CheckoutError::Network(_) | CheckoutError::Server { .. }
        )
    }

    /// Convert to the message shown in the blocking alert
    pub fn user_message(&self) -> String {
        match self {
            CheckoutError::Validation(msg) => msg.clone(),
            CheckoutError::Network(_) => {
                "No internet connection. Please check your network and try again.".into()
            }
            CheckoutError::Server { status, .. } => {
                format!("Checkout failed (HTTP {status}). Please try again.")
            }
            CheckoutError::Auth(_) => {
                "Authentication error: please check your payment provider API keys.".into()
            }
            CheckoutError::InvalidResponse(_) => {
                "Failed to create checkout session. No session ID received.".into()
            }
            CheckoutError::Redirect(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(CheckoutError::Network("reset".into()).is_retryable());
        assert!(
            CheckoutError::Server {
                status: 503,
                body: "maintenance".into()
            }
            .is_retryable()
        );

        assert!(!CheckoutError::Validation("empty".into()).is_retryable());
        assert!(!CheckoutError::Auth("bad key".into()).is_retryable());
        assert!(!CheckoutError::InvalidResponse("no fields".into()).is_retryable());
        assert!(!CheckoutError::Redirect("blocked".into()).is_retryable());
    }

    #[test]
    fn test_auth_message_names_configuration() {
        let msg = CheckoutError::Auth("401".into()).user_message();
        assert!(msg.contains("API keys"));
    }
}
