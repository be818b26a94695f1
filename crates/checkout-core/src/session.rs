//! Session Results
//!
//! Wire payload from the session endpoint and the decoded redirect
//! outcome. The backend contract allows either an opaque session id (fed
//! to the provider's client-side redirect call) or a direct URL; exactly
//! one of the two drives the redirect.

use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, Result};

/// Raw response body from `POST /api/create-checkout-session`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Decoded session outcome
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionResult {
    /// Direct redirect URL; navigate the browser there
    RedirectUrl(String),

    /// Opaque session id for the provider's redirect primitive
    SessionId(String),
}

impl SessionPayload {
    /// Decode into a redirect outcome. A URL wins when both fields are
    /// present; neither present is an invalid response.
    pub fn into_result(self) -> Result<SessionResult> {
        if let Some(url) = self.url.filter(|u| !u.is_empty()) {
            return Ok(SessionResult::RedirectUrl(url));
        }
        if let Some(id) = self.id.filter(|i| !i.is_empty()) {
            return Ok(SessionResult::SessionId(id));
        }
        Err(CheckoutError::InvalidResponse(
            "response carried neither a url nor a session id".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_drives_redirect() {
        let payload: SessionPayload =
            serde_json::from_str(r#"{"url": "https://checkout.example/pay/cs_123"}"#).unwrap();
        assert_eq!(
            payload.into_result().unwrap(),
            SessionResult::RedirectUrl("https://checkout.example/pay/cs_123".into())
        );
    }

    #[test]
    fn test_id_drives_provider_redirect() {
        let payload: SessionPayload = serde_json::from_str(r#"{"id": "cs_123"}"#).unwrap();
        assert_eq!(
            payload.into_result().unwrap(),
            SessionResult::SessionId("cs_123".into())
        );
    }

    #[test]
    fn test_url_wins_over_id() {
        let payload = SessionPayload {
            id: Some("cs_123".into()),
            url: Some("https://checkout.example/pay/cs_123".into()),
        };
        assert!(matches!(
            payload.into_result().unwrap(),
            SessionResult::RedirectUrl(_)
        ));
    }

    #[test]
    fn test_neither_field_is_invalid() {
        let payload: SessionPayload = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            payload.into_result(),
            Err(CheckoutError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let payload = SessionPayload {
            id: Some(String::new()),
            url: Some(String::new()),
        };
        assert!(payload.into_result().is_err());
    }
}
