//! HTTP Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use checkout_core::{CheckoutRequest, Product};
use checkout_payments::{CreatedSession, PaymentError};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub stripe_configured: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, error: impl Into<String>, code: &str) -> HandlerError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        stripe_configured: state.stripe.is_some(),
    })
}

/// Product catalog endpoint
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.products().to_vec())
}

/// Create a hosted checkout session
pub async fn create_checkout_session(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutRequest>,
) -> Result<Json<CreatedSession>, HandlerError> {
    payload.validate().map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, e.user_message(), "INVALID_REQUEST")
    })?;

    let stripe = state.stripe.as_ref().ok_or_else(|| {
        error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Payments not configured",
            "PAYMENTS_DISABLED",
        )
    })?;

    let session = stripe.create_session(&payload).await.map_err(|e| {
        tracing::error!("Checkout error: {}", e);
        match e {
            PaymentError::Auth(_) => {
                error_response(StatusCode::UNAUTHORIZED, e.user_message(), "AUTH_CONFIG")
            }
            PaymentError::InvalidRequest(_) => {
                error_response(StatusCode::BAD_REQUEST, e.user_message(), "INVALID_REQUEST")
            }
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                e.user_message(),
                "CHECKOUT_ERROR",
            ),
        }
    })?;

    Ok(Json(session))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use checkout_core::LineItem;

    use super::*;
    use crate::catalog::Catalog;

    fn state_without_stripe() -> AppState {
        AppState {
            catalog: Arc::new(Catalog::new()),
            stripe: None,
        }
    }

    #[tokio::test]
    async fn test_empty_request_is_bad_request() {
        let result = create_checkout_session(
            State(state_without_stripe()),
            Json(CheckoutRequest::new(Vec::new())),
        )
        .await;

        let (status, body) = result.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn test_unconfigured_payments_is_service_unavailable() {
        let request = CheckoutRequest::new(vec![LineItem::new("Cap", 500, 1)]);
        let result =
            create_checkout_session(State(state_without_stripe()), Json(request)).await;

        let (status, body) = result.unwrap_err();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.code, "PAYMENTS_DISABLED");
    }

    #[tokio::test]
    async fn test_catalog_endpoint_returns_products() {
        let Json(products) = list_products(State(state_without_stripe())).await;
        assert!(!products.is_empty());
    }
}
