//! Storefront Checkout Server
//!
//! Axum-based backend for the hosted checkout flow: product catalog,
//! session creation against Stripe, and static hosting for the WASM
//! storefront.

mod catalog;
mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use checkout_payments::StripeClient;

use crate::catalog::Catalog;
use crate::handlers::{create_checkout_session, health_check, list_products};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Initialize payments
    let stripe = StripeClient::from_env().ok();

    if stripe.is_some() {
        tracing::info!("✓ Stripe configured");
    } else {
        tracing::warn!("⚠ Stripe not configured - session creation disabled");
        tracing::warn!("  Set STRIPE_SECRET_KEY in .env");
    }

    // Build application state
    let state = AppState {
        catalog: Arc::new(Catalog::new()),
        stripe: stripe.map(Arc::new),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/products", get(list_products))
        .route("/api/create-checkout-session", post(create_checkout_session))
        // Static files (WASM frontend)
        .fallback_service(tower_http::services::ServeDir::new("static"))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:4242".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Storefront server running on http://{}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                      - Health check");
    tracing::info!("  GET  /api/products                - Product catalog");
    tracing::info!("  POST /api/create-checkout-session - Create hosted session");

    axum::serve(listener, app).await?;

    Ok(())
}
