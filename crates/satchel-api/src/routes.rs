//! API route definitions

use crate::handlers::{ask, health};
use crate::middleware::cors::cors_headers;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Create the application router.
///
/// The two probe routes answer GET; every other path and method falls
/// through to the relay handler, which owns the OPTIONS/POST/405 contract.
/// Non-GET requests to the probe paths also fall through, so the contract
/// holds there too.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check).fallback(ask::ask_handler))
        .route("/metrics", get(health::metrics).fallback(ask::ask_handler))
        .fallback(ask::ask_handler)
        .layer(middleware::from_fn(cors_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
