//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`      - Short link redirect
//! - `GET  /healthz`     - Health check
//! - `/api/links*`       - Link management API
//! - anything else       - JSON 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Security headers** - `nosniff`, frame denial, no referrer

use crate::api;
use crate::api::handlers::{fallback_handler, health_handler, redirect_handler};
use crate::api::middleware::{security_headers, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
///
/// Trailing-slash normalization is applied around this router by
/// [`crate::server::run`], since it must wrap routing itself.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::link_routes())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(security_headers::layer())
        .layer(tracing::layer())
}
