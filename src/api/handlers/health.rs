//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service health.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// # Response Codes
///
/// - **200 OK**: the link store answered a ping
/// - **503 Service Unavailable**: the store is unreachable
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    match state.link_service.health().await {
        Ok(()) => Ok(Json(HealthResponse {
            ok: true,
            version: env!("CARGO_PKG_VERSION").to_string(),
            message: None,
        })),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    ok: false,
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    message: Some("Link store unavailable".to_string()),
                }),
            ))
        }
    }
}
