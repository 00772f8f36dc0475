//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The click is counted with a single atomic store update before the
/// `302 Found` response is returned.
///
/// # Errors
///
/// Returns 404 Not Found if the code is malformed, unknown or deleted.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.link_service.redirect(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, target)]))
}
