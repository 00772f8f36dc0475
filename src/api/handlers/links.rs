//! Handlers for link management endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, DeleteResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "target": "https://example.com", "code": "abc123" }
/// ```
///
/// `code` is optional; a random 6-character code is generated when omitted.
/// Supplying the code of a deleted link reuses it with fresh counters.
///
/// # Errors
///
/// - 400 if the body, target or code is invalid
/// - 409 if the code belongs to an active link
/// - 500 if no unique code could be generated or the store failed
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state
        .link_service
        .create(&payload.target, payload.desired_code())
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Lists active links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Returns a single active link with its click counters.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 if the code is malformed, unknown or deleted.
pub async fn link_stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_stats(&code).await?;

    Ok(Json(link.into()))
}

/// Soft-deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// The record is kept with `deleted = true`; its code becomes available for
/// explicit reuse through the create endpoint.
///
/// # Errors
///
/// - 400 if the code is malformed
/// - 404 if the link doesn't exist or is already deleted
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.link_service.delete(&code).await?;

    Ok(Json(DeleteResponse { ok: true }))
}
