//! Handler for unmatched routes.

use serde_json::json;

use crate::error::AppError;

/// Returns a JSON 404 for any route that matched nothing.
pub async fn fallback_handler() -> AppError {
    AppError::not_found("Not found", json!({}))
}
