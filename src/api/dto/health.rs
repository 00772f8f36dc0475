//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
