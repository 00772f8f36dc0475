//! DTOs for link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::Link;
use crate::utils::code_generator::is_valid_code;

/// Request to create a link.
///
/// An empty `code` is treated the same as an absent one.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Absolute http(s) URL to redirect to.
    #[validate(url(message = "Invalid target URL"))]
    pub target: String,

    /// Optional desired short code, 6-8 ASCII letters or digits.
    #[validate(custom(function = "validate_code_field"))]
    pub code: Option<String>,
}

impl CreateLinkRequest {
    /// Returns the desired code, ignoring empty strings.
    pub fn desired_code(&self) -> Option<&str> {
        self.code.as_deref().filter(|code| !code.is_empty())
    }
}

fn validate_code_field(code: &str) -> Result<(), ValidationError> {
    if code.is_empty() || is_valid_code(code) {
        Ok(())
    } else {
        Err(ValidationError::new("code_format").with_message("Code must be 6-8 alphanumeric".into()))
    }
}

/// JSON representation of a link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub code: String,
    pub target: String,
    pub deleted: bool,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            code: link.code,
            target: link.target,
            deleted: link.deleted,
            clicks: link.clicks,
            last_clicked: link.last_clicked,
            created_at: link.created_at,
        }
    }
}

/// Acknowledgement returned by the delete endpoint.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
}
