//! Failures of link allocation and lifecycle operations.

use thiserror::Error;

/// Errors produced by the allocator, the link service and store implementations.
///
/// Format errors are raised before any store access. `CodeTaken` and
/// `NotFound` are expected outcomes; `GenerationExhausted` and `Store` are
/// server-side failures.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("Invalid target URL: {0}")]
    InvalidTarget(String),

    #[error("Code must be 6-8 alphanumeric characters, got '{0}'")]
    InvalidCode(String),

    #[error("Code '{0}' is already in use")]
    CodeTaken(String),

    #[error("Link '{0}' not found")]
    NotFound(String),

    #[error("Failed to generate a unique code after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),
}

impl LinkError {
    /// Returns true for failures caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidTarget(_) | Self::InvalidCode(_) | Self::CodeTaken(_) | Self::NotFound(_)
        )
    }
}
