//! Code allocation for new links.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::error::LinkError;
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::{generate_code, is_valid_code};
use crate::utils::url_validator::validate_target;

/// Upper bound on random candidates tried before giving up.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Turns a target URL and an optional desired code into a persisted [`Link`].
///
/// # Allocation Paths
///
/// - **Desired code, unknown** - inserted as-is
/// - **Desired code, soft-deleted** - the deleted record is reincarnated in place
/// - **Desired code, active** - rejected with [`LinkError::CodeTaken`]
/// - **No desired code** - random candidates are tried until one has no record at all
///
/// Generated candidates that match a soft-deleted record are skipped: only an
/// explicit request may reuse a deleted code.
///
/// The existence check and the following write are separate store calls, so
/// two concurrent requests for the same code can both pass the check. The
/// store resolves that race and reports the loser as [`LinkError::CodeTaken`].
pub struct LinkAllocator<R: LinkRepository + ?Sized> {
    repository: Arc<R>,
    code_length: usize,
}

impl<R: LinkRepository + ?Sized> LinkAllocator<R> {
    /// Creates an allocator generating codes of `code_length` characters.
    pub fn new(repository: Arc<R>, code_length: usize) -> Self {
        Self {
            repository,
            code_length,
        }
    }

    /// Allocates a link for `target`.
    ///
    /// # Errors
    ///
    /// - [`LinkError::InvalidTarget`] if `target` is not an absolute http(s) URL
    /// - [`LinkError::InvalidCode`] if `desired_code` is malformed
    /// - [`LinkError::CodeTaken`] if `desired_code` belongs to an active link
    /// - [`LinkError::GenerationExhausted`] if every random candidate collided
    /// - [`LinkError::Store`] on any storage failure, without retry
    pub async fn allocate(&self, target: &str, desired_code: Option<&str>) -> Result<Link, LinkError> {
        validate_target(target).map_err(|e| LinkError::InvalidTarget(e.to_string()))?;

        let code = match desired_code {
            Some(code) => {
                if !is_valid_code(code) {
                    return Err(LinkError::InvalidCode(code.to_string()));
                }

                if let Some(existing) = self.repository.find_by_code(code).await? {
                    if existing.is_active() {
                        return Err(LinkError::CodeTaken(code.to_string()));
                    }

                    return self.reuse(code, target).await;
                }

                code.to_string()
            }
            None => self.generate_unique_code().await?,
        };

        self.repository
            .insert(NewLink {
                code,
                target: target.to_string(),
            })
            .await
    }

    async fn reuse(&self, code: &str, target: &str) -> Result<Link, LinkError> {
        let link = self
            .repository
            .reuse(code, target)
            .await?
            // Reincarnated or re-deleted by someone else between lookup and update.
            .ok_or_else(|| LinkError::CodeTaken(code.to_string()))?;

        tracing::debug!(code, id = link.id, "Reused deleted code");
        Ok(link)
    }

    async fn generate_unique_code(&self) -> Result<String, LinkError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let code = generate_code(self.code_length);

            if self.repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }

            tracing::debug!(code = %code, attempt, "Generated code collided");
        }

        tracing::warn!(
            attempts = MAX_GENERATION_ATTEMPTS,
            "Exhausted code generation attempts"
        );
        Err(LinkError::GenerationExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }
}
