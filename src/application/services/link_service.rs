//! Link lifecycle service: create, list, stats, delete and redirect.

use std::sync::Arc;

use crate::application::services::link_allocator::LinkAllocator;
use crate::domain::entities::Link;
use crate::domain::error::LinkError;
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::is_valid_code;

/// Service exposing the link operations used by HTTP handlers and the admin CLI.
///
/// Holds no state besides the injected repository; every read goes to the store.
pub struct LinkService<R: LinkRepository + ?Sized> {
    repository: Arc<R>,
    allocator: LinkAllocator<R>,
}

impl<R: LinkRepository + ?Sized> LinkService<R> {
    /// Creates a new link service generating codes of `code_length` characters.
    pub fn new(repository: Arc<R>, code_length: usize) -> Self {
        Self {
            allocator: LinkAllocator::new(repository.clone(), code_length),
            repository,
        }
    }

    /// Creates a link, using `desired_code` when given or a generated code otherwise.
    ///
    /// # Errors
    ///
    /// See [`LinkAllocator::allocate`].
    pub async fn create(&self, target: &str, desired_code: Option<&str>) -> Result<Link, LinkError> {
        let link = self.allocator.allocate(target, desired_code).await?;
        tracing::info!(code = %link.code, id = link.id, "Link created");
        Ok(link)
    }

    /// Lists active links, newest first.
    pub async fn list(&self) -> Result<Vec<Link>, LinkError> {
        self.repository.list_active().await
    }

    /// Returns the active link for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if the code is malformed, missing or deleted.
    pub async fn get_stats(&self, code: &str) -> Result<Link, LinkError> {
        self.find_active(code).await
    }

    /// Soft-deletes the active link for `code`.
    ///
    /// Deleting twice is not idempotent: the second call reports not-found.
    ///
    /// # Errors
    ///
    /// - [`LinkError::InvalidCode`] if the code is malformed
    /// - [`LinkError::NotFound`] if the code is missing or already deleted
    pub async fn delete(&self, code: &str) -> Result<(), LinkError> {
        if !is_valid_code(code) {
            return Err(LinkError::InvalidCode(code.to_string()));
        }

        self.find_active(code).await?;

        if !self.repository.soft_delete(code).await? {
            return Err(LinkError::NotFound(code.to_string()));
        }

        tracing::info!(code, "Link deleted");
        Ok(())
    }

    /// Counts a click on `code` and returns its target.
    ///
    /// The click and the target come from one store update, so a concurrent
    /// delete and reuse of the code cannot split them across two records.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if the code is malformed, missing or
    /// deleted; no counter is touched in that case.
    pub async fn redirect(&self, code: &str) -> Result<String, LinkError> {
        if !is_valid_code(code) {
            return Err(LinkError::NotFound(code.to_string()));
        }

        self.repository
            .increment_click(code)
            .await?
            .ok_or_else(|| LinkError::NotFound(code.to_string()))
    }

    /// Checks that the underlying store is reachable.
    pub async fn health(&self) -> Result<(), LinkError> {
        self.repository.ping().await
    }

    async fn find_active(&self, code: &str) -> Result<Link, LinkError> {
        if !is_valid_code(code) {
            return Err(LinkError::NotFound(code.to_string()));
        }

        self.repository
            .find_by_code(code)
            .await?
            .filter(Link::is_active)
            .ok_or_else(|| LinkError::NotFound(code.to_string()))
    }
}
