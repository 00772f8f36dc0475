//! Repository trait for link persistence.

use crate::domain::entities::{Link, NewLink};
use crate::domain::error::LinkError;
use async_trait::async_trait;

/// Persistence contract for links.
///
/// Every method is individually atomic: a single consistent read-modify-write
/// against one row. Sequences of calls (for example a lookup followed by an
/// insert) are not atomic as a pair.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds the record for a code, active or soft-deleted.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Store`] on storage failures.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, LinkError>;

    /// Inserts a new link with a fresh identity, zero clicks and the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::CodeTaken`] if a record with the same code was
    /// written concurrently, [`LinkError::Store`] on storage failures.
    async fn insert(&self, new_link: NewLink) -> Result<Link, LinkError>;

    /// Reincarnates a soft-deleted link under its existing identity.
    ///
    /// Overwrites `target`, clears `deleted`, zeroes `clicks`, clears
    /// `last_clicked` and refreshes `created_at`. Returns `Ok(None)` when no
    /// soft-deleted record exists for the code (it is active or missing).
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Store`] on storage failures.
    async fn reuse(&self, code: &str, target: &str) -> Result<Option<Link>, LinkError>;

    /// Marks an active link as deleted, leaving every other field untouched.
    ///
    /// Returns `Ok(true)` if an active link was deleted, `Ok(false)` if the
    /// code is missing or already deleted.
    async fn soft_delete(&self, code: &str) -> Result<bool, LinkError>;

    /// Atomically increments `clicks`, sets `last_clicked` to now and returns
    /// the target of the link that was counted.
    ///
    /// Returns `Ok(None)` if no active link has this code.
    async fn increment_click(&self, code: &str) -> Result<Option<String>, LinkError>;

    /// Lists active links, most recently created first.
    async fn list_active(&self) -> Result<Vec<Link>, LinkError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), LinkError>;
}
