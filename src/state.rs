//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// State shared by all request handlers.
///
/// The link store is chosen once by the composition root and reaches the
/// service as a trait object, so handlers are independent of the backend.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
}

impl AppState {
    /// Builds the state around a link store, generating codes of `code_length` characters.
    pub fn new(repository: Arc<dyn LinkRepository>, code_length: usize) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository, code_length)),
        }
    }
}
