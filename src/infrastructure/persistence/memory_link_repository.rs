//! In-memory link repository for local runs and tests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Link, NewLink};
use crate::domain::error::LinkError;
use crate::domain::repositories::LinkRepository;

/// A process-local link store.
///
/// All state sits behind one lock, and every method completes its
/// read-modify-write while holding it. Data is lost on restart.
pub struct InMemoryLinkRepository {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    links: HashMap<String, Link>,
    next_id: i64,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        debug!("Using in-memory link store");
        Self {
            inner: RwLock::new(Inner {
                links: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, LinkError> {
        Ok(self.inner.read().await.links.get(code).cloned())
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, LinkError> {
        let mut inner = self.inner.write().await;

        if inner.links.contains_key(&new_link.code) {
            return Err(LinkError::CodeTaken(new_link.code));
        }

        let id = inner.next_id;
        inner.next_id += 1;

        let link = Link::new(id, new_link.code, new_link.target, Utc::now());
        inner.links.insert(link.code.clone(), link.clone());

        Ok(link)
    }

    async fn reuse(&self, code: &str, target: &str) -> Result<Option<Link>, LinkError> {
        let mut inner = self.inner.write().await;

        Ok(inner
            .links
            .get_mut(code)
            .filter(|link| link.deleted)
            .map(|link| {
                link.reincarnate(target.to_string(), Utc::now());
                link.clone()
            }))
    }

    async fn soft_delete(&self, code: &str) -> Result<bool, LinkError> {
        let mut inner = self.inner.write().await;

        match inner.links.get_mut(code) {
            Some(link) if link.is_active() => {
                link.deleted = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn increment_click(&self, code: &str) -> Result<Option<String>, LinkError> {
        let mut inner = self.inner.write().await;

        Ok(inner
            .links
            .get_mut(code)
            .filter(|link| link.is_active())
            .map(|link| {
                link.record_click(Utc::now());
                link.target.clone()
            }))
    }

    async fn list_active(&self) -> Result<Vec<Link>, LinkError> {
        let inner = self.inner.read().await;

        let mut links: Vec<Link> = inner
            .links
            .values()
            .filter(|link| link.is_active())
            .cloned()
            .collect();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(links)
    }

    async fn ping(&self) -> Result<(), LinkError> {
        Ok(())
    }
}
