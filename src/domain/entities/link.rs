//! Link entity representing a short code mapped to a target URL.

use chrono::{DateTime, Utc};

/// A shortened link with its click counters.
///
/// A link is never physically removed. Deletion sets `deleted`, and a deleted
/// code can later be reincarnated under the same `id` with fresh counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub target: String,
    pub deleted: bool,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a freshly inserted, active link with zeroed counters.
    pub fn new(id: i64, code: String, target: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            target,
            deleted: false,
            clicks: 0,
            last_clicked: None,
            created_at,
        }
    }

    /// Returns true if the link has not been soft-deleted.
    pub fn is_active(&self) -> bool {
        !self.deleted
    }

    /// Turns a soft-deleted record into a brand-new link under the same identity.
    pub fn reincarnate(&mut self, target: String, now: DateTime<Utc>) {
        self.target = target;
        self.deleted = false;
        self.clicks = 0;
        self.last_clicked = None;
        self.created_at = now;
    }

    /// Records one redirect.
    pub fn record_click(&mut self, now: DateTime<Utc>) {
        self.clicks += 1;
        self.last_clicked = Some(now);
    }
}

/// Input data for inserting a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub target: String,
}
