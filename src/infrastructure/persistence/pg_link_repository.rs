//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::error::LinkError;
use crate::domain::repositories::LinkRepository;
use crate::utils::db_error::is_unique_violation_on_code;

const LINK_COLUMNS: &str = "id, code, target, deleted, clicks, last_clicked, created_at";

/// PostgreSQL repository for link storage.
///
/// Every write is a single statement, so each method is atomic on its own.
/// Reuse and soft delete are conditional on the current `deleted` flag, and
/// the click increment is computed in SQL rather than read-modify-written here.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    target: String,
    deleted: bool,
    clicks: i64,
    last_clicked: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link {
            id: row.id,
            code: row.code,
            target: row.target,
            deleted: row.deleted,
            clicks: row.clicks,
            last_clicked: row.last_clicked,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, LinkError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE code = $1 LIMIT 1"
        ))
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, LinkError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "INSERT INTO links (code, target) VALUES ($1, $2) RETURNING {LINK_COLUMNS}"
        ))
        .bind(&new_link.code)
        .bind(&new_link.target)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_code(&e) {
                LinkError::CodeTaken(new_link.code.clone())
            } else {
                LinkError::Store(e)
            }
        })?;

        Ok(row.into())
    }

    async fn reuse(&self, code: &str, target: &str) -> Result<Option<Link>, LinkError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            r#"
            UPDATE links
            SET target = $1, deleted = FALSE, clicks = 0, last_clicked = NULL, created_at = NOW()
            WHERE code = $2 AND deleted = TRUE
            RETURNING {LINK_COLUMNS}
            "#
        ))
        .bind(target)
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn soft_delete(&self, code: &str) -> Result<bool, LinkError> {
        let result = sqlx::query("UPDATE links SET deleted = TRUE WHERE code = $1 AND deleted = FALSE")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_click(&self, code: &str) -> Result<Option<String>, LinkError> {
        let target = sqlx::query_scalar::<_, String>(
            r#"
            UPDATE links
            SET clicks = clicks + 1, last_clicked = NOW()
            WHERE code = $1 AND deleted = FALSE
            RETURNING target
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(target)
    }

    async fn list_active(&self) -> Result<Vec<Link>, LinkError> {
        let rows = sqlx::query_as::<_, LinkRow>(&format!(
            r#"
            SELECT {LINK_COLUMNS}
            FROM links
            WHERE deleted = FALSE
            ORDER BY created_at DESC, id DESC
            "#
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn ping(&self) -> Result<(), LinkError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
