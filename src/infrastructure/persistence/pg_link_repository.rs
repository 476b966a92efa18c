//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::ShortLinkRecord;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for short link lookups.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ShortLinkRow {
    slug: String,
    url: String,
    description: Option<String>,
    views: i64,
    created_at: DateTime<Utc>,
    created_by: Option<i64>,
}

impl From<ShortLinkRow> for ShortLinkRecord {
    fn from(row: ShortLinkRow) -> Self {
        ShortLinkRecord::new(
            row.slug,
            row.url,
            row.description,
            // `views` is constrained to be non-negative.
            u64::try_from(row.views).unwrap_or(0),
            row.created_at,
            row.created_by,
        )
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<ShortLinkRecord>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT slug, url, description, views, created_at, created_by
            FROM short_links
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list_by_owner(
        &self,
        owner_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ShortLinkRecord>, AppError> {
        let rows = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT slug, url, description, views, created_at, created_by
            FROM short_links
            WHERE created_by = $1
            ORDER BY created_at DESC, id DESC
            OFFSET $2
            LIMIT $3
            "#,
        )
        .bind(owner_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_by_owner(&self, owner_id: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links WHERE created_by = $1")
            .bind(owner_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
