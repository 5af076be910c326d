//! PostgreSQL implementation of the URL record repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRecordRepository;
use crate::error::AppError;

/// PostgreSQL repository for URL records.
///
/// Uniqueness of `url` is enforced by the `url_records_url_md5_key` index, so a
/// racing insert surfaces as [`AppError::Conflict`]. Redirect statistics are
/// updated with a single `UPDATE ... RETURNING` statement.
pub struct PgUrlRecordRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRecordRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Number of stored records.
    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_records")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    /// Sum of all redirect counters.
    pub async fn total_redirects(&self) -> Result<i64, AppError> {
        let total: i64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(count), 0)::BIGINT FROM url_records")
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(total)
    }
}

#[derive(sqlx::FromRow)]
struct UrlRecordRow {
    id: i64,
    url: String,
    count: i64,
    last_access: DateTime<Utc>,
}

impl From<UrlRecordRow> for UrlRecord {
    fn from(r: UrlRecordRow) -> Self {
        UrlRecord::new(r.id, r.url, r.count, r.last_access)
    }
}

#[async_trait]
impl UrlRecordRepository for PgUrlRecordRepository {
    async fn create(&self, url: &str) -> Result<UrlRecord, AppError> {
        let row = sqlx::query_as::<_, UrlRecordRow>(
            r#"
            INSERT INTO url_records (url)
            VALUES ($1)
            RETURNING id, url, count, last_access
            "#,
        )
        .bind(url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRecordRow>(
            r#"
            SELECT id, url, count, last_access
            FROM url_records
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRecordRow>(
            r#"
            SELECT id, url, count, last_access
            FROM url_records
            WHERE md5(url) = md5($1) AND url = $1
            "#,
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let rows = sqlx::query_as::<_, UrlRecordRow>(
            r#"
            SELECT id, url, count, last_access
            FROM url_records
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn increment_and_touch(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRecordRow>(
            r#"
            UPDATE url_records
            SET count = count + 1,
                last_access = GREATEST(last_access, clock_timestamp())
            WHERE id = $1
            RETURNING id, url, count, last_access
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
