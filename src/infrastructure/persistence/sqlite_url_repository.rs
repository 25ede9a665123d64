//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, map_sqlx_error};

/// SQLite repository for identifier-to-URL mappings.
///
/// Uses SQLx prepared statements throughout. Identifier allocation is
/// delegated to the `INTEGER PRIMARY KEY AUTOINCREMENT` column, and
/// get-or-create races are resolved by the `UNIQUE` constraint on
/// `long_url` rather than any application-level locking.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlRecord>, AppError> {
        sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, long_url, created_at
            FROM urls
            WHERE long_url = ?1
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn get_or_create(&self, long_url: &str) -> Result<UrlRecord, AppError> {
        // Fast path: a conflicting insert still consumes an AUTOINCREMENT
        // sequence value, so look the URL up before attempting to insert.
        if let Some(existing) = self.find_by_long_url(long_url).await? {
            return Ok(existing);
        }

        // ON CONFLICT DO NOTHING returns no row when another writer got
        // there first; the follow-up SELECT reads the winning row.
        let inserted = sqlx::query_as::<_, UrlRecord>(
            r#"
            INSERT INTO urls (long_url)
            VALUES (?1)
            ON CONFLICT(long_url) DO NOTHING
            RETURNING id, long_url, created_at
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        if let Some(record) = inserted {
            return Ok(record);
        }

        sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, long_url, created_at
            FROM urls
            WHERE long_url = ?1
            "#,
        )
        .bind(long_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, long_url, created_at
            FROM urls
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)
    }

    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)
    }
}
