//! Snippet repository
//!
//! Three statements over the `snippets` table:
//! - insert: server sets `created`, `expires = created + retention`
//! - get_by_id: single live row or `NoRecord`
//! - list_latest: up to `LATEST_LIMIT` live rows, newest id first

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};
use tracing::{debug, instrument, warn};

use crate::context::CallContext;
use crate::error::{DbError, Result};
use crate::models::{Retention, Snippet, SnippetContent, SnippetTitle};
use crate::store::{SnippetStore, LATEST_LIMIT};

const INSERT_SNIPPET: &str = r#"
    INSERT INTO snippets (title, content, created, expires)
    VALUES ($1, $2, current_timestamp, current_timestamp + $3)
    RETURNING id
"#;

// The casts let the same reads work whether the table was declared with
// TIMESTAMP or TIMESTAMPTZ; sqlx sessions run in UTC.
const SELECT_LIVE_BY_ID: &str = r#"
    SELECT id, title, content,
           created::timestamptz AS created,
           expires::timestamptz AS expires
    FROM snippets
    WHERE expires > current_timestamp AND id = $1
"#;

const SELECT_LATEST_LIVE: &str = r#"
    SELECT id, title, content,
           created::timestamptz AS created,
           expires::timestamptz AS expires
    FROM snippets
    WHERE expires > current_timestamp
    ORDER BY id DESC
    LIMIT $1
"#;

/// Snippet repository
#[derive(Debug, Clone)]
pub struct SnippetRepo {
    pool: PgPool,
}

impl SnippetRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check out a connection for the length of one call.
    ///
    /// The connection returns to the pool when dropped, on every exit path.
    async fn acquire(&self) -> Result<PoolConnection<Postgres>> {
        self.pool.acquire().await.map_err(|e| {
            warn!(error = %e, "Unable to acquire a database connection");
            DbError::Acquire(e)
        })
    }
}

#[async_trait]
impl SnippetStore for SnippetRepo {
    #[instrument(skip_all, fields(retention = %retention))]
    async fn insert(
        &self,
        ctx: &CallContext,
        title: &SnippetTitle,
        content: &SnippetContent,
        retention: Retention,
    ) -> Result<i32> {
        ctx.run(async {
            let mut conn = self.acquire().await?;

            let id: i32 = sqlx::query_scalar(INSERT_SNIPPET)
                .bind(title.as_str())
                .bind(content.as_str())
                .bind(retention.interval())
                .fetch_one(&mut *conn)
                .await?;

            debug!(id, "Inserted snippet");
            Ok::<_, DbError>(id)
        })
        .await
    }

    #[instrument(skip(self, ctx))]
    async fn get_by_id(&self, ctx: &CallContext, id: i32) -> Result<Snippet> {
        ctx.run(async {
            let mut conn = self.acquire().await?;

            let snippet: Option<Snippet> = sqlx::query_as(SELECT_LIVE_BY_ID)
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;

            snippet.ok_or(DbError::NoRecord)
        })
        .await
    }

    #[instrument(skip_all)]
    async fn list_latest(&self, ctx: &CallContext) -> Result<Vec<Snippet>> {
        ctx.run(async {
            let mut conn = self.acquire().await?;

            let snippets: Vec<Snippet> = sqlx::query_as(SELECT_LATEST_LIVE)
                .bind(LATEST_LIMIT)
                .fetch_all(&mut *conn)
                .await?;

            debug!(count = snippets.len(), "Listed latest snippets");
            Ok::<_, DbError>(snippets)
        })
        .await
    }
}
