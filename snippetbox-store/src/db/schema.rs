//! Schema bootstrap for the snippets table
//!
//! The repository assumes the table already exists. This is for fresh
//! databases and integration tests; it is idempotent.

use sqlx::PgPool;

use crate::error::Result;

/// Create the snippets table and its expiry index if missing
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    tracing::info!("Ensuring snippets schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS snippets (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            created TIMESTAMPTZ NOT NULL,
            expires TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_snippets_expires ON snippets(expires)")
        .execute(pool)
        .await?;

    tracing::info!("Snippets schema ready");
    Ok(())
}
