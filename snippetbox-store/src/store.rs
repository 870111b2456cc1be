//! Storage seam for snippets
//!
//! `SnippetRepo` implements this against Postgres, `MemoryStore` in process.
//! Both follow the same rules:
//! - ids are assigned by the store and only grow
//! - a snippet is visible while `expires > now`; expired and missing rows
//!   look the same (`DbError::NoRecord`)
//! - `list_latest` returns at most `LATEST_LIMIT` rows, newest id first

use async_trait::async_trait;

use crate::context::CallContext;
use crate::error::Result;
use crate::models::{Retention, Snippet, SnippetContent, SnippetTitle};

/// Maximum number of snippets returned by `list_latest`
pub const LATEST_LIMIT: i64 = 10;

#[async_trait]
pub trait SnippetStore: Send + Sync {
    /// Store a snippet and return its new id.
    async fn insert(
        &self,
        ctx: &CallContext,
        title: &SnippetTitle,
        content: &SnippetContent,
        retention: Retention,
    ) -> Result<i32>;

    /// Fetch a live snippet by id.
    async fn get_by_id(&self, ctx: &CallContext, id: i32) -> Result<Snippet>;

    /// The most recent live snippets. Empty is not an error.
    async fn list_latest(&self, ctx: &CallContext) -> Result<Vec<Snippet>>;
}
