//! In-process snippet store
//!
//! Same visibility rules as the Postgres repository, kept in a BTreeMap so
//! id order is free. The clock is injectable so expiry can be tested by
//! moving time instead of waiting.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::context::CallContext;
use crate::error::{DbError, Result};
use crate::models::{Retention, Snippet, SnippetContent, SnippetTitle};
use crate::store::{SnippetStore, LATEST_LIMIT};

/// Source of "now" for the memory store
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

#[derive(Default)]
struct Rows {
    last_id: i32,
    by_id: BTreeMap<i32, Snippet>,
}

pub struct MemoryStore {
    rows: Mutex<Rows>,
    clock: Clock,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(Utc::now))
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            rows: Mutex::new(Rows::default()),
            clock,
        }
    }

    /// Insert a row with explicit timestamps, bypassing retention.
    ///
    /// Used to seed already-expired snippets. Fails once ids reach
    /// `i32::MAX`, like a Postgres SERIAL column.
    pub fn insert_fixture(
        &self,
        title: &str,
        content: &str,
        created: DateTime<Utc>,
        expires: DateTime<Utc>,
    ) -> Result<i32> {
        let mut rows = self.rows();
        let id = rows.last_id.checked_add(1).ok_or(DbError::IdsExhausted)?;
        rows.last_id = id;
        rows.by_id.insert(
            id,
            Snippet {
                id,
                title: title.to_owned(),
                content: content.to_owned(),
                created,
                expires,
            },
        );
        Ok(id)
    }

    /// Total rows held, expired ones included.
    pub fn len(&self) -> usize {
        self.rows().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every row and restart ids at 1.
    pub fn clear(&self) {
        *self.rows() = Rows::default();
    }

    fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    fn rows(&self) -> MutexGuard<'_, Rows> {
        // A panic while holding the lock can't leave Rows half-written
        self.rows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnippetStore for MemoryStore {
    async fn insert(
        &self,
        ctx: &CallContext,
        title: &SnippetTitle,
        content: &SnippetContent,
        retention: Retention,
    ) -> Result<i32> {
        ctx.run(async {
            let created = self.now();
            let expires = retention.expires_at(created)?;
            self.insert_fixture(title.as_str(), content.as_str(), created, expires)
        })
        .await
    }

    async fn get_by_id(&self, ctx: &CallContext, id: i32) -> Result<Snippet> {
        ctx.run(async {
            let now = self.now();
            self.rows()
                .by_id
                .get(&id)
                .filter(|s| s.is_live_at(now))
                .cloned()
                .ok_or(DbError::NoRecord)
        })
        .await
    }

    async fn list_latest(&self, ctx: &CallContext) -> Result<Vec<Snippet>> {
        ctx.run(async {
            let now = self.now();
            let snippets: Vec<Snippet> = self
                .rows()
                .by_id
                .values()
                .rev()
                .filter(|s| s.is_live_at(now))
                .take(LATEST_LIMIT as usize)
                .cloned()
                .collect();
            Ok::<_, DbError>(snippets)
        })
        .await
    }
}
