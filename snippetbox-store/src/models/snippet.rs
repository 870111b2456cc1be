//! Snippet record

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Snippet record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Snippet {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
    pub expires: DateTime<Utc>,
}

impl Snippet {
    /// Whether the snippet is still visible at `now`.
    ///
    /// The boundary is exclusive: a snippet expiring exactly at `now` is gone.
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        self.expires > now
    }

    /// Length of the retention window this snippet was stored with.
    pub fn lifetime(&self) -> Duration {
        self.expires - self.created
    }
}
