//! snippetbox-store: storage for expiring text snippets
//!
//! Three operations over a single `snippets` table: insert, fetch by id and
//! list the latest. Snippets expire logically; expired rows stay in the table
//! but are never returned.
//!
//! ```ignore
//! let pool = create_pool(&StoreConfig::load()?).await?;
//! let repo = SnippetRepo::new(pool);
//! let ctx = CallContext::with_timeout(Duration::from_secs(2));
//!
//! let id = repo.insert(&ctx, &title, &content, Retention::SevenDays).await?;
//! match repo.get_by_id(&ctx, id).await {
//!     Err(DbError::NoRecord) => { /* 404 */ }
//!     other => { /* ... */ }
//! }
//! ```

pub mod config;
pub mod context;
pub mod db;
pub mod error;
pub mod memory;
pub mod models;
pub mod store;

pub use config::{ConfigError, StoreConfig};
pub use context::CallContext;
pub use db::{create_pool, ensure_schema, SnippetRepo};
pub use error::{DbError, Result};
pub use memory::MemoryStore;
pub use models::{Retention, Snippet, SnippetContent, SnippetTitle, ValidationError};
pub use store::{SnippetStore, LATEST_LIMIT};

// Callers build pools without naming sqlx themselves
pub use sqlx::PgPool;
