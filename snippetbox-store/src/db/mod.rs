//! Database layer - connection pool, schema bootstrap and repositories
//!
//! - One pooled connection per call, released when the call returns
//! - Expiry enforced in every read (`expires > current_timestamp`)
//! - Parameterized statements only

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::SnippetRepo;
pub use schema::ensure_schema;
