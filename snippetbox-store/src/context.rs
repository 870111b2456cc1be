//! Per-call options
//!
//! Every store operation takes a `CallContext`. It carries an optional
//! deadline; when it passes, the call fails with `DbError::Timeout` and the
//! connection goes back to the pool. Dropping the operation's future cancels
//! it the same way.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::error::{DbError, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct CallContext {
    deadline: Option<Instant>,
}

impl CallContext {
    /// No deadline.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Drive `fut` to completion, bounded by the deadline if there is one.
    pub async fn run<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match self.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, fut)
                .await
                .map_err(|_| DbError::Timeout)?,
            None => fut.await,
        }
    }
}
