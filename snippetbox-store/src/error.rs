//! Error types for snippetbox-store

use thiserror::Error;

use crate::models::ValidationError;

pub type Result<T> = std::result::Result<T, DbError>;

/// Database error type
///
/// `NoRecord` is kept apart from every transport or database failure so
/// callers can tell "nothing there" from "something broke".
#[derive(Debug, Error)]
pub enum DbError {
    /// The pool could not hand out a connection
    #[error("unable to acquire a database connection: {0}")]
    Acquire(#[source] sqlx::Error),

    /// Statement execution or row decoding failed
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// No matching row, or the row has expired
    #[error("no matching record found")]
    NoRecord,

    /// No ids left to assign
    #[error("snippet id sequence exhausted")]
    IdsExhausted,

    /// The caller's deadline passed before the call finished
    #[error("deadline elapsed before the database call completed")]
    Timeout,

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
}

impl DbError {
    pub fn is_no_record(&self) -> bool {
        matches!(self, Self::NoRecord)
    }

    /// True for failures of the store itself rather than of the request:
    /// no connection, or no answer in time.
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::Acquire(_) | Self::Timeout)
    }
}
