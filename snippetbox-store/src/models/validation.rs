//! Input rejected before it reaches the database

use thiserror::Error;

/// Why a title, body or retention value was refused.
///
/// `field` names the input as a user would know it ("title", "retention"),
/// so messages can be shown without further mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field}: {reason}")]
    OutOfRange {
        field: &'static str,
        reason: &'static str,
    },

    #[error("invalid {field} value: '{value}'")]
    InvalidVariant { field: &'static str, value: String },
}
