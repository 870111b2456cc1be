//! Domain models with validation at construction
//!
//! Titles, bodies and retention classes are checked when these types are
//! built. Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod title;
pub mod content;
pub mod retention;
pub mod snippet;

pub use validation::ValidationError;
pub use title::SnippetTitle;
pub use content::SnippetContent;
pub use retention::Retention;
pub use snippet::Snippet;
