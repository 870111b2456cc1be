//! Snippet titles
//!
//! Titles were historically a `VARCHAR(100)` column, so the limit is counted
//! the way Postgres counts it: in characters, not bytes.

use super::ValidationError;

pub const MAX_TITLE_CHARS: usize = 100;

/// A trimmed, non-empty title of at most `MAX_TITLE_CHARS` characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetTitle(String);

impl SnippetTitle {
    /// Surrounding whitespace is dropped before the checks run, so the
    /// stored title is exactly what gets measured.
    ///
    /// ```
    /// use snippetbox_store::models::SnippetTitle;
    ///
    /// let title = SnippetTitle::new("  Over the wintry forest  ").unwrap();
    /// assert_eq!(title.as_str(), "Over the wintry forest");
    /// ```
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let title = raw.trim();
        if title.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }
        if title.chars().count() > MAX_TITLE_CHARS {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_CHARS,
            });
        }
        Ok(Self(title.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for SnippetTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
