//! Snippet body validation

use super::ValidationError;

/// Validated snippet body.
///
/// Stored verbatim: leading and trailing whitespace is kept since snippets
/// are often poems or code where layout matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetContent(String);

impl SnippetContent {
    /// Create new snippet content. Rejects bodies that are empty or
    /// whitespace only.
    pub fn new(s: impl Into<String>) -> Result<Self, ValidationError> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "content" });
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for SnippetContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
