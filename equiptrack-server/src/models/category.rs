//! Category name validation

use super::validation::require_text;
use super::ValidationError;

/// Maximum length for category names
const MAX_CATEGORY_NAME_LEN: usize = 100;

/// Validated category name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a new category name.
    ///
    /// # Rules
    /// - Not blank (whitespace-only counts as blank)
    /// - Max 100 characters
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        require_text(s, "category name", MAX_CATEGORY_NAME_LEN).map(Self)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        assert!(CategoryName::new("Ball sports").is_ok());
        assert!(CategoryName::new("Спорт").is_ok());
    }

    #[test]
    fn rejects_empty() {
        let err = CategoryName::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn rejects_blank() {
        let err = CategoryName::new("  \t ").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn max_length() {
        // 100 chars should work
        let name_100 = "a".repeat(100);
        assert!(CategoryName::new(&name_100).is_ok());

        // 101 chars should fail
        let name_101 = "a".repeat(101);
        let err = CategoryName::new(&name_101).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 100, .. }));
    }
}
