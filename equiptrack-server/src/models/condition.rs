//! Equipment condition name validation

use super::validation::require_text;
use super::ValidationError;

/// Maximum length for condition names
const MAX_CONDITION_NAME_LEN: usize = 100;

/// Validated equipment condition name (e.g. "new", "needs repair")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConditionName(String);

impl ConditionName {
    /// Create a new condition name: not blank, max 100 characters.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        require_text(s, "condition name", MAX_CONDITION_NAME_LEN).map(Self)
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

impl AsRef<str> for ConditionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        assert!(ConditionName::new("new").is_ok());
        assert!(ConditionName::new("needs repair").is_ok());
    }

    #[test]
    fn rejects_blank() {
        let err = ConditionName::new(" ").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn max_length() {
        assert!(ConditionName::new(&"x".repeat(100)).is_ok());
        let err = ConditionName::new(&"x".repeat(101)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 100, .. }));
    }
}
