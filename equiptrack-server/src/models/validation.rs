//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Required field is absent
    Missing { field: &'static str },

    /// Numeric field is below zero
    Negative { field: &'static str },

    /// Invalid enum variant
    InvalidVariant { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Negative { field } => {
                write!(f, "{} must be greater than or equal to 0", field)
            }
            Self::InvalidVariant { field, value } => {
                write!(f, "invalid {} value: '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Shared check for required text fields: non-blank after trimming,
/// at most `max` characters.
pub(crate) fn require_text(
    value: &str,
    field: &'static str,
    max: usize,
) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "category name",
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "category name exceeds maximum length of 100 characters"
        );
    }

    #[test]
    fn negative_display() {
        let err = ValidationError::Negative { field: "quantity" };
        assert_eq!(err.to_string(), "quantity must be greater than or equal to 0");
    }

    #[test]
    fn require_text_rejects_whitespace_only() {
        let err = require_text("   ", "category name", 100).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn require_text_counts_characters_not_bytes() {
        // 100 Cyrillic characters are 200 bytes but within the limit
        let name = "я".repeat(100);
        assert!(require_text(&name, "category name", 100).is_ok());
    }
}
