//! Repository implementations for database access
//!
//! One repository per entity, each borrowing the shared pool.
//! List queries take whitelisted sort enums; equipment queries JOIN
//! categories and conditions so callers get embedded references in a
//! single round-trip.

pub mod categories;
pub mod conditions;
pub mod equipment;

pub use categories::{Category, CategoryRepo};
pub use conditions::{Condition, ConditionRepo};
pub use equipment::{EquipmentRecord, EquipmentRepo};

/// PostgreSQL error code for unique constraint violations
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL error code for foreign key constraint violations
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    #[error("foreign key constraint violated: {constraint}")]
    ForeignKeyViolation { constraint: String },
}

impl DbError {
    /// Classify an sqlx error, recognizing constraint violations.
    ///
    /// Uniqueness pre-checks in the service layer race with concurrent
    /// writers; the loser's constraint violation must come back as a
    /// conflict rather than a generic database error.
    pub fn from_sqlx(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            let constraint = db_err
                .constraint()
                .unwrap_or("unknown")
                .to_owned();
            match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => return Self::UniqueViolation { constraint },
                Some(FOREIGN_KEY_VIOLATION) => return Self::ForeignKeyViolation { constraint },
                _ => {}
            }
        }
        Self::Sqlx(err)
    }
}
