//! Service layer: validation, uniqueness rules, reference resolution
//!
//! Services are the only layer with decision logic. Each one is
//! constructed with explicit references to the repositories it needs;
//! handlers build them per request from the shared pool.

pub mod category;
pub mod condition;
pub mod equipment;

pub use category::CategoryService;
pub use condition::ConditionService;
pub use equipment::EquipmentService;

use crate::db::DbError;
use crate::models::ValidationError;

/// Service error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("{0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(DbError),
}

impl From<DbError> for ServiceError {
    fn from(e: DbError) -> Self {
        // Constraint violations mean a concurrent writer won the race
        // the pre-check missed, or a restricted delete; both are
        // conflicts, not internal errors.
        match e {
            DbError::UniqueViolation { constraint } => {
                Self::Conflict(format!("value already exists ({constraint})"))
            }
            DbError::ForeignKeyViolation { constraint } => {
                Self::Conflict(format!("operation violates a reference ({constraint})"))
            }
            e => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_becomes_conflict() {
        let err = ServiceError::from(DbError::UniqueViolation {
            constraint: "categories_category_name_key".into(),
        });
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[test]
    fn foreign_key_violation_becomes_conflict() {
        let err = ServiceError::from(DbError::ForeignKeyViolation {
            constraint: "sports_equipment_category_id_fkey".into(),
        });
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[test]
    fn other_db_errors_pass_through() {
        let err = ServiceError::from(DbError::Sqlx(sqlx::Error::PoolClosed));
        assert!(matches!(err, ServiceError::Database(_)));
    }
}
