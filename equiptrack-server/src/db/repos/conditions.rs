//! Equipment condition repository

use sqlx::{FromRow, PgPool};

use crate::models::{ConditionName, ConditionSortKey, SortDirection};

use super::DbError;

/// Equipment condition record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Condition {
    pub condition_id: i32,
    pub condition_name: String,
}

/// Equipment condition repository
pub struct ConditionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ConditionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a condition, returning the stored row with its assigned id.
    pub async fn insert(&self, name: &ConditionName) -> Result<Condition, DbError> {
        let condition: Condition = sqlx::query_as(
            r#"
            INSERT INTO equipment_conditions (condition_name)
            VALUES ($1)
            RETURNING condition_id, condition_name
            "#,
        )
        .bind(name.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(DbError::from_sqlx)?;

        Ok(condition)
    }

    /// Look up a condition by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Condition>, DbError> {
        let condition: Option<Condition> = sqlx::query_as(
            r#"
            SELECT condition_id, condition_name
            FROM equipment_conditions
            WHERE condition_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(condition)
    }

    /// Check whether a condition with this id exists.
    pub async fn exists_by_id(&self, id: i32) -> Result<bool, DbError> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM equipment_conditions WHERE condition_id = $1)",
        )
        .bind(id)
        .fetch_one(self.pool)
        .await?;

        Ok(exists.0)
    }

    /// Check whether a condition with this name exists.
    pub async fn name_exists(&self, name: &str) -> Result<bool, DbError> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM equipment_conditions WHERE condition_name = $1)",
        )
        .bind(name)
        .fetch_one(self.pool)
        .await?;

        Ok(exists.0)
    }

    /// List all conditions, ordered by the given key and direction.
    pub async fn list(
        &self,
        key: ConditionSortKey,
        direction: SortDirection,
    ) -> Result<Vec<Condition>, DbError> {
        let query = format!(
            "SELECT condition_id, condition_name FROM equipment_conditions ORDER BY {} {}",
            key.column(),
            direction.sql()
        );

        let conditions: Vec<Condition> = sqlx::query_as(&query).fetch_all(self.pool).await?;

        Ok(conditions)
    }

    /// Overwrite the name of an existing condition.
    pub async fn update(
        &self,
        id: i32,
        name: &ConditionName,
    ) -> Result<Option<Condition>, DbError> {
        let condition: Option<Condition> = sqlx::query_as(
            r#"
            UPDATE equipment_conditions
            SET condition_name = $2
            WHERE condition_id = $1
            RETURNING condition_id, condition_name
            "#,
        )
        .bind(id)
        .bind(name.as_str())
        .fetch_optional(self.pool)
        .await
        .map_err(DbError::from_sqlx)?;

        Ok(condition)
    }

    /// Delete a condition by id. Returns false if no row matched.
    pub async fn delete_by_id(&self, id: i32) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM equipment_conditions WHERE condition_id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(DbError::from_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
