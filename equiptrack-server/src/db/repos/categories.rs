//! Category repository

use sqlx::{FromRow, PgPool};

use crate::models::{CategoryName, CategorySortKey, SortDirection};

use super::DbError;

/// Category record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub category_id: i32,
    pub category_name: String,
    pub description: Option<String>,
}

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a category, returning the stored row with its assigned id.
    pub async fn insert(
        &self,
        name: &CategoryName,
        description: Option<&str>,
    ) -> Result<Category, DbError> {
        let category: Category = sqlx::query_as(
            r#"
            INSERT INTO categories (category_name, description)
            VALUES ($1, $2)
            RETURNING category_id, category_name, description
            "#,
        )
        .bind(name.as_str())
        .bind(description)
        .fetch_one(self.pool)
        .await
        .map_err(DbError::from_sqlx)?;

        Ok(category)
    }

    /// Look up a category by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Category>, DbError> {
        let category: Option<Category> = sqlx::query_as(
            r#"
            SELECT category_id, category_name, description
            FROM categories
            WHERE category_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(category)
    }

    /// Check whether a category with this id exists.
    pub async fn exists_by_id(&self, id: i32) -> Result<bool, DbError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM categories WHERE category_id = $1)")
                .bind(id)
                .fetch_one(self.pool)
                .await?;

        Ok(exists.0)
    }

    /// Check whether a category with this name exists.
    pub async fn name_exists(&self, name: &str) -> Result<bool, DbError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM categories WHERE category_name = $1)")
                .bind(name)
                .fetch_one(self.pool)
                .await?;

        Ok(exists.0)
    }

    /// List all categories, ordered by the given key and direction.
    pub async fn list(
        &self,
        key: CategorySortKey,
        direction: SortDirection,
    ) -> Result<Vec<Category>, DbError> {
        // Sort key and direction come from whitelisted enums
        let query = format!(
            "SELECT category_id, category_name, description FROM categories ORDER BY {} {}",
            key.column(),
            direction.sql()
        );

        let categories: Vec<Category> = sqlx::query_as(&query).fetch_all(self.pool).await?;

        Ok(categories)
    }

    /// Overwrite name and description of an existing category.
    pub async fn update(
        &self,
        id: i32,
        name: &CategoryName,
        description: Option<&str>,
    ) -> Result<Option<Category>, DbError> {
        let category: Option<Category> = sqlx::query_as(
            r#"
            UPDATE categories
            SET category_name = $2, description = $3
            WHERE category_id = $1
            RETURNING category_id, category_name, description
            "#,
        )
        .bind(id)
        .bind(name.as_str())
        .bind(description)
        .fetch_optional(self.pool)
        .await
        .map_err(DbError::from_sqlx)?;

        Ok(category)
    }

    /// Delete a category by id. Returns false if no row matched.
    pub async fn delete_by_id(&self, id: i32) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(DbError::from_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    // CRUD behavior is covered by the service-level integration tests
    // in crate::service::category; see also models::category for the
    // validation unit tests.
}
