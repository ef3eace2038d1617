//! Category service

use sqlx::PgPool;

use crate::db::repos::{Category, CategoryRepo};
use crate::models::{CategoryName, CategorySortKey, SortDirection};

use super::ServiceError;

/// Category operations: validation, name uniqueness, persistence.
pub struct CategoryService<'a> {
    categories: CategoryRepo<'a>,
}

impl<'a> CategoryService<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            categories: CategoryRepo::new(pool),
        }
    }

    /// Create a category. The name must be non-blank, at most 100
    /// characters, and unique.
    pub async fn create(
        &self,
        name: &str,
        description: Option<String>,
    ) -> Result<Category, ServiceError> {
        let name = CategoryName::new(name)?;

        if self.categories.name_exists(name.as_str()).await? {
            return Err(ServiceError::Conflict(format!(
                "category name '{}' already exists",
                name.as_str()
            )));
        }

        let created = self
            .categories
            .insert(&name, description.as_deref())
            .await?;
        tracing::info!(category_id = created.category_id, "category created");
        Ok(created)
    }

    /// Get a category by id.
    pub async fn get(&self, id: i32) -> Result<Category, ServiceError> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound {
                resource: "category",
                id: id.to_string(),
            })
    }

    /// List all categories, sorted.
    pub async fn list(
        &self,
        key: CategorySortKey,
        direction: SortDirection,
    ) -> Result<Vec<Category>, ServiceError> {
        Ok(self.categories.list(key, direction).await?)
    }

    /// Update a category in place. The new name is validated exactly
    /// as in create; if it changed, uniqueness is re-checked.
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        description: Option<String>,
    ) -> Result<Category, ServiceError> {
        let name = CategoryName::new(name)?;

        let existing = self.get(id).await?;

        if existing.category_name != name.as_str()
            && self.categories.name_exists(name.as_str()).await?
        {
            return Err(ServiceError::Conflict(format!(
                "category name '{}' already exists",
                name.as_str()
            )));
        }

        let updated = self
            .categories
            .update(id, &name, description.as_deref())
            .await?
            .ok_or_else(|| ServiceError::NotFound {
                resource: "category",
                id: id.to_string(),
            })?;
        tracing::info!(category_id = updated.category_id, "category updated");
        Ok(updated)
    }

    /// Delete a category by id.
    ///
    /// Fails with a conflict if equipment still references it (the
    /// store restricts the delete).
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.categories.delete_by_id(id).await? {
            return Err(ServiceError::NotFound {
                resource: "category",
                id: id.to_string(),
            });
        }
        tracing::info!(category_id = id, "category deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};
    use uuid::Uuid;

    // Integration tests against a real database.
    // Run with: DATABASE_URL=postgres://... cargo test -p equiptrack-server -- --ignored

    async fn setup() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    fn unique_name(prefix: &str) -> String {
        format!("{prefix}-{}", Uuid::new_v4())
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trips() {
        let pool = setup().await;
        let service = CategoryService::new(&pool);

        let name = unique_name("Спорт");
        let created = service
            .create(&name, Some("Инвентарь".into()))
            .await
            .expect("create failed");

        let fetched = service.get(created.category_id).await.expect("get failed");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_name_conflicts_and_keeps_one_row() {
        let pool = setup().await;
        let service = CategoryService::new(&pool);

        let name = unique_name("Туризм");
        service.create(&name, None).await.expect("create failed");

        let err = service.create(&name, None).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM categories WHERE category_name = $1")
                .bind(&name)
                .fetch_one(&pool)
                .await
                .expect("count failed");
        assert_eq!(count.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_overwrites_name_and_description() {
        let pool = setup().await;
        let service = CategoryService::new(&pool);

        let created = service
            .create(&unique_name("Before"), None)
            .await
            .expect("create failed");

        let new_name = unique_name("After");
        let updated = service
            .update(created.category_id, &new_name, Some("changed".into()))
            .await
            .expect("update failed");

        assert_eq!(updated.category_id, created.category_id);
        assert_eq!(updated.category_name, new_name);
        assert_eq!(updated.description.as_deref(), Some("changed"));

        let fetched = service.get(created.category_id).await.expect("get failed");
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_to_unchanged_name_is_not_a_conflict() {
        let pool = setup().await;
        let service = CategoryService::new(&pool);

        let name = unique_name("Same");
        let created = service.create(&name, None).await.expect("create failed");

        // Same name, new description: must not trip the uniqueness check
        let updated = service
            .update(created.category_id, &name, Some("desc".into()))
            .await
            .expect("update failed");
        assert_eq!(updated.category_name, name);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_then_get_is_not_found() {
        let pool = setup().await;
        let service = CategoryService::new(&pool);

        let created = service
            .create(&unique_name("Gone"), None)
            .await
            .expect("create failed");

        service.delete(created.category_id).await.expect("delete failed");

        let err = service.get(created.category_id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_missing_id_is_not_found() {
        let pool = setup().await;
        let service = CategoryService::new(&pool);

        let err = service.delete(i32::MAX).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }
}
