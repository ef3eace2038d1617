//! Equipment condition service

use sqlx::PgPool;

use crate::db::repos::{Condition, ConditionRepo};
use crate::models::{ConditionName, ConditionSortKey, SortDirection};

use super::ServiceError;

/// Equipment condition operations; same contract shape as categories,
/// over the condition name.
pub struct ConditionService<'a> {
    conditions: ConditionRepo<'a>,
}

impl<'a> ConditionService<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            conditions: ConditionRepo::new(pool),
        }
    }

    /// Create a condition. The name must be non-blank, at most 100
    /// characters, and unique.
    pub async fn create(&self, name: &str) -> Result<Condition, ServiceError> {
        let name = ConditionName::new(name)?;

        if self.conditions.name_exists(name.as_str()).await? {
            return Err(ServiceError::Conflict(format!(
                "condition name '{}' already exists",
                name.as_str()
            )));
        }

        let created = self.conditions.insert(&name).await?;
        tracing::info!(condition_id = created.condition_id, "condition created");
        Ok(created)
    }

    /// Get a condition by id.
    pub async fn get(&self, id: i32) -> Result<Condition, ServiceError> {
        self.conditions
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound {
                resource: "condition",
                id: id.to_string(),
            })
    }

    /// List all conditions, sorted.
    pub async fn list(
        &self,
        key: ConditionSortKey,
        direction: SortDirection,
    ) -> Result<Vec<Condition>, ServiceError> {
        Ok(self.conditions.list(key, direction).await?)
    }

    /// Update a condition name in place, re-checking uniqueness when
    /// the name changed.
    pub async fn update(&self, id: i32, name: &str) -> Result<Condition, ServiceError> {
        let name = ConditionName::new(name)?;

        let existing = self.get(id).await?;

        if existing.condition_name != name.as_str()
            && self.conditions.name_exists(name.as_str()).await?
        {
            return Err(ServiceError::Conflict(format!(
                "condition name '{}' already exists",
                name.as_str()
            )));
        }

        let updated = self
            .conditions
            .update(id, &name)
            .await?
            .ok_or_else(|| ServiceError::NotFound {
                resource: "condition",
                id: id.to_string(),
            })?;
        tracing::info!(condition_id = updated.condition_id, "condition updated");
        Ok(updated)
    }

    /// Delete a condition by id. Restricted while equipment still
    /// references it.
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.conditions.delete_by_id(id).await? {
            return Err(ServiceError::NotFound {
                resource: "condition",
                id: id.to_string(),
            });
        }
        tracing::info!(condition_id = id, "condition deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};
    use uuid::Uuid;

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
        let service = ConditionService::new(&pool);

        let name = unique_name("new");
        let created = service.create(&name).await.expect("create failed");

        let fetched = service.get(created.condition_id).await.expect("get failed");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_name_conflicts() {
        let pool = setup().await;
        let service = ConditionService::new(&pool);

        let name = unique_name("worn");
        service.create(&name).await.expect("create failed");

        let err = service.create(&name).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_then_get_is_not_found() {
        let pool = setup().await;
        let service = ConditionService::new(&pool);

        let created = service
            .create(&unique_name("retired"))
            .await
            .expect("create failed");

        service
            .delete(created.condition_id)
            .await
            .expect("delete failed");

        let err = service.get(created.condition_id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }
}
