//! Sports equipment service
//!
//! The only service that spans repositories: equipment references a
//! category and a condition, and both must resolve before a save.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::repos::{CategoryRepo, ConditionRepo, EquipmentRecord, EquipmentRepo};
use crate::models::{EquipmentSortKey, NewEquipment, SortDirection};

use super::ServiceError;

/// Sports equipment operations.
pub struct EquipmentService<'a> {
    equipment: EquipmentRepo<'a>,
    categories: CategoryRepo<'a>,
    conditions: ConditionRepo<'a>,
}

impl<'a> EquipmentService<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            equipment: EquipmentRepo::new(pool),
            categories: CategoryRepo::new(pool),
            conditions: ConditionRepo::new(pool),
        }
    }

    /// Create an equipment row.
    ///
    /// Both references must resolve to existing rows and the serial
    /// number must be unique. Identity is generated here (UUID v4, not
    /// store-assigned); `created_at` is set by the store.
    pub async fn create(
        &self,
        draft: NewEquipment,
        category_id: i32,
        condition_id: i32,
    ) -> Result<EquipmentRecord, ServiceError> {
        self.resolve_references(category_id, condition_id).await?;

        if self.equipment.serial_exists(draft.serial_number()).await? {
            return Err(ServiceError::Conflict(format!(
                "serial number '{}' already exists",
                draft.serial_number()
            )));
        }

        let id = Uuid::new_v4();
        let created = self
            .equipment
            .insert(id, &draft, category_id, condition_id)
            .await?;
        tracing::info!(equipment_id = %created.equipment_id, "equipment created");
        Ok(created)
    }

    /// Get an equipment row by id.
    pub async fn get(&self, id: Uuid) -> Result<EquipmentRecord, ServiceError> {
        self.equipment
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound {
                resource: "equipment",
                id: id.to_string(),
            })
    }

    /// List all equipment, sorted.
    pub async fn list(
        &self,
        key: EquipmentSortKey,
        direction: SortDirection,
    ) -> Result<Vec<EquipmentRecord>, ServiceError> {
        Ok(self.equipment.list(key, direction).await?)
    }

    /// Update an equipment row in place.
    ///
    /// Re-validates everything as in create; the serial number is
    /// re-checked for uniqueness only when it changed. Identity and
    /// `created_at` never change.
    pub async fn update(
        &self,
        id: Uuid,
        draft: NewEquipment,
        new_category_id: i32,
        new_condition_id: i32,
    ) -> Result<EquipmentRecord, ServiceError> {
        let existing = self.get(id).await?;

        self.resolve_references(new_category_id, new_condition_id)
            .await?;

        if existing.serial_number != draft.serial_number()
            && self.equipment.serial_exists(draft.serial_number()).await?
        {
            return Err(ServiceError::Conflict(format!(
                "serial number '{}' already exists",
                draft.serial_number()
            )));
        }

        let updated = self
            .equipment
            .update(id, &draft, new_category_id, new_condition_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound {
                resource: "equipment",
                id: id.to_string(),
            })?;
        tracing::info!(equipment_id = %updated.equipment_id, "equipment updated");
        Ok(updated)
    }

    /// Delete an equipment row by id.
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.equipment.delete_by_id(id).await? {
            return Err(ServiceError::NotFound {
                resource: "equipment",
                id: id.to_string(),
            });
        }
        tracing::info!(equipment_id = %id, "equipment deleted");
        Ok(())
    }

    async fn resolve_references(
        &self,
        category_id: i32,
        condition_id: i32,
    ) -> Result<(), ServiceError> {
        if !self.categories.exists_by_id(category_id).await? {
            return Err(ServiceError::NotFound {
                resource: "category",
                id: category_id.to_string(),
            });
        }
        if !self.conditions.exists_by_id(condition_id).await? {
            return Err(ServiceError::NotFound {
                resource: "condition",
                id: condition_id.to_string(),
            });
        }
        Ok(())
    }
}
