//! Sports equipment repository
//!
//! Equipment rows reference a category and a condition; every read
//! JOINs both so callers get the embedded records in a single query
//! (no N+1).

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::{EquipmentSortKey, NewEquipment, SortDirection};

use super::{Category, Condition, DbError};

/// Equipment record with embedded category and condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentRecord {
    pub equipment_id: Uuid,
    pub serial_number: String,
    pub equipment_name: String,
    pub quantity: i32,
    pub last_check_date: Option<NaiveDate>,
    pub end_of_service_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub description: Option<String>,
    pub category: Category,
    pub condition: Condition,
}

/// Columns shared by every equipment query; `e` must be the equipment
/// table (or CTE), `c` the categories table, `k` the conditions table.
const EQUIPMENT_COLUMNS: &str = r#"
    e.equipment_id, e.serial_number, e.equipment_name, e.quantity,
    e.last_check_date, e.end_of_service_date, e.created_at, e.description,
    c.category_id, c.category_name, c.description AS category_description,
    k.condition_id, k.condition_name
"#;

fn record_from_row(row: &PgRow) -> EquipmentRecord {
    EquipmentRecord {
        equipment_id: row.get("equipment_id"),
        serial_number: row.get("serial_number"),
        equipment_name: row.get("equipment_name"),
        quantity: row.get("quantity"),
        last_check_date: row.get("last_check_date"),
        end_of_service_date: row.get("end_of_service_date"),
        created_at: row.get("created_at"),
        description: row.get("description"),
        category: Category {
            category_id: row.get("category_id"),
            category_name: row.get("category_name"),
            description: row.get("category_description"),
        },
        condition: Condition {
            condition_id: row.get("condition_id"),
            condition_name: row.get("condition_name"),
        },
    }
}

/// Sports equipment repository
pub struct EquipmentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> EquipmentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an equipment row and return it with embedded references.
    ///
    /// Uses a CTE so the insert and the reference JOIN happen in one
    /// query. `created_at` is set by the store at insert time.
    pub async fn insert(
        &self,
        id: Uuid,
        draft: &NewEquipment,
        category_id: i32,
        condition_id: i32,
    ) -> Result<EquipmentRecord, DbError> {
        let query = format!(
            r#"
            WITH e AS (
                INSERT INTO sports_equipment
                    (equipment_id, category_id, serial_number, equipment_name,
                     quantity, condition_id, last_check_date, end_of_service_date,
                     description)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING *
            )
            SELECT {EQUIPMENT_COLUMNS}
            FROM e
            JOIN categories c ON c.category_id = e.category_id
            JOIN equipment_conditions k ON k.condition_id = e.condition_id
            "#
        );

        let row = sqlx::query(&query)
            .bind(id)
            .bind(category_id)
            .bind(draft.serial_number())
            .bind(draft.equipment_name())
            .bind(draft.quantity())
            .bind(condition_id)
            .bind(draft.last_check_date())
            .bind(draft.end_of_service_date())
            .bind(draft.description())
            .fetch_one(self.pool)
            .await
            .map_err(DbError::from_sqlx)?;

        Ok(record_from_row(&row))
    }

    /// Look up an equipment row by id, with embedded references.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<EquipmentRecord>, DbError> {
        let query = format!(
            r#"
            SELECT {EQUIPMENT_COLUMNS}
            FROM sports_equipment e
            JOIN categories c ON c.category_id = e.category_id
            JOIN equipment_conditions k ON k.condition_id = e.condition_id
            WHERE e.equipment_id = $1
            "#
        );

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.as_ref().map(record_from_row))
    }

    /// Check whether an equipment row with this id exists.
    pub async fn exists_by_id(&self, id: Uuid) -> Result<bool, DbError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM sports_equipment WHERE equipment_id = $1)")
                .bind(id)
                .fetch_one(self.pool)
                .await?;

        Ok(exists.0)
    }

    /// Check whether an equipment row with this serial number exists.
    pub async fn serial_exists(&self, serial_number: &str) -> Result<bool, DbError> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM sports_equipment WHERE serial_number = $1)",
        )
        .bind(serial_number)
        .fetch_one(self.pool)
        .await?;

        Ok(exists.0)
    }

    /// List all equipment with embedded references, ordered by the
    /// given key and direction.
    pub async fn list(
        &self,
        key: EquipmentSortKey,
        direction: SortDirection,
    ) -> Result<Vec<EquipmentRecord>, DbError> {
        let query = format!(
            r#"
            SELECT {EQUIPMENT_COLUMNS}
            FROM sports_equipment e
            JOIN categories c ON c.category_id = e.category_id
            JOIN equipment_conditions k ON k.condition_id = e.condition_id
            ORDER BY e.{} {}
            "#,
            key.column(),
            direction.sql()
        );

        let rows = sqlx::query(&query).fetch_all(self.pool).await?;

        Ok(rows.iter().map(record_from_row).collect())
    }

    /// Overwrite the client-controlled fields of an existing row.
    ///
    /// `equipment_id` and `created_at` are never touched.
    pub async fn update(
        &self,
        id: Uuid,
        draft: &NewEquipment,
        category_id: i32,
        condition_id: i32,
    ) -> Result<Option<EquipmentRecord>, DbError> {
        let query = format!(
            r#"
            WITH e AS (
                UPDATE sports_equipment
                SET category_id = $2,
                    serial_number = $3,
                    equipment_name = $4,
                    quantity = $5,
                    condition_id = $6,
                    last_check_date = $7,
                    end_of_service_date = $8,
                    description = $9
                WHERE equipment_id = $1
                RETURNING *
            )
            SELECT {EQUIPMENT_COLUMNS}
            FROM e
            JOIN categories c ON c.category_id = e.category_id
            JOIN equipment_conditions k ON k.condition_id = e.condition_id
            "#
        );

        let row = sqlx::query(&query)
            .bind(id)
            .bind(category_id)
            .bind(draft.serial_number())
            .bind(draft.equipment_name())
            .bind(draft.quantity())
            .bind(condition_id)
            .bind(draft.last_check_date())
            .bind(draft.end_of_service_date())
            .bind(draft.description())
            .fetch_optional(self.pool)
            .await
            .map_err(DbError::from_sqlx)?;

        Ok(row.as_ref().map(record_from_row))
    }

    /// Delete an equipment row by id. Returns false if no row matched.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM sports_equipment WHERE equipment_id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(DbError::from_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
