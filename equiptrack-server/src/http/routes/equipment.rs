//! Sports equipment endpoints
//!
//! Request bodies embed the category and condition as objects carrying
//! their ids; responses embed the full referenced records.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::repos::EquipmentRecord;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{
    EquipmentSortKey, NewEquipment, SortDirection, SortParams, ValidationError,
};
use crate::service::EquipmentService;

use super::categories::CategoryResponse;
use super::conditions::ConditionResponse;

/// Embedded category reference in a request body
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    pub category_id: Option<i32>,
}

/// Embedded condition reference in a request body
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionRef {
    pub condition_id: Option<i32>,
}

/// Create/update equipment request
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentPayload {
    pub serial_number: Option<String>,
    pub equipment_name: Option<String>,
    pub quantity: Option<i32>,
    pub category: Option<CategoryRef>,
    pub condition: Option<ConditionRef>,
    pub last_check_date: Option<NaiveDate>,
    pub end_of_service_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl EquipmentPayload {
    /// Pull the embedded reference ids out of the body; both are
    /// required before the service is consulted.
    fn reference_ids(&self) -> Result<(i32, i32), ApiError> {
        let category_id = self
            .category
            .as_ref()
            .and_then(|c| c.category_id)
            .ok_or(ValidationError::Missing { field: "category id" })?;
        let condition_id = self
            .condition
            .as_ref()
            .and_then(|c| c.condition_id)
            .ok_or(ValidationError::Missing { field: "condition id" })?;
        Ok((category_id, condition_id))
    }

    /// Validate the client-controlled fields into a draft.
    fn draft(self) -> Result<NewEquipment, ApiError> {
        Ok(NewEquipment::new(
            self.serial_number.as_deref().unwrap_or(""),
            self.equipment_name.as_deref().unwrap_or(""),
            self.quantity,
            self.last_check_date,
            self.end_of_service_date,
            self.description,
        )?)
    }
}

/// Equipment response with embedded references
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentResponse {
    pub equipment_id: Uuid,
    pub serial_number: String,
    pub equipment_name: String,
    pub quantity: i32,
    pub category: CategoryResponse,
    pub condition: ConditionResponse,
    pub last_check_date: Option<NaiveDate>,
    pub end_of_service_date: NaiveDate,
    pub created_at: String,
    pub description: Option<String>,
}

impl From<EquipmentRecord> for EquipmentResponse {
    fn from(e: EquipmentRecord) -> Self {
        Self {
            equipment_id: e.equipment_id,
            serial_number: e.serial_number,
            equipment_name: e.equipment_name,
            quantity: e.quantity,
            category: e.category.into(),
            condition: e.condition.into(),
            last_check_date: e.last_check_date,
            end_of_service_date: e.end_of_service_date,
            created_at: e.created_at.to_rfc3339(),
            description: e.description,
        }
    }
}

fn sort(params: &SortParams) -> Result<(EquipmentSortKey, SortDirection), ApiError> {
    let key = match params.sort_by.as_deref() {
        Some(s) => EquipmentSortKey::parse(s)?,
        None => EquipmentSortKey::default(),
    };
    let direction = match params.sort_dir.as_deref() {
        Some(s) => SortDirection::parse(s)?,
        None => SortDirection::default(),
    };
    Ok((key, direction))
}

/// POST /api/equipment - create equipment
async fn create_equipment(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EquipmentPayload>,
) -> Result<(StatusCode, Json<EquipmentResponse>), ApiError> {
    let (category_id, condition_id) = req.reference_ids()?;
    let draft = req.draft()?;

    let created = EquipmentService::new(&state.pool)
        .create(draft, category_id, condition_id)
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /api/equipment/{id} - get a single equipment row
async fn get_equipment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<EquipmentResponse>, ApiError> {
    let equipment = EquipmentService::new(&state.pool).get(id).await?;
    Ok(Json(equipment.into()))
}

/// GET /api/equipment - list all equipment with sorting
async fn list_equipment(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SortParams>,
) -> Result<Json<Vec<EquipmentResponse>>, ApiError> {
    let (key, direction) = sort(&params)?;
    let equipment = EquipmentService::new(&state.pool).list(key, direction).await?;

    Ok(Json(equipment.into_iter().map(EquipmentResponse::from).collect()))
}

/// PUT /api/equipment/{id} - update equipment
async fn update_equipment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<EquipmentPayload>,
) -> Result<Json<EquipmentResponse>, ApiError> {
    let (category_id, condition_id) = req.reference_ids()?;
    let draft = req.draft()?;

    let updated = EquipmentService::new(&state.pool)
        .update(id, draft, category_id, condition_id)
        .await?;

    Ok(Json(updated.into()))
}

/// DELETE /api/equipment/{id} - delete equipment
async fn delete_equipment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    EquipmentService::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Equipment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/equipment", get(list_equipment).post(create_equipment))
        .route(
            "/api/equipment/{id}",
            get(get_equipment).put(update_equipment).delete(delete_equipment),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::{Category, Condition};
    use chrono::{TimeZone, Utc};

    fn payload(json: serde_json::Value) -> EquipmentPayload {
        serde_json::from_value(json).expect("payload should deserialize")
    }

    #[test]
    fn missing_category_reference_is_rejected() {
        let req = payload(serde_json::json!({
            "serialNumber": "SN1",
            "equipmentName": "Ball",
            "quantity": 5,
            "condition": {"conditionId": 1},
            "endOfServiceDate": "2027-06-01"
        }));
        assert!(matches!(
            req.reference_ids(),
            Err(ApiError::Validation(ValidationError::Missing { .. }))
        ));
    }

    #[test]
    fn reference_object_without_id_is_rejected() {
        let req = payload(serde_json::json!({
            "serialNumber": "SN1",
            "equipmentName": "Ball",
            "quantity": 5,
            "category": {"categoryName": "Спорт"},
            "condition": {"conditionId": 1},
            "endOfServiceDate": "2027-06-01"
        }));
        assert!(matches!(
            req.reference_ids(),
            Err(ApiError::Validation(ValidationError::Missing { .. }))
        ));
    }

    #[test]
    fn full_payload_builds_a_draft() {
        let req = payload(serde_json::json!({
            "serialNumber": "SN1",
            "equipmentName": "Ball",
            "quantity": 5,
            "category": {"categoryId": 1},
            "condition": {"conditionId": 2},
            "lastCheckDate": "2026-01-15",
            "endOfServiceDate": "2027-06-01",
            "description": "match ball"
        }));
        let (category_id, condition_id) = req.reference_ids().expect("ids should resolve");
        assert_eq!((category_id, condition_id), (1, 2));

        let draft = req.draft().expect("draft should validate");
        assert_eq!(draft.serial_number(), "SN1");
        assert_eq!(draft.quantity(), 5);
        assert_eq!(
            draft.end_of_service_date(),
            NaiveDate::from_ymd_opt(2027, 6, 1).unwrap()
        );
    }

    #[test]
    fn response_embeds_references() {
        let record = EquipmentRecord {
            equipment_id: Uuid::nil(),
            serial_number: "SN1".into(),
            equipment_name: "Ball".into(),
            quantity: 5,
            last_check_date: None,
            end_of_service_date: NaiveDate::from_ymd_opt(2027, 6, 1).unwrap(),
            created_at: Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap(),
            description: None,
            category: Category {
                category_id: 1,
                category_name: "Спорт".into(),
                description: None,
            },
            condition: Condition {
                condition_id: 2,
                condition_name: "new".into(),
            },
        };

        let json = serde_json::to_value(EquipmentResponse::from(record))
            .expect("serialization failed");
        assert_eq!(json["category"]["categoryId"], 1);
        assert_eq!(json["condition"]["conditionName"], "new");
        assert_eq!(json["endOfServiceDate"], "2027-06-01");
        assert!(json["createdAt"].as_str().unwrap().starts_with("2026-08-05T12:00:00"));
    }
}
