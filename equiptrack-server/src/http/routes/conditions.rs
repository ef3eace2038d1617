//! Equipment condition endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::Condition;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{ConditionSortKey, SortDirection, SortParams};
use crate::service::ConditionService;

/// Create/update condition request
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionPayload {
    pub condition_name: Option<String>,
}

/// Condition response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionResponse {
    pub condition_id: i32,
    pub condition_name: String,
}

impl From<Condition> for ConditionResponse {
    fn from(c: Condition) -> Self {
        Self {
            condition_id: c.condition_id,
            condition_name: c.condition_name,
        }
    }
}

fn sort(params: &SortParams) -> Result<(ConditionSortKey, SortDirection), ApiError> {
    let key = match params.sort_by.as_deref() {
        Some(s) => ConditionSortKey::parse(s)?,
        None => ConditionSortKey::default(),
    };
    let direction = match params.sort_dir.as_deref() {
        Some(s) => SortDirection::parse(s)?,
        None => SortDirection::default(),
    };
    Ok((key, direction))
}

/// POST /api/conditions - create a condition
async fn create_condition(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConditionPayload>,
) -> Result<(StatusCode, Json<ConditionResponse>), ApiError> {
    let created = ConditionService::new(&state.pool)
        .create(req.condition_name.as_deref().unwrap_or(""))
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /api/conditions/{id} - get a single condition
async fn get_condition(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ConditionResponse>, ApiError> {
    let condition = ConditionService::new(&state.pool).get(id).await?;
    Ok(Json(condition.into()))
}

/// GET /api/conditions - list all conditions with sorting
async fn list_conditions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SortParams>,
) -> Result<Json<Vec<ConditionResponse>>, ApiError> {
    let (key, direction) = sort(&params)?;
    let conditions = ConditionService::new(&state.pool).list(key, direction).await?;

    Ok(Json(conditions.into_iter().map(ConditionResponse::from).collect()))
}

/// PUT /api/conditions/{id} - update a condition
async fn update_condition(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(req): Json<ConditionPayload>,
) -> Result<Json<ConditionResponse>, ApiError> {
    let updated = ConditionService::new(&state.pool)
        .update(id, req.condition_name.as_deref().unwrap_or(""))
        .await?;

    Ok(Json(updated.into()))
}

/// DELETE /api/conditions/{id} - delete a condition
async fn delete_condition(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    ConditionService::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Condition routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/conditions", get(list_conditions).post(create_condition))
        .route(
            "/api/conditions/{id}",
            get(get_condition).put(update_condition).delete(delete_condition),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_defaults_to_name_ascending() {
        let (key, direction) = sort(&SortParams::default()).expect("defaults should parse");
        assert_eq!(key, ConditionSortKey::Name);
        assert_eq!(direction, SortDirection::Asc);
    }

    #[test]
    fn response_uses_camel_case() {
        let response = ConditionResponse::from(Condition {
            condition_id: 2,
            condition_name: "needs repair".into(),
        });
        let json = serde_json::to_value(&response).expect("serialization failed");
        assert_eq!(json["conditionId"], 2);
        assert_eq!(json["conditionName"], "needs repair");
    }
}
