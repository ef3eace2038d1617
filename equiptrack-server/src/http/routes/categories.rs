//! Category endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::Category;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{CategorySortKey, SortDirection, SortParams};
use crate::service::CategoryService;

/// Create/update category request
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub category_name: Option<String>,
    pub description: Option<String>,
}

/// Category response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub category_id: i32,
    pub category_name: String,
    pub description: Option<String>,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            category_id: c.category_id,
            category_name: c.category_name,
            description: c.description,
        }
    }
}

fn sort(params: &SortParams) -> Result<(CategorySortKey, SortDirection), ApiError> {
    let key = match params.sort_by.as_deref() {
        Some(s) => CategorySortKey::parse(s)?,
        None => CategorySortKey::default(),
    };
    let direction = match params.sort_dir.as_deref() {
        Some(s) => SortDirection::parse(s)?,
        None => SortDirection::default(),
    };
    Ok((key, direction))
}

/// POST /api/categories - create a category
async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CategoryPayload>,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiError> {
    let created = CategoryService::new(&state.pool)
        .create(req.category_name.as_deref().unwrap_or(""), req.description)
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /api/categories/{id} - get a single category
async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let category = CategoryService::new(&state.pool).get(id).await?;
    Ok(Json(category.into()))
}

/// GET /api/categories - list all categories with sorting
async fn list_categories(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SortParams>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let (key, direction) = sort(&params)?;
    let categories = CategoryService::new(&state.pool).list(key, direction).await?;

    Ok(Json(categories.into_iter().map(CategoryResponse::from).collect()))
}

/// PUT /api/categories/{id} - update a category
async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(req): Json<CategoryPayload>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let updated = CategoryService::new(&state.pool)
        .update(id, req.category_name.as_deref().unwrap_or(""), req.description)
        .await?;

    Ok(Json(updated.into()))
}

/// DELETE /api/categories/{id} - delete a category
async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    CategoryService::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/categories", get(list_categories).post(create_category))
        .route(
            "/api/categories/{id}",
            get(get_category).put(update_category).delete(delete_category),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_defaults_to_name_ascending() {
        let (key, direction) = sort(&SortParams::default()).expect("defaults should parse");
        assert_eq!(key, CategorySortKey::Name);
        assert_eq!(direction, SortDirection::Asc);
    }

    #[test]
    fn sort_rejects_unknown_key() {
        let params = SortParams {
            sort_by: Some("nonsense".into()),
            sort_dir: None,
        };
        assert!(matches!(sort(&params), Err(ApiError::Validation(_))));
    }

    #[test]
    fn response_keeps_missing_description_null() {
        let response = CategoryResponse::from(Category {
            category_id: 1,
            category_name: "Спорт".into(),
            description: None,
        });
        let json = serde_json::to_value(&response).expect("serialization failed");
        assert_eq!(json["categoryId"], 1);
        assert_eq!(json["categoryName"], "Спорт");
        assert!(json["description"].is_null());
    }
}
