//! # REST API for Category Management

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, put},
    Router,
};
use tracing::info;

use super::{error_response, json_body, parse_id};
use crate::domain::category_service::CATEGORY_NOT_FOUND;
use crate::domain::commands::category::{
    CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand,
};
use crate::domain::DomainError;
use crate::AppState;
use shared::{CreateCategoryRequest, SuccessResponse, UpdateCategoryRequest};

/// Routes mounted at `/api/categories`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/:id", put(update_category).delete(delete_category))
}

pub async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/categories");

    match state.category_service.list_categories() {
        Ok(categories) => (StatusCode::OK, Json(categories)).into_response(),
        Err(e) => error_response("list categories", e),
    }
}

pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(e) => return error_response("create category", e),
    };
    info!("POST /api/categories - request: {:?}", request);

    match state.category_service.create_category(CreateCategoryCommand::from(request)) {
        Ok(category) => (StatusCode::CREATED, Json(category)).into_response(),
        Err(e) => error_response("create category", e),
    }
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateCategoryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(e) => return error_response("update category", e),
    };
    info!("PUT /api/categories/{} - request: {:?}", raw_id, request);

    let Some(id) = parse_id(&raw_id) else {
        return error_response("update category", DomainError::not_found(CATEGORY_NOT_FOUND));
    };

    match state
        .category_service
        .update_category(UpdateCategoryCommand::new(id, request))
    {
        Ok(category) => (StatusCode::OK, Json(category)).into_response(),
        Err(e) => error_response("update category", e),
    }
}

/// Delete a category; expenses that used it become uncategorized
pub async fn delete_category(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/categories/{}", raw_id);

    let Some(id) = parse_id(&raw_id) else {
        return error_response("delete category", DomainError::not_found(CATEGORY_NOT_FOUND));
    };

    match state
        .category_service
        .delete_category(DeleteCategoryCommand { id })
    {
        Ok(()) => (StatusCode::OK, Json(SuccessResponse::ok())).into_response(),
        Err(e) => error_response("delete category", e),
    }
}

