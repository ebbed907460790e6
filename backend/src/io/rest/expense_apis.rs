//! # REST API for Expense Management
//!
//! Endpoints for listing, recording, editing and removing actual expenses.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, put},
    Router,
};
use tracing::info;

use super::{error_response, json_body, parse_id};
use crate::domain::commands::expense::{
    CreateExpenseCommand, DeleteExpenseCommand, ExpenseListQuery, UpdateExpenseCommand,
};
use crate::domain::expense_service::EXPENSE_NOT_FOUND;
use crate::domain::DomainError;
use crate::AppState;
use shared::{ExpenseFilter, ExpenseRequest, SuccessResponse};

/// Routes mounted at `/api/expenses`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_expenses).post(create_expense))
        .route("/:id", put(update_expense).delete(delete_expense))
}

/// List expenses, optionally filtered by `category`, `from` and `to`
pub async fn list_expenses(
    State(state): State<AppState>,
    Query(filter): Query<ExpenseFilter>,
) -> impl IntoResponse {
    info!("GET /api/expenses - filter: {:?}", filter);

    match state.expense_service.list_expenses(ExpenseListQuery { filter }) {
        Ok(expenses) => (StatusCode::OK, Json(expenses)).into_response(),
        Err(e) => error_response("list expenses", e),
    }
}

pub async fn create_expense(
    State(state): State<AppState>,
    payload: Result<Json<ExpenseRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(e) => return error_response("create expense", e),
    };
    info!("POST /api/expenses - request: {:?}", request);

    let result = CreateExpenseCommand::try_from(request)
        .and_then(|command| state.expense_service.create_expense(command));

    match result {
        Ok(expense) => (StatusCode::CREATED, Json(expense)).into_response(),
        Err(e) => error_response("create expense", e),
    }
}

pub async fn update_expense(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<ExpenseRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(e) => return error_response("update expense", e),
    };
    info!("PUT /api/expenses/{} - request: {:?}", raw_id, request);

    let Some(id) = parse_id(&raw_id) else {
        return error_response("update expense", DomainError::not_found(EXPENSE_NOT_FOUND));
    };

    let result = UpdateExpenseCommand::new(id, request)
        .and_then(|command| state.expense_service.update_expense(command));

    match result {
        Ok(expense) => (StatusCode::OK, Json(expense)).into_response(),
        Err(e) => error_response("update expense", e),
    }
}

pub async fn delete_expense(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/expenses/{}", raw_id);

    let Some(id) = parse_id(&raw_id) else {
        return error_response("delete expense", DomainError::not_found(EXPENSE_NOT_FOUND));
    };

    match state.expense_service.delete_expense(DeleteExpenseCommand { id }) {
        Ok(()) => (StatusCode::OK, Json(SuccessResponse::ok())).into_response(),
        Err(e) => error_response("delete expense", e),
    }
}
