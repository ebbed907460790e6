//! # REST API for Forecasts
//!
//! Planned expenses. Unlike categories and expenses, deleting a forecast that
//! does not exist still answers `{"success": true}`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, put},
    Router,
};
use tracing::info;

use super::{error_response, json_body, parse_id};
use crate::domain::commands::forecast::{
    CreateForecastCommand, DeleteForecastCommand, UpdateForecastCommand,
};
use crate::domain::forecast_service::FORECAST_NOT_FOUND;
use crate::domain::DomainError;
use crate::AppState;
use shared::{ForecastRequest, SuccessResponse};

/// Routes mounted at `/api/forecasts`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_forecasts).post(create_forecast))
        .route("/reminders", get(list_due_soon).delete(delete_reminders_segment))
        .route("/:id", put(update_forecast).delete(delete_forecast))
}

pub async fn list_forecasts(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/forecasts");

    match state.forecast_service.list_forecasts() {
        Ok(forecasts) => (StatusCode::OK, Json(forecasts)).into_response(),
        Err(e) => error_response("list forecasts", e),
    }
}

/// Create a forecast; dates before today are rejected
pub async fn create_forecast(
    State(state): State<AppState>,
    payload: Result<Json<ForecastRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(e) => return error_response("create forecast", e),
    };
    info!("POST /api/forecasts - request: {:?}", request);

    let result = CreateForecastCommand::try_from(request)
        .and_then(|command| state.forecast_service.create_forecast(command));

    match result {
        Ok(forecast) => (StatusCode::CREATED, Json(forecast)).into_response(),
        Err(e) => error_response("create forecast", e),
    }
}

pub async fn update_forecast(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<ForecastRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(e) => return error_response("update forecast", e),
    };
    info!("PUT /api/forecasts/{} - request: {:?}", raw_id, request);

    let Some(id) = parse_id(&raw_id) else {
        return error_response("update forecast", DomainError::not_found(FORECAST_NOT_FOUND));
    };

    let result = UpdateForecastCommand::new(id, request)
        .and_then(|command| state.forecast_service.update_forecast(command));

    match result {
        Ok(forecast) => (StatusCode::OK, Json(forecast)).into_response(),
        Err(e) => error_response("update forecast", e),
    }
}

pub async fn delete_forecast(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/forecasts/{}", raw_id);
    delete_response(&state, parse_id(&raw_id))
}

/// `reminders` is not a forecast id, so a delete aimed at it matches nothing
pub async fn delete_reminders_segment(State(state): State<AppState>) -> impl IntoResponse {
    info!("DELETE /api/forecasts/reminders");
    delete_response(&state, None)
}

fn delete_response(state: &AppState, id: Option<i64>) -> Response {
    match state.forecast_service.delete_forecast(DeleteForecastCommand { id }) {
        Ok(()) => (StatusCode::OK, Json(SuccessResponse::ok())).into_response(),
        Err(e) => error_response("delete forecast", e),
    }
}

/// Forecasts falling due within the next 24 hours
pub async fn list_due_soon(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/forecasts/reminders");

    match state.forecast_service.due_soon() {
        Ok(forecasts) => (StatusCode::OK, Json(forecasts)).into_response(),
        Err(e) => error_response("list due forecasts", e),
    }
}
