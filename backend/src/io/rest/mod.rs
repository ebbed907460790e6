//! # REST API Interface Layer
//!
//! HTTP endpoints for the expense tracker. Handlers log the request, build a
//! domain command, call the service and translate the result.
//!
//! ## Error Translation
//!
//! | Domain error | Status |
//! |---|---|
//! | `Validation` | 400 |
//! | `NotFound` | 404 |
//! | `Storage` | 500 |
//!
//! All error bodies have the shape `{"error": "<message>"}`.

pub mod category_apis;
pub mod dashboard_apis;
pub mod expense_apis;
pub mod forecast_apis;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::error;

use crate::domain::{DomainError, DomainResult};
use shared::coerce::leading_integer;
use shared::ErrorResponse;

/// Build the `{"error": ...}` response for a failed service call.
pub fn error_response(action: &str, e: DomainError) -> Response {
    let status = match &e {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        error!("Failed to {}: {:#}", action, e);
    } else {
        error!("Failed to {}: {}", action, e);
    }
    (status, Json(ErrorResponse { error: e.to_string() })).into_response()
}

/// Unwrap a JSON request body. A request sent without a JSON body is read as
/// an empty object, so absent fields take their defaults; a body that is not
/// valid JSON for `T` is a validation error.
pub fn json_body<T: Default>(payload: Result<Json<T>, JsonRejection>) -> DomainResult<T> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(DomainError::validation(rejection.body_text())),
    }
}

/// Path ids are read the way the browser client builds them, so `"7"` and
/// `"7abc"` both name record 7.
pub fn parse_id(raw: &str) -> Option<i64> {
    leading_integer(raw)
}
