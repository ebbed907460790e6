//! # REST API for the Dashboard

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{debug, info};

use super::error_response;
use crate::AppState;
use shared::HealthResponse;

/// Totals and chart series over all three collections
pub async fn get_dashboard(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/dashboard");

    match state.dashboard_service.summary() {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => error_response("build dashboard", e),
    }
}

pub async fn health() -> impl IntoResponse {
    debug!("GET /api/health");
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
