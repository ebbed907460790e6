//! # Expense Tracker Backend
//!
//! HTTP server for a single-user expense tracker. Categories, expenses and
//! forecasts are kept as flat JSON files and exposed through a small CRUD API,
//! alongside the dashboard projections computed in `shared::dashboard`.
//!
//! ## Architecture
//!
//! ```text
//! Browser client
//!     ↓
//! IO Layer (axum handlers under /api)
//!     ↓
//! Domain Layer (services, commands, business rules)
//!     ↓
//! Storage Layer (RecordStore over JSON files)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{
    CategoryService, Clock, DashboardService, ExpenseService, ForecastService, SystemClock,
};
use crate::storage::{JsonConnection, JsonFileStore};

/// Services shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub category_service: CategoryService<JsonFileStore>,
    pub expense_service: ExpenseService<JsonFileStore>,
    pub forecast_service: ForecastService<JsonFileStore>,
    pub dashboard_service: DashboardService<JsonFileStore>,
}

impl AppState {
    pub fn new(store: JsonFileStore, clock: Arc<dyn Clock>, initial_balance: f64) -> Self {
        Self {
            category_service: CategoryService::new(store.clone()),
            expense_service: ExpenseService::new(store.clone()),
            forecast_service: ForecastService::new(store.clone(), clock),
            dashboard_service: DashboardService::new(store, initial_balance),
        }
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up data directory {:?}", config.data_directory);
    let connection = JsonConnection::new(&config.data_directory)?;
    let store = JsonFileStore::new(connection);

    info!("Setting up application state");
    Ok(AppState::new(store, Arc::new(SystemClock), config.initial_balance))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Result<Router> {
    let origin = match &config.cors_origin {
        Some(origin) => {
            let value = origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))?;
            CorsLayer::new().allow_origin(value)
        }
        None => CorsLayer::new().allow_origin(Any),
    };
    let cors = origin
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .nest("/categories", io::category_apis::router())
        .nest("/expenses", io::expense_apis::router())
        .nest("/forecasts", io::forecast_apis::router())
        .route("/dashboard", get(io::dashboard_apis::get_dashboard))
        .route("/health", get(io::dashboard_apis::health));

    let mut router = Router::new().nest("/api", api_routes);
    if let Some(static_directory) = &config.static_directory {
        info!("Serving static files from {:?}", static_directory);
        router = router.fallback_service(ServeDir::new(static_directory));
    }

    Ok(router.layer(cors).with_state(app_state))
}
