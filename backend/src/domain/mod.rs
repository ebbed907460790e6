//! # Domain Module
//!
//! Business rules for the expense tracker, independent of HTTP and of the
//! on-disk format.
//!
//! ## Module Organization
//!
//! - **category_service**: Category CRUD and the expense clean-up on delete
//! - **expense_service**: Expense CRUD and list filtering
//! - **forecast_service**: Forecast CRUD, the past-date rule and due-soon lookup
//! - **dashboard_service**: Totals and chart series over all collections
//! - **collections**: Seed data and typed loading of each collection
//! - **commands**: Coerced service inputs
//! - **clock**: Injectable source of the current date
//!
//! ## Business Rules
//!
//! - Ids are assigned as one more than the largest id in the collection
//! - Every mutation rewrites the whole collection it touches
//! - Deleting a missing category or expense is an error; deleting a missing
//!   forecast is not

pub mod category_service;
pub mod clock;
pub mod collections;
pub mod commands;
pub mod dashboard_service;
pub mod error;
pub mod expense_service;
pub mod forecast_service;

pub use category_service::CategoryService;
pub use clock::{Clock, FixedClock, SystemClock};
pub use dashboard_service::DashboardService;
pub use error::{DomainError, DomainResult};
pub use expense_service::ExpenseService;
pub use forecast_service::ForecastService;
