//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services.
//!
//! ## Key Responsibilities
//!
//! - **API Endpoints**: REST routes under `/api` for categories, expenses,
//!   forecasts and the dashboard
//! - **Request Handling**: Turning request bodies and paths into domain commands
//! - **Error Translation**: Mapping `DomainError` onto HTTP status codes with a
//!   `{"error": ...}` body
//!
//! No business rules live here.

pub mod rest;

pub use rest::*;
