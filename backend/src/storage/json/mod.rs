//! # JSON File Storage
//!
//! Flat-file storage: every collection is a JSON array in its own file.
//!
//! ```text
//! data/
//! ├── categories.json
//! ├── expenses.json
//! └── forecasts.json
//! ```
//!
//! Files are created lazily with their seed contents the first time the
//! collection is loaded, and rewritten through a temp file + rename on save.

pub mod connection;
pub mod json_store;

#[cfg(test)]
pub mod test_utils;

pub use connection::JsonConnection;
pub use json_store::JsonFileStore;
