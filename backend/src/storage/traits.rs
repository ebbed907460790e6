//! # Storage Traits
//!
//! The record store abstraction the domain services are written against, so
//! the JSON file store can be swapped for the in-memory fake in tests.

use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// Anything that can live in a collection file.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {}

impl<T> Record for T where T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {}

/// The persisted record collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Categories,
    Expenses,
    Forecasts,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Expenses => "expenses",
            Self::Forecasts => "forecasts",
        }
    }

    /// File name of the collection inside the data directory
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whole-collection persistence.
///
/// Implementations store one ordered sequence per collection and never
/// validate its contents beyond deserializing into `T`.
pub trait RecordStore: Clone + Send + Sync + 'static {
    /// Load a collection. If nothing has been persisted for it yet, `default`
    /// is persisted first and returned.
    fn load<T: Record>(&self, collection: Collection, default: &[T]) -> Result<Vec<T>>;

    /// Replace the persisted collection with `records`.
    ///
    /// Readers observe either the previous or the new sequence, never a mix.
    fn save<T: Record>(&self, collection: Collection, records: &[T]) -> Result<()>;
}
