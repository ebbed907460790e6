//! # Storage Module
//!
//! Persistence for the three record collections (categories, expenses and
//! forecasts). Each collection is a single ordered JSON array that is read
//! whole and rewritten whole on every mutation.
//!
//! ## Implementations
//!
//! - **JSON files** (`json`): one pretty-printed `<collection>.json` file per
//!   collection under the data directory. This is what the server uses.
//! - **In memory** (`memory`): the same contract over a process-local map, used
//!   by service tests and for throwaway servers.
//!
//! ## Known limitation
//!
//! Saves are full overwrites with no locking. Two requests that load, mutate
//! and save the same collection concurrently can interleave, in which case the
//! last save wins and the other change is lost. This is accepted for a local
//! single-user tool.

pub mod json;
pub mod memory;
pub mod traits;

pub use json::{JsonConnection, JsonFileStore};
pub use memory::InMemoryStore;
pub use traits::{Collection, Record, RecordStore};
