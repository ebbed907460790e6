//! In-memory RecordStore.
//!
//! Collections are kept as serialized JSON so loads hand out fresh copies and
//! behave exactly like reading a file back.

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::{Collection, Record, RecordStore};

#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    collections: Arc<Mutex<HashMap<Collection, Value>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything has been persisted for `collection`
    pub fn contains(&self, collection: Collection) -> bool {
        self.collections
            .lock()
            .map(|map| map.contains_key(&collection))
            .unwrap_or(false)
    }
}

impl RecordStore for InMemoryStore {
    fn load<T: Record>(&self, collection: Collection, default: &[T]) -> Result<Vec<T>> {
        let stored = {
            let map = self
                .collections
                .lock()
                .map_err(|_| anyhow!("In-memory store lock poisoned"))?;
            map.get(&collection).cloned()
        };

        match stored {
            Some(value) => serde_json::from_value(value)
                .with_context(|| format!("Malformed data in {} collection", collection)),
            None => {
                self.save(collection, default)?;
                Ok(default.to_vec())
            }
        }
    }

    fn save<T: Record>(&self, collection: Collection, records: &[T]) -> Result<()> {
        let value = serde_json::to_value(records)
            .with_context(|| format!("Failed to serialize {} collection", collection))?;
        let mut map = self
            .collections
            .lock()
            .map_err(|_| anyhow!("In-memory store lock poisoned"))?;
        map.insert(collection, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_seeds_default_once() {
        let store = InMemoryStore::new();
        assert!(!store.contains(Collection::Categories));

        let seeded = store.load(Collection::Categories, &[1_i64, 2, 3]).unwrap();
        assert_eq!(seeded, vec![1, 2, 3]);
        assert!(store.contains(Collection::Categories));

        let again: Vec<i64> = store.load(Collection::Categories, &[9]).unwrap();
        assert_eq!(again, vec![1, 2, 3]);
    }

    #[test]
    fn test_clones_share_state() {
        let store = InMemoryStore::new();
        let other = store.clone();

        store.save(Collection::Expenses, &["a".to_string()]).unwrap();
        let loaded: Vec<String> = other.load(Collection::Expenses, &[]).unwrap();
        assert_eq!(loaded, vec!["a".to_string()]);
    }
}
