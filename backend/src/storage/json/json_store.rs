use anyhow::{Context, Result};
use tracing::{debug, info};

use super::connection::JsonConnection;
use crate::storage::{Collection, Record, RecordStore};

/// RecordStore backed by one pretty-printed JSON array file per collection
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    connection: JsonConnection,
}

impl JsonFileStore {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl RecordStore for JsonFileStore {
    fn load<T: Record>(&self, collection: Collection, default: &[T]) -> Result<Vec<T>> {
        if !self.connection.collection_exists(collection) {
            self.save(collection, default)?;
            info!(
                "Seeded {} with {} default records",
                collection,
                default.len()
            );
            return Ok(default.to_vec());
        }

        let contents = self.connection.read_collection(collection)?;
        let records: Vec<T> = serde_json::from_str(&contents)
            .with_context(|| format!("Malformed JSON in {} collection", collection))?;
        debug!("Loaded {} {} records", records.len(), collection);
        Ok(records)
    }

    fn save<T: Record>(&self, collection: Collection, records: &[T]) -> Result<()> {
        let contents = serde_json::to_string_pretty(records)
            .with_context(|| format!("Failed to serialize {} collection", collection))?;
        self.connection.write_collection(collection, &contents)?;
        debug!("Saved {} {} records", records.len(), collection);
        Ok(())
    }
}
