use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::storage::Collection;

/// JsonConnection owns the data directory and the file layout inside it
#[derive(Clone, Debug)]
pub struct JsonConnection {
    base_directory: Arc<PathBuf>,
}

impl JsonConnection {
    /// Create a new connection rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).with_context(|| {
                format!("Failed to create data directory {}", base_path.display())
            })?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: Arc::new(base_path),
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the file backing `collection`
    pub fn collection_path(&self, collection: Collection) -> PathBuf {
        self.base_directory.join(collection.file_name())
    }

    pub fn collection_exists(&self, collection: Collection) -> bool {
        self.collection_path(collection).exists()
    }

    pub fn read_collection(&self, collection: Collection) -> Result<String> {
        let path = self.collection_path(collection);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    /// Replace the collection file with `contents`.
    ///
    /// Each call writes its own uniquely named temp file in the data directory
    /// and renames it over the target, so concurrent writers each replace the
    /// file whole and a reader never sees a half-written array.
    pub fn write_collection(&self, collection: Collection, contents: &str) -> Result<()> {
        let path = self.collection_path(collection);

        let mut temp_file = NamedTempFile::new_in(self.base_directory.as_path())
            .with_context(|| format!("Failed to create temp file for {}", path.display()))?;
        temp_file
            .write_all(contents.as_bytes())
            .with_context(|| format!("Failed to write {}", temp_file.path().display()))?;
        temp_file
            .persist(&path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }
}
