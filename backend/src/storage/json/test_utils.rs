//! Test utilities for file-backed storage tests.
//!
//! The temporary data directory is removed when the environment is dropped,
//! even if the test panics.
use anyhow::Result;
use tempfile::TempDir;

use super::connection::JsonConnection;
use super::json_store::JsonFileStore;

/// A temporary data directory with a connection rooted in it
pub struct TestEnvironment {
    pub connection: JsonConnection,
    /// Base directory path for inspecting files directly
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // keeps the directory alive
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = JsonConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }

    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(self.connection.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;
        {
            let env = TestEnvironment::new()?;
            base_path = env.base_path.clone();
            assert!(base_path.exists());
        }
        assert!(!base_path.exists());
        Ok(())
    }
}
