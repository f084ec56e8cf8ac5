//! # JSON Connection
//!
//! File-backed [`KeyValueStore`] implementation. Each key lives in its own
//! `{key}.json` file under a base data directory; writes go through a temp
//! file followed by a rename so a crash mid-write never leaves a torn file.

use anyhow::Result;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::traits::KeyValueStore;

/// Connection to a local JSON data directory.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a connection rooted at the given data directory, creating the
    /// directory if it does not exist yet.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();
        if !base_directory.exists() {
            fs::create_dir_all(&base_directory)?;
            info!("Created data directory: {:?}", base_directory);
        }
        Ok(Self { base_directory })
    }

    /// Base data directory this connection operates on
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonConnection {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path)?;
        debug!("Read {} bytes from {:?}", value.len(), path);
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);

        // Atomic write pattern: write to temp file, then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        debug!("Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path)?;
            debug!("Removed {:?}", path);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_returns_none_for_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();

        assert_eq!(connection.get("missing").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();

        connection.set("records", "[1,2,3]").unwrap();
        assert_eq!(connection.get("records").unwrap().as_deref(), Some("[1,2,3]"));

        connection.set("records", "[]").unwrap();
        assert_eq!(connection.get("records").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();

        connection.set("records", "[]").unwrap();
        connection.remove("records").unwrap();
        connection.remove("records").unwrap();
        assert_eq!(connection.get("records").unwrap(), None);
    }

    #[test]
    fn values_persist_across_connections() {
        let temp_dir = TempDir::new().unwrap();
        {
            let connection = JsonConnection::new(temp_dir.path()).unwrap();
            connection.set("records", "[42]").unwrap();
        }
        let reopened = JsonConnection::new(temp_dir.path()).unwrap();
        assert_eq!(reopened.get("records").unwrap().as_deref(), Some("[42]"));
    }
}
