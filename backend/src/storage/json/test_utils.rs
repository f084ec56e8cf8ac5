//! Test utilities for the JSON storage layer.
//!
//! Provides RAII-based cleanup: the temporary data directory lives as long
//! as the helper and is removed even if a test panics.

use anyhow::Result;
use std::sync::Arc;
use tempfile::TempDir;

use super::connection::JsonConnection;
use super::receipt_repository::ReceiptRepository;
use super::session_repository::SessionRepository;
use crate::storage::traits::KeyValueStore;

/// Test helper bundling a temp-backed connection with repository instances.
pub struct TestHelper {
    pub connection: JsonConnection,
    pub receipt_repo: ReceiptRepository,
    pub session_repo: SessionRepository,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestHelper {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = JsonConnection::new(temp_dir.path())?;
        let store: Arc<dyn KeyValueStore> = Arc::new(connection.clone());
        Ok(Self {
            connection,
            receipt_repo: ReceiptRepository::new(store.clone()),
            session_repo: SessionRepository::new(store),
            _temp_dir: temp_dir,
        })
    }

    /// The underlying store, for building extra repository instances
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        Arc::new(self.connection.clone())
    }
}
