//! # Storage Traits
//!
//! Storage abstraction traits for the fee slip backend. The domain layer
//! only ever talks to these traits, so the file-backed JSON implementation
//! can be swapped for an in-memory fake in tests.

use anyhow::Result;

use crate::domain::models::{CurrentSlip, FeeEntry, Receipt};

/// Minimal key-value persistence contract.
///
/// Mirrors the `get(key)`/`set(key, value)` shape of a browser-style local
/// store; the repositories layer their JSON encoding on top of it.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under a key, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value under a key, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; absent keys are a no-op
    fn remove(&self, key: &str) -> Result<()>;
}

/// Trait defining the interface for receipt record storage operations.
pub trait ReceiptStorage: Send + Sync {
    /// Save a new receipt built from the entry and its rendered snapshot.
    /// The new record is prepended, keeping most-recent-first order.
    fn save_receipt(&self, entry: &FeeEntry, rendered_document: &str) -> Result<Receipt>;

    /// List all saved receipts in stored (most-recent-first) order.
    /// Absent or unreadable persisted data yields an empty list, never an error.
    fn list_receipts(&self) -> Result<Vec<Receipt>>;

    /// Delete a receipt by identifier, compared as strings to tolerate
    /// numeric/string id mismatches. Returns false when nothing matched.
    fn delete_receipt(&self, receipt_id: &str) -> Result<bool>;

    /// Remove the entire receipt collection
    fn clear_receipts(&self) -> Result<()>;
}

/// Trait defining the interface for current-slip session storage.
pub trait SessionStorage: Send + Sync {
    /// Persist the most recently generated slip
    fn store_current_slip(&self, slip: &CurrentSlip) -> Result<()>;

    /// Load the current slip, if one was generated
    fn get_current_slip(&self) -> Result<Option<CurrentSlip>>;

    /// Drop the current slip
    fn clear_current_slip(&self) -> Result<()>;
}
