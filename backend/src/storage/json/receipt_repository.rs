//! # Receipt Repository
//!
//! Persists the receipt collection as a single JSON array under one
//! key-value entry, most-recent-first, matching the original records format.
//! Every mutation is a full read-modify-write of the collection.

use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use crate::domain::models::{FeeEntry, Receipt};
use crate::storage::traits::{KeyValueStore, ReceiptStorage};

/// Key-value entry holding the JSON-encoded receipt collection
pub const RECORDS_KEY: &str = "academy_fee_records";

/// Receipt repository over any [`KeyValueStore`].
#[derive(Clone)]
pub struct ReceiptRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ReceiptRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the full collection. Absent or unparseable data is treated as an
    /// empty collection so a corrupt store never crashes a caller.
    fn read_records(&self) -> Result<Vec<Receipt>> {
        let raw = match self.store.get(RECORDS_KEY)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };
        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!("Stored receipt data is unreadable, treating as empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    fn write_records(&self, records: &[Receipt]) -> Result<()> {
        let encoded = serde_json::to_string(records)?;
        self.store.set(RECORDS_KEY, &encoded)
    }
}

impl ReceiptStorage for ReceiptRepository {
    fn save_receipt(&self, entry: &FeeEntry, rendered_document: &str) -> Result<Receipt> {
        let receipt = Receipt::new(entry.clone(), rendered_document.to_string());

        let mut records = self.read_records()?;
        records.insert(0, receipt.clone());
        self.write_records(&records)?;

        info!(
            "Saved receipt {} for '{}' ({} records total)",
            receipt.id,
            receipt.data.name,
            records.len()
        );
        Ok(receipt)
    }

    fn list_receipts(&self) -> Result<Vec<Receipt>> {
        self.read_records()
    }

    fn delete_receipt(&self, receipt_id: &str) -> Result<bool> {
        let mut records = self.read_records()?;
        let before = records.len();
        records.retain(|r| r.id.to_string() != receipt_id);

        if records.len() == before {
            info!("Delete requested for unknown receipt id: {}", receipt_id);
            return Ok(false);
        }

        self.write_records(&records)?;
        info!("Deleted receipt {}", receipt_id);
        Ok(true)
    }

    fn clear_receipts(&self) -> Result<()> {
        self.store.remove(RECORDS_KEY)?;
        info!("Cleared all saved receipts");
        Ok(())
    }
}
