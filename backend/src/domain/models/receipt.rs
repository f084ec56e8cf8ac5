//! Domain models for saved receipts and the in-flight slip.
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::fee_entry::FeeEntry;

/// An immutable saved receipt: the fee entry, the rendered snapshot taken at
/// save time, and save metadata.
///
/// Field names match the persisted JSON wire format (`createdAt`,
/// `renderedDocument`). The snapshot is never re-rendered; receipts saved
/// under an older slip layout keep that layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Epoch milliseconds at save time. Two saves inside the same
    /// millisecond would collide; accepted for a single-user local tool.
    pub id: i64,
    /// RFC 3339 save timestamp
    pub created_at: String,
    pub data: FeeEntry,
    pub rendered_document: String,
}

impl Receipt {
    /// Build a new receipt for the given entry, stamped with the current
    /// instant.
    pub fn new(data: FeeEntry, rendered_document: String) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis(),
            created_at: now.to_rfc3339(),
            data,
            rendered_document,
        }
    }
}

/// Short display identifier: the last 6 digits of an epoch-millisecond id.
pub fn short_receipt_id(id_millis: i64) -> String {
    format!("{:06}", id_millis.rem_euclid(1_000_000))
}

/// The most recently generated slip, kept so save/print/download can run as
/// separate invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentSlip {
    pub data: FeeEntry,
    pub document: String,
}
