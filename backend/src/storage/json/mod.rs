//! # JSON Storage Module
//!
//! File-backed storage implementation for the fee slip backend. The whole
//! receipt collection is one JSON-encoded array under a single key-value
//! entry, most-recent-first, plus a second entry for the current slip.
//!
//! ## File layout
//!
//! ```text
//! data/
//! ├── academy_fee_records.json   ← saved receipts, most recent first
//! └── current_slip.json          ← last generated preview
//! ```

pub mod connection;
pub mod receipt_repository;
pub mod session_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::JsonConnection;
pub use receipt_repository::{ReceiptRepository, RECORDS_KEY};
pub use session_repository::{SessionRepository, CURRENT_SLIP_KEY};
