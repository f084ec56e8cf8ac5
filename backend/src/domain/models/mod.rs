//! Domain models for the fee slip backend.

pub mod fee_entry;
pub mod receipt;

pub use fee_entry::{find_facility, FacilityCharge, FeeEntry, FACILITY_CHECKLIST};
pub use receipt::{short_receipt_id, CurrentSlip, Receipt};
