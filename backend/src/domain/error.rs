//! User-facing failure taxonomy for slip operations.
//!
//! Services return `anyhow::Result`; these variants mark the failures the
//! interaction layer is expected to surface verbatim to the user, as opposed
//! to unexpected storage or collaborator errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FeeSlipError {
    /// Required form input missing: name empty or tuition zero.
    #[error("Please enter student name and tuition.")]
    InvalidSlipInput,

    /// Save/print/download attempted before any preview was generated.
    #[error("Generate slip first.")]
    NoCurrentSlip,

    /// Export attempted over an empty records collection.
    #[error("No records to export.")]
    NothingToExport,

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Facility name that is not on the checklist.
    #[error("Unknown facility: {0}")]
    UnknownFacility(String),
}
