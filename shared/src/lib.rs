use serde::{Deserialize, Serialize};

/// One optional facility from the academy's fixed checklist, with its cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityOption {
    pub name: String,
    pub cost: f64,
}

/// Request to generate a slip preview from raw form input.
///
/// Numeric fields arrive as raw strings so the boundary can coerce
/// missing/unparseable values to 0, matching the form behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateSlipRequest {
    pub name: String,
    pub roll: String,
    /// Class / section label
    pub cls: String,
    pub tuition: Option<String>,
    pub additional: Option<String>,
    pub notes: String,
    /// Names of checked facilities, resolved against the checklist
    pub facilities: Vec<String>,
}

/// Response after generating a slip preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlipPreviewResponse {
    /// Rendered slip markup fragment
    pub document: String,
    /// Grand total in PKR
    pub total: f64,
    pub student_name: String,
}

/// Response after saving the current slip as a receipt record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveReceiptResponse {
    /// Epoch-millisecond identifier allocated at save time
    pub id: i64,
    /// RFC 3339 save timestamp
    pub created_at: String,
    /// Number of records in the store after the save
    pub record_count: usize,
}

/// One saved receipt, summarized for list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptSummary {
    pub id: i64,
    pub student_name: String,
    pub created_at: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListReceiptsResponse {
    pub receipts: Vec<ReceiptSummary>,
}

/// Response after reloading a saved receipt as the current slip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewReceiptResponse {
    pub id: i64,
    pub student_name: String,
    pub created_at: String,
    /// The rendered snapshot taken at save time (never re-rendered)
    pub document: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteReceiptResponse {
    /// False when the id matched nothing (delete is idempotent)
    pub deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearReceiptsResponse {
    /// Number of records removed
    pub removed_count: usize,
}

/// Response carrying generated CSV content for the records collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDataResponse {
    pub csv_content: String,
    pub filename: String,
    pub record_count: usize,
}

/// Request to export records directly to a directory on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportToPathRequest {
    /// Target directory; Documents (or home) is used when absent
    pub custom_path: Option<String>,
}

/// Response after exporting records to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportToPathResponse {
    pub success: bool,
    pub message: String,
    pub file_path: String,
    pub record_count: usize,
}
