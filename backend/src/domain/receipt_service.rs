//! Receipt workflow for the fee slip backend.
//!
//! Orchestrates slip generation (validate, render, remember as the current
//! slip) and the lifecycle of saved receipts (save, list, view, delete,
//! clear) over the injected storage traits.

use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use shared::{
    ClearReceiptsResponse, DeleteReceiptResponse, GenerateSlipRequest, ListReceiptsResponse,
    ReceiptSummary, SaveReceiptResponse, SlipPreviewResponse, ViewReceiptResponse,
};

use crate::domain::error::FeeSlipError;
use crate::domain::models::{find_facility, CurrentSlip, FeeEntry, Receipt};
use crate::domain::render_service::RenderService;
use crate::storage::traits::{ReceiptStorage, SessionStorage};

/// Coerce a raw form amount: absent, blank, or unparseable input counts as 0.
fn coerce_amount(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.0)
}

/// Service for generating slips and managing saved receipts.
#[derive(Clone)]
pub struct ReceiptService {
    receipts: Arc<dyn ReceiptStorage>,
    session: Arc<dyn SessionStorage>,
    renderer: RenderService,
}

impl ReceiptService {
    pub fn new(receipts: Arc<dyn ReceiptStorage>, session: Arc<dyn SessionStorage>) -> Self {
        Self {
            receipts,
            session,
            renderer: RenderService::new(),
        }
    }

    /// Build a fee entry from raw form input, resolving facility names
    /// against the checklist.
    fn build_entry(&self, request: &GenerateSlipRequest) -> Result<FeeEntry> {
        let mut facilities = Vec::with_capacity(request.facilities.len());
        for name in &request.facilities {
            let facility = find_facility(name)
                .ok_or_else(|| FeeSlipError::UnknownFacility(name.clone()))?;
            facilities.push(facility);
        }

        Ok(FeeEntry {
            name: request.name.trim().to_string(),
            roll: request.roll.trim().to_string(),
            cls: request.cls.trim().to_string(),
            tuition: coerce_amount(request.tuition.as_deref()),
            additional: coerce_amount(request.additional.as_deref()),
            notes: request.notes.trim().to_string(),
            facilities,
        })
    }

    /// Generate a slip preview and remember it as the current slip.
    ///
    /// Fails with [`FeeSlipError::InvalidSlipInput`] when the student name is
    /// empty or the tuition is zero; nothing is mutated in that case.
    pub fn generate_slip(&self, request: GenerateSlipRequest) -> Result<SlipPreviewResponse> {
        let entry = self.build_entry(&request)?;

        if entry.name.is_empty() || entry.tuition == 0.0 {
            warn!("Rejected slip input: name or tuition missing");
            return Err(FeeSlipError::InvalidSlipInput.into());
        }

        let document = self.renderer.render_slip(&entry);
        let total = entry.total();
        info!("Generated slip for '{}', total {} PKR", entry.name, total);

        self.session.store_current_slip(&CurrentSlip {
            data: entry.clone(),
            document: document.clone(),
        })?;

        Ok(SlipPreviewResponse {
            document,
            total,
            student_name: entry.name,
        })
    }

    /// The current slip, or [`FeeSlipError::NoCurrentSlip`] when no preview
    /// has been generated yet.
    pub fn current_slip(&self) -> Result<CurrentSlip> {
        self.session
            .get_current_slip()?
            .ok_or_else(|| FeeSlipError::NoCurrentSlip.into())
    }

    /// Save the current slip as an immutable receipt record.
    pub fn save_current_slip(&self) -> Result<SaveReceiptResponse> {
        let slip = self.current_slip()?;
        let receipt = self.receipts.save_receipt(&slip.data, &slip.document)?;
        let record_count = self.receipts.list_receipts()?.len();

        Ok(SaveReceiptResponse {
            id: receipt.id,
            created_at: receipt.created_at,
            record_count,
        })
    }

    /// All saved receipts, most recent first (raw records, for export).
    pub fn receipts(&self) -> Result<Vec<Receipt>> {
        self.receipts.list_receipts()
    }

    /// Saved receipts summarized for the records list.
    pub fn list_receipts(&self) -> Result<ListReceiptsResponse> {
        let receipts = self
            .receipts
            .list_receipts()?
            .iter()
            .map(|r| ReceiptSummary {
                id: r.id,
                student_name: r.data.name.clone(),
                created_at: r.created_at.clone(),
                total: r.data.total(),
            })
            .collect();
        Ok(ListReceiptsResponse { receipts })
    }

    /// Reload a saved receipt's snapshot as the current slip.
    ///
    /// The stored document is shown verbatim; it is never re-rendered, so
    /// receipts keep the look they had when saved.
    pub fn view_receipt(&self, receipt_id: &str) -> Result<ViewReceiptResponse> {
        let receipt = self
            .receipts
            .list_receipts()?
            .into_iter()
            .find(|r| r.id.to_string() == receipt_id)
            .ok_or_else(|| FeeSlipError::RecordNotFound(receipt_id.to_string()))?;

        self.session.store_current_slip(&CurrentSlip {
            data: receipt.data.clone(),
            document: receipt.rendered_document.clone(),
        })?;

        Ok(ViewReceiptResponse {
            id: receipt.id,
            student_name: receipt.data.name,
            created_at: receipt.created_at,
            document: receipt.rendered_document,
        })
    }

    /// Delete a saved receipt by id; unknown ids are a no-op.
    pub fn delete_receipt(&self, receipt_id: &str) -> Result<DeleteReceiptResponse> {
        let deleted = self.receipts.delete_receipt(receipt_id)?;
        Ok(DeleteReceiptResponse { deleted })
    }

    /// Remove every saved receipt.
    pub fn clear_receipts(&self) -> Result<ClearReceiptsResponse> {
        let removed_count = self.receipts.list_receipts()?.len();
        self.receipts.clear_receipts()?;
        Ok(ClearReceiptsResponse { removed_count })
    }
}
