//! Export service for the fee slip backend.
//!
//! Flattens the saved receipt collection into CSV, either as in-memory
//! content for the caller to offer as a download, or written straight to a
//! directory on disk (custom path, or Documents/home as fallback).

use anyhow::Result;
use chrono::Local;
use log::{error, info};
use std::fs;

use shared::{ExportDataResponse, ExportToPathRequest, ExportToPathResponse};

use crate::domain::error::FeeSlipError;
use crate::domain::receipt_service::ReceiptService;
use crate::domain::render_service::format_amount;

/// Column order of the records export.
const CSV_HEADERS: [&str; 9] = [
    "Name", "Roll", "Class", "Tuition", "Additional", "Facilities", "Notes", "Total", "CreatedAt",
];

/// Export service that turns saved receipts into CSV files.
#[derive(Clone, Default)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Export all saved receipts as CSV content.
    ///
    /// Fails with [`FeeSlipError::NothingToExport`] when no receipts are
    /// saved. Data fields are always quoted with embedded quotes doubled;
    /// the header row stays unquoted, matching the original export format.
    /// Each record's total is recomputed from its stored entry, and the
    /// facilities column flattens to `name(cost)` joined by `"; "`.
    pub fn export_receipts_csv(&self, receipt_service: &ReceiptService) -> Result<ExportDataResponse> {
        let records = receipt_service.receipts()?;
        if records.is_empty() {
            return Err(FeeSlipError::NothingToExport.into());
        }

        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Always)
            .from_writer(Vec::new());

        for record in &records {
            let data = &record.data;
            let facilities = data
                .facilities
                .iter()
                .map(|f| format!("{}({})", f.name, format_amount(f.cost)))
                .collect::<Vec<_>>()
                .join("; ");

            writer.write_record(&[
                data.name.clone(),
                data.roll.clone(),
                data.cls.clone(),
                format_amount(data.tuition),
                format_amount(data.additional),
                facilities,
                data.notes.clone(),
                format_amount(data.total()),
                record.created_at.clone(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to finalize CSV writer: {}", e))?;
        let rows = String::from_utf8(bytes)?;
        let csv_content = format!("{}\n{}", CSV_HEADERS.join(","), rows);

        let filename = format!("academy_records_{}.csv", Local::now().format("%Y-%m-%d"));
        info!(
            "Exported {} receipts as CSV ({} bytes) with filename: {}",
            records.len(),
            csv_content.len(),
            filename
        );

        Ok(ExportDataResponse {
            csv_content,
            filename,
            record_count: records.len(),
        })
    }

    /// Export the receipts CSV directly to a directory on disk.
    ///
    /// An empty collection still fails with `NothingToExport`; filesystem
    /// problems are reported in the response rather than as errors.
    pub fn export_to_path(
        &self,
        request: ExportToPathRequest,
        receipt_service: &ReceiptService,
    ) -> Result<ExportToPathResponse> {
        let export = self.export_receipts_csv(receipt_service)?;

        let export_dir = match request.custom_path {
            Some(ref custom) if !custom.trim().is_empty() => {
                std::path::PathBuf::from(custom.trim())
            }
            _ => match dirs::document_dir().or_else(dirs::home_dir) {
                Some(dir) => dir,
                None => {
                    error!("Could not determine a default export directory");
                    return Ok(ExportToPathResponse {
                        success: false,
                        message: "Failed to determine export directory".to_string(),
                        file_path: String::new(),
                        record_count: 0,
                    });
                }
            },
        };

        let file_path = export_dir.join(&export.filename);
        if let Err(e) = fs::create_dir_all(&export_dir) {
            error!("Failed to create export directory {:?}: {}", export_dir, e);
            return Ok(ExportToPathResponse {
                success: false,
                message: format!("Failed to create export directory: {}", e),
                file_path: export_dir.to_string_lossy().to_string(),
                record_count: 0,
            });
        }

        match fs::write(&file_path, &export.csv_content) {
            Ok(()) => {
                let file_path = file_path.to_string_lossy().to_string();
                info!(
                    "Exported {} receipts to: {}",
                    export.record_count, file_path
                );
                Ok(ExportToPathResponse {
                    success: true,
                    message: format!("File exported successfully to: {}", file_path),
                    file_path,
                    record_count: export.record_count,
                })
            }
            Err(e) => {
                error!("Failed to write export file to {:?}: {}", file_path, e);
                Ok(ExportToPathResponse {
                    success: false,
                    message: format!("Failed to write export file: {}", e),
                    file_path: file_path.to_string_lossy().to_string(),
                    record_count: 0,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::test_utils::TestHelper;
    use shared::GenerateSlipRequest;
    use std::sync::Arc;

    fn service_with_store() -> (ReceiptService, TestHelper) {
        let helper = TestHelper::new().unwrap();
        let service = ReceiptService::new(
            Arc::new(helper.receipt_repo.clone()),
            Arc::new(helper.session_repo.clone()),
        );
        (service, helper)
    }

    fn slip_request(name: &str, facilities: Vec<&str>) -> GenerateSlipRequest {
        GenerateSlipRequest {
            name: name.to_string(),
            roll: "42".to_string(),
            cls: "8-B".to_string(),
            tuition: Some("5000".to_string()),
            additional: Some("200".to_string()),
            notes: "Paid in cash".to_string(),
            facilities: facilities.into_iter().map(String::from).collect(),
        }
    }

    fn save_slip(service: &ReceiptService, request: GenerateSlipRequest) {
        service.generate_slip(request).unwrap();
        service.save_current_slip().unwrap();
    }

    #[test]
    fn export_with_no_records_is_blocked() {
        let (service, _helper) = service_with_store();
        let err = ExportService::new()
            .export_receipts_csv(&service)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<FeeSlipError>(),
            Some(&FeeSlipError::NothingToExport)
        );
    }

    #[test]
    fn export_quotes_every_data_field() {
        let (service, _helper) = service_with_store();
        save_slip(&service, slip_request("Ali Khan", vec!["Transport"]));

        let export = ExportService::new().export_receipts_csv(&service).unwrap();
        let mut lines = export.csv_content.lines();

        assert_eq!(
            lines.next().unwrap(),
            "Name,Roll,Class,Tuition,Additional,Facilities,Notes,Total,CreatedAt"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with(
            "\"Ali Khan\",\"42\",\"8-B\",\"5000\",\"200\",\"Transport(800)\",\"Paid in cash\",\"6000\","
        ));
        assert_eq!(export.record_count, 1);
        assert!(export.filename.starts_with("academy_records_"));
        assert!(export.filename.ends_with(".csv"));
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let (service, _helper) = service_with_store();
        save_slip(&service, slip_request(r#"Jane "J" Doe"#, vec![]));

        let export = ExportService::new().export_receipts_csv(&service).unwrap();
        assert!(export.csv_content.contains(r#""Jane ""J"" Doe""#));
    }

    #[test]
    fn facilities_column_joins_with_semicolons() {
        let (service, _helper) = service_with_store();
        save_slip(&service, slip_request("Ali Khan", vec!["Transport", "Library"]));

        let export = ExportService::new().export_receipts_csv(&service).unwrap();
        assert!(export.csv_content.contains("\"Transport(800); Library(300)\""));
    }

    #[test]
    fn export_to_custom_path_writes_the_file() {
        let (service, _helper) = service_with_store();
        save_slip(&service, slip_request("Ali Khan", vec![]));

        let out_dir = tempfile::TempDir::new().unwrap();
        let response = ExportService::new()
            .export_to_path(
                shared::ExportToPathRequest {
                    custom_path: Some(out_dir.path().to_string_lossy().to_string()),
                },
                &service,
            )
            .unwrap();

        assert!(response.success);
        assert_eq!(response.record_count, 1);
        let written = fs::read_to_string(&response.file_path).unwrap();
        assert!(written.contains("\"Ali Khan\""));
    }
}
