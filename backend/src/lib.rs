//! # Fee Slip Backend
//!
//! Local, single-user fee slip generator and records keeper for The Academy
//! of Education. The domain layer is storage-agnostic and synchronous; state
//! lives in a JSON data directory on disk. There is no server and no
//! network: the CLI in `main.rs` is the only interaction surface.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod domain;
pub mod storage;

pub use storage::json::JsonConnection;

use domain::{
    ArtifactService, ArtifactWriter, ExportService, HtmlPageWriter, PassthroughRasterizer,
    ReceiptService, SlipRasterizer,
};
use storage::json::{ReceiptRepository, SessionRepository};
use storage::traits::KeyValueStore;

/// Main backend struct that wires all services over one data directory.
pub struct Backend {
    pub receipt_service: ReceiptService,
    pub export_service: ExportService,
    pub artifact_service: ArtifactService,
}

impl Backend {
    /// Create a backend over the default data directory.
    pub fn new() -> Result<Self> {
        Self::with_data_dir(Self::default_data_dir())
    }

    /// Create a backend over a specific data directory, with the built-in
    /// print/download collaborators.
    pub fn with_data_dir<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        Self::with_collaborators(
            data_dir,
            Arc::new(PassthroughRasterizer),
            Arc::new(HtmlPageWriter),
        )
    }

    /// Create a backend with injected rasterizer/writer collaborators.
    pub fn with_collaborators<P: AsRef<Path>>(
        data_dir: P,
        rasterizer: Arc<dyn SlipRasterizer>,
        writer: Arc<dyn ArtifactWriter>,
    ) -> Result<Self> {
        let connection = JsonConnection::new(data_dir)?;
        let store: Arc<dyn KeyValueStore> = Arc::new(connection);

        let receipt_service = ReceiptService::new(
            Arc::new(ReceiptRepository::new(store.clone())),
            Arc::new(SessionRepository::new(store)),
        );

        Ok(Backend {
            receipt_service,
            export_service: ExportService::new(),
            artifact_service: ArtifactService::new(rasterizer, writer),
        })
    }

    /// Default data directory: the platform's local-data dir (temp dir as a
    /// last resort) under `academy_fee_slips`.
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("academy_fee_slips")
    }
}
