//! Domain layer: models and services for slip generation, receipt records,
//! export, and print/download artifacts.

pub mod artifact_service;
pub mod error;
pub mod export_service;
pub mod models;
pub mod receipt_service;
pub mod render_service;

pub use artifact_service::{
    ArtifactFile, ArtifactService, ArtifactWriter, HtmlPageWriter, PassthroughRasterizer,
    RasterImage, SlipRasterizer,
};
pub use error::FeeSlipError;
pub use export_service::ExportService;
pub use receipt_service::ReceiptService;
pub use render_service::RenderService;
