//! Print and download paths for the current slip.
//!
//! The original delegated these to two external collaborators: a DOM-to-
//! raster converter and a paginated-document writer. Those stay external
//! here too; this module owns their contracts ([`SlipRasterizer`],
//! [`ArtifactWriter`]) and the orchestration around them. Collaborator
//! failures propagate as errors for the interaction layer to report.

use anyhow::Result;
use chrono::Utc;
use log::info;
use std::sync::Arc;

use crate::domain::models::short_receipt_id;

/// Pixel data handed from the rasterizer to the artifact writer.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Converts rendered slip markup into pixel data at a given scale factor.
pub trait SlipRasterizer: Send + Sync {
    fn rasterize(&self, document: &str, scale: u32) -> Result<RasterImage>;
}

/// Composes pixel data into a savable single-page document artifact.
pub trait ArtifactWriter: Send + Sync {
    fn compose(&self, image: &RasterImage) -> Result<Vec<u8>>;

    /// File extension of the produced artifact (no dot)
    fn file_extension(&self) -> &'static str;
}

/// A downloadable artifact: filename plus opaque bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Service producing printable pages and downloadable slip artifacts.
#[derive(Clone)]
pub struct ArtifactService {
    rasterizer: Arc<dyn SlipRasterizer>,
    writer: Arc<dyn ArtifactWriter>,
}

impl ArtifactService {
    pub fn new(rasterizer: Arc<dyn SlipRasterizer>, writer: Arc<dyn ArtifactWriter>) -> Self {
        Self { rasterizer, writer }
    }

    /// Wrap the slip markup verbatim in a standalone printable page.
    /// The markup is already escaped at render time.
    pub fn printable_page(&self, document: &str) -> String {
        format!(
            "<html><head><title>Print Slip</title>\
             <style>body{{font-family:Inter,Arial;padding:20px}}</style>\
             </head><body>{}</body></html>",
            document
        )
    }

    /// Produce the downloadable slip artifact: rasterize the document at 2x
    /// scale, compose it, and name the file after the current instant.
    pub fn download_slip(&self, document: &str) -> Result<ArtifactFile> {
        let image = self.rasterizer.rasterize(document, 2)?;
        let bytes = self.writer.compose(&image)?;
        let filename = format!(
            "fee_slip_{}.{}",
            short_receipt_id(Utc::now().timestamp_millis()),
            self.writer.file_extension()
        );
        info!("Composed slip artifact {} ({} bytes)", filename, bytes.len());
        Ok(ArtifactFile { filename, bytes })
    }
}

/// Built-in stand-in rasterizer: carries the markup bytes through unchanged
/// as a single-row image. No raster engine ships with this crate; a real one
/// plugs in through [`SlipRasterizer`].
#[derive(Clone, Default)]
pub struct PassthroughRasterizer;

impl SlipRasterizer for PassthroughRasterizer {
    fn rasterize(&self, document: &str, _scale: u32) -> Result<RasterImage> {
        let pixels = document.as_bytes().to_vec();
        Ok(RasterImage {
            width: pixels.len() as u32,
            height: 1,
            pixels,
        })
    }
}

/// Built-in stand-in writer: emits the carried markup as a standalone HTML
/// page, so the downloaded artifact stays openable and printable.
#[derive(Clone, Default)]
pub struct HtmlPageWriter;

impl ArtifactWriter for HtmlPageWriter {
    fn compose(&self, image: &RasterImage) -> Result<Vec<u8>> {
        let document = std::str::from_utf8(&image.pixels)?;
        let page = format!(
            "<html><head><title>Fee Slip</title>\
             <style>body{{font-family:Inter,Arial;padding:20px}}</style>\
             </head><body>{}</body></html>",
            document
        );
        Ok(page.into_bytes())
    }

    fn file_extension(&self) -> &'static str {
        "html"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn service() -> ArtifactService {
        ArtifactService::new(
            Arc::new(PassthroughRasterizer),
            Arc::new(HtmlPageWriter),
        )
    }

    #[test]
    fn printable_page_embeds_markup_verbatim() {
        let page = service().printable_page("<div class=\"slip-top\">slip</div>");
        assert!(page.starts_with("<html>"));
        assert!(page.contains("<body><div class=\"slip-top\">slip</div></body>"));
    }

    #[test]
    fn download_names_artifact_with_six_digit_id() {
        let artifact = service().download_slip("<div>slip</div>").unwrap();

        assert!(artifact.filename.starts_with("fee_slip_"));
        assert!(artifact.filename.ends_with(".html"));
        let stem = artifact
            .filename
            .trim_start_matches("fee_slip_")
            .trim_end_matches(".html");
        assert_eq!(stem.len(), 6);
        assert!(stem.chars().all(|c| c.is_ascii_digit()));
        assert!(String::from_utf8(artifact.bytes)
            .unwrap()
            .contains("<div>slip</div>"));
    }

    #[test]
    fn collaborator_failure_propagates() {
        struct FailingRasterizer;
        impl SlipRasterizer for FailingRasterizer {
            fn rasterize(&self, _document: &str, _scale: u32) -> Result<RasterImage> {
                Err(anyhow!("canvas unavailable"))
            }
        }

        let service = ArtifactService::new(Arc::new(FailingRasterizer), Arc::new(HtmlPageWriter));
        let err = service.download_slip("<div></div>").unwrap_err();
        assert!(err.to_string().contains("canvas unavailable"));
    }

    #[test]
    fn rasterizer_receives_double_scale() {
        struct ScaleProbe(std::sync::Mutex<u32>);
        impl SlipRasterizer for ScaleProbe {
            fn rasterize(&self, document: &str, scale: u32) -> Result<RasterImage> {
                *self.0.lock().unwrap() = scale;
                PassthroughRasterizer.rasterize(document, scale)
            }
        }

        let probe = Arc::new(ScaleProbe(std::sync::Mutex::new(0)));
        let service = ArtifactService::new(probe.clone(), Arc::new(HtmlPageWriter));
        service.download_slip("<div></div>").unwrap();
        assert_eq!(*probe.0.lock().unwrap(), 2);
    }
}
