//! Multi-page PDF report assembly.
//!
//! One report per run: pages are appended in family order as full-bleed
//! raster figures, and the document is saved exactly once at the end. The
//! page size is derived from the figure pixel size at the configured DPI, so
//! each figure fills its page edge to edge.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::image_crate::{DynamicImage, RgbImage};
use printpdf::{
    Image, ImageTransform, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex, PdfPageIndex,
};

use crate::dataset::{AnalysisError, Result};

const MM_PER_INCH: f64 = 25.4;

/// An open report document accepting one page per quantity family.
pub struct PdfReport {
    doc: PdfDocumentReference,
    path: PathBuf,
    page_width: Mm,
    page_height: Mm,
    dpi: f64,
    /// The page created together with the document, consumed by the first
    /// append.
    pending: Option<(PdfPageIndex, PdfLayerIndex)>,
}

impl PdfReport {
    /// Open a new report sized for `width_px` x `height_px` figures at `dpi`.
    pub fn create(path: &Path, title: &str, width_px: u32, height_px: u32, dpi: f64) -> PdfReport {
        let page_width = Mm((width_px as f64 / dpi * MM_PER_INCH) as f32);
        let page_height = Mm((height_px as f64 / dpi * MM_PER_INCH) as f32);
        let (doc, page, layer) = PdfDocument::new(title, page_width, page_height, "Page 1");
        PdfReport {
            doc,
            path: path.to_path_buf(),
            page_width,
            page_height,
            dpi,
            pending: Some((page, layer)),
        }
    }

    /// Append one rendered figure as a full-bleed page.
    ///
    /// `rgb` is an RGB8 buffer of exactly `width_px * height_px * 3` bytes,
    /// as produced by the composite renderer.
    pub fn append_page(&mut self, rgb: Vec<u8>, width_px: u32, height_px: u32) -> Result<()> {
        let (page, layer) = match self.pending.take() {
            Some(first) => first,
            None => self.doc.add_page(self.page_width, self.page_height, "Page"),
        };

        let image = RgbImage::from_raw(width_px, height_px, rgb).ok_or_else(|| {
            AnalysisError::DocumentWrite("figure buffer does not match its dimensions".to_string())
        })?;
        let image = Image::from_dynamic_image(&DynamicImage::ImageRgb8(image));

        let layer = self.doc.get_page(page).get_layer(layer);
        image.add_to_layer(
            layer,
            ImageTransform {
                dpi: Some(self.dpi as f32),
                ..Default::default()
            },
        );
        Ok(())
    }

    /// Close and flush the document. Consumes the report.
    pub fn save(self) -> Result<()> {
        let file = File::create(&self.path).map_err(|e| {
            AnalysisError::DocumentWrite(format!("cannot create '{}': {e}", self.path.display()))
        })?;
        self.doc.save(&mut BufWriter::new(file)).map_err(|e| {
            AnalysisError::DocumentWrite(format!(
                "cannot finalize '{}': {e}",
                self.path.display()
            ))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mis_sized_figure_buffers() {
        let dir = tempfile::tempdir().unwrap();
        let mut report =
            PdfReport::create(&dir.path().join("report.pdf"), "test", 4, 4, 100.0);
        let err = report.append_page(vec![0u8; 5], 4, 4).unwrap_err();
        assert!(matches!(err, AnalysisError::DocumentWrite(_)));
    }

    #[test]
    fn writes_a_pdf_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        let mut report = PdfReport::create(&path, "test", 2, 2, 100.0);
        report.append_page(vec![255u8; 2 * 2 * 3], 2, 2).unwrap();
        report.save().unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
