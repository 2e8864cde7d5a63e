//! Page rasterization boundary
//!
//! Rasterization is an external collaborator: the pipeline only depends on
//! the [`PageRasterizer`] trait. The production implementation binds pdfium
//! at runtime; tests substitute their own implementations.

use crate::types::Result;
use image::RgbImage;
use std::path::Path;

/// Renders every page of a source document to an image, in page order.
///
/// A page that fails to render is an error for the whole run; implementations
/// must never skip pages or substitute placeholders.
pub trait PageRasterizer {
    fn rasterize(&self, document: &Path, dpi: u16) -> Result<Vec<RgbImage>>;
}

#[cfg(feature = "pdfium")]
pub use pdfium_impl::PdfiumRasterizer;

#[cfg(feature = "pdfium")]
mod pdfium_impl {
    use super::*;
    use crate::types::BookletError;
    use pdfium_render::prelude::*;

    /// Rasterizer backed by the pdfium library (bound at runtime).
    pub struct PdfiumRasterizer {
        pdfium: Pdfium,
    }

    impl PdfiumRasterizer {
        pub fn new() -> Result<Self> {
            let bindings = Pdfium::bind_to_system_library()
                .map_err(|e| BookletError::Backend(e.to_string()))?;
            Ok(Self {
                pdfium: Pdfium::new(bindings),
            })
        }
    }

    impl PageRasterizer for PdfiumRasterizer {
        fn rasterize(&self, document: &Path, dpi: u16) -> Result<Vec<RgbImage>> {
            if !document.exists() {
                return Err(BookletError::DocumentNotFound(document.to_owned()));
            }

            let doc = self
                .pdfium
                .load_pdf_from_file(document, None)
                .map_err(|e| BookletError::Render {
                    path: document.to_owned(),
                    reason: e.to_string(),
                })?;

            let mut images = Vec::with_capacity(doc.pages().len() as usize);
            for page in doc.pages().iter() {
                let width_pt = page.width().value;
                let target_width = (width_pt / 72.0 * f32::from(dpi)).round() as i32;
                let config = PdfRenderConfig::new().set_target_width(target_width);

                let bitmap =
                    page.render_with_config(&config)
                        .map_err(|e| BookletError::Render {
                            path: document.to_owned(),
                            reason: e.to_string(),
                        })?;
                images.push(bitmap.as_image().into_rgb8());
            }

            log::debug!(
                "rasterized {} pages from {} at {} dpi",
                images.len(),
                document.display(),
                dpi
            );
            Ok(images)
        }
    }
}
