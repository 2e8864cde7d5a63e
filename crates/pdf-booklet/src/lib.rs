//! Booklet imposition for duplex printing
//!
//! Rasterizes a source PDF, arranges the pages on larger physical sheets
//! according to a print-signature page map, and merges the composed sheets
//! into one booklet document ready for duplex printing, cutting and stacking.

pub mod assemble;
pub mod batch;
pub mod compose;
pub mod constants;
pub mod merge;
pub mod paper;
pub mod raster;
pub mod signature;
mod options;
mod stats;
mod types;

pub use assemble::{assemble_book, make_booklet_sync};
pub use batch::{SignatureGroup, batch_pages};
pub use compose::compose_sheet;
pub use merge::{merge_sheets, numbered_sheets_in_dir};
pub use options::BookletOptions;
pub use paper::PaperFormat;
pub use raster::PageRasterizer;
pub use signature::{SignatureMap, SignatureSize};
pub use stats::{BookletStatistics, calculate_statistics};
pub use types::*;

#[cfg(feature = "pdfium")]
pub use assemble::make_booklet;
#[cfg(feature = "pdfium")]
pub use raster::PdfiumRasterizer;
