//! Book assembly
//!
//! Drives the batcher and the sheet composer across the whole logical page
//! sequence, then hands the produced sheet files to the merger. The sheet
//! counter starts at 1 and advances by 2 per signature group: one number for
//! the front, the next for the back.

use crate::batch::batch_pages;
use crate::compose::{blank_filler, compose_sheet};
use crate::constants::SHEET_NUMBER_WIDTH;
use crate::merge::merge_sheets;
use crate::options::BookletOptions;
use crate::raster::PageRasterizer;
use crate::signature::SignatureMap;
use crate::stats::{BookletStatistics, calculate_statistics};
use crate::types::{BookletError, Orientation, Result, SheetSide};
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Compose and write every sheet side, in continuous page order.
///
/// Returns the produced sheet files in merge order. Any composition failure
/// aborts the run; files already written are left behind for diagnosis.
pub fn assemble_book(
    pages: &[RgbImage],
    map: &SignatureMap,
    orientation: Orientation,
    work_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let groups = batch_pages(pages.len(), map.pages_per_sheet())?;

    // Shared filler, sized like the first real page. Composition never
    // mutates it.
    let blank = blank_filler(&pages[0]);

    let mut sheet_files = Vec::with_capacity(groups.len() * 2);
    let mut counter = 1usize;

    for group in &groups {
        for (offset, side) in [(0, SheetSide::Front), (1, SheetSide::Back)] {
            let mut doc = compose_sheet(pages, &blank, group, map, side, orientation)?;
            let path = work_dir.join(format!(
                "{:0width$}.pdf",
                counter + offset,
                width = SHEET_NUMBER_WIDTH
            ));
            doc.save(&path)?;
            sheet_files.push(path);
        }

        log::debug!(
            "composed signature at page {} ({} real, {} blank)",
            group.start + 1,
            group.real_pages,
            group.blank_pages()
        );
        counter += 2;
    }

    Ok(sheet_files)
}

/// Run the whole pipeline: rasterize, assemble, merge.
pub fn make_booklet_sync(
    rasterizer: &dyn PageRasterizer,
    options: &BookletOptions,
) -> Result<BookletStatistics> {
    options.validate()?;

    let pages = rasterizer.rasterize(&options.input, options.dpi)?;
    if pages.is_empty() {
        return Err(BookletError::EmptyDocument);
    }
    log::info!("imposing {} pages from {}", pages.len(), options.input.display());

    let map = SignatureMap::new(options.signature, options.leaf_format, options.sheet_format);
    let stats = calculate_statistics(pages.len(), options.signature)?;

    // Intermediate sheets live in the caller's work dir, or a temp dir
    // released at the end of the run.
    let _temp_guard;
    let work_dir: PathBuf = match &options.work_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            dir.clone()
        }
        None => {
            let temp = tempfile::tempdir()?;
            let path = temp.path().to_owned();
            _temp_guard = temp;
            path
        }
    };

    let sheets = assemble_book(&pages, &map, options.orientation, &work_dir)?;
    merge_sheets(&sheets, &options.output)?;

    if !options.keep_sheets {
        if let Some(dir) = &options.work_dir {
            for sheet in &sheets {
                std::fs::remove_file(sheet)?;
            }
            let _ = std::fs::remove_dir(dir);
        }
    }

    Ok(stats)
}

/// Async entry point; rasterizes with the pdfium backend on a blocking task.
#[cfg(feature = "pdfium")]
pub async fn make_booklet(options: BookletOptions) -> Result<BookletStatistics> {
    tokio::task::spawn_blocking(move || {
        let rasterizer = crate::raster::PdfiumRasterizer::new()?;
        make_booklet_sync(&rasterizer, &options)
    })
    .await?
}
