use crate::batch::batch_pages;
use crate::signature::SignatureSize;
use crate::types::Result;

/// Statistics about one imposition run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookletStatistics {
    /// Total number of rasterized source pages
    pub source_pages: usize,
    /// Number of signatures (= physical sheets)
    pub signatures: usize,
    /// Number of output sheet sides (front + back per sheet)
    pub sheet_sides: usize,
    /// Number of blank filler pages added to the final signature
    pub blank_pages_added: usize,
}

/// Calculate run statistics for a page count and signature size.
pub fn calculate_statistics(
    total_pages: usize,
    signature: SignatureSize,
) -> Result<BookletStatistics> {
    let groups = batch_pages(total_pages, signature.pages_per_sheet())?;

    let blank_pages_added = groups.iter().map(|g| g.blank_pages()).sum();
    let signatures = groups.len();

    Ok(BookletStatistics {
        source_pages: total_pages,
        signatures,
        sheet_sides: signatures * 2,
        blank_pages_added,
    })
}
