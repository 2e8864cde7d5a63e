//! Signature batching
//!
//! Slices the logical page sequence into fixed-size signature groups. The
//! final group may hold fewer real pages; its remaining slots resolve to the
//! blank filler. The page sequence itself is never reordered — groups are
//! index ranges resolved through the signature map at composition time.

use crate::types::{BookletError, Result};

/// One signature's worth of logical pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureGroup {
    /// Index of the first logical page in this group (0-based)
    pub start: usize,
    /// Number of real pages in this group
    pub real_pages: usize,
    /// Group length including blank padding (= pages per sheet)
    pub capacity: usize,
}

impl SignatureGroup {
    /// Resolve a 1-based logical index within the group to an absolute page
    /// index. Returns `None` for slots that fall into blank padding.
    pub fn source_index(&self, logical: usize) -> Option<usize> {
        debug_assert!(logical >= 1 && logical <= self.capacity);
        if logical <= self.real_pages {
            Some(self.start + logical - 1)
        } else {
            None
        }
    }

    /// Number of blank filler pages in this group
    pub fn blank_pages(&self) -> usize {
        self.capacity - self.real_pages
    }
}

/// Partition `total_pages` logical pages into groups of `pages_per_sheet`.
///
/// Produces `ceil(total_pages / pages_per_sheet)` groups. All groups except
/// possibly the last are full; when the total divides evenly no trailing
/// empty group is emitted.
pub fn batch_pages(total_pages: usize, pages_per_sheet: usize) -> Result<Vec<SignatureGroup>> {
    if total_pages == 0 {
        return Err(BookletError::EmptyDocument);
    }
    if pages_per_sheet == 0 {
        return Err(BookletError::Config(
            "pages per sheet must be non-zero".to_string(),
        ));
    }

    let full_groups = total_pages / pages_per_sheet;
    let remainder = total_pages % pages_per_sheet;

    let mut groups = Vec::with_capacity(full_groups + usize::from(remainder > 0));
    for g in 0..full_groups {
        groups.push(SignatureGroup {
            start: g * pages_per_sheet,
            real_pages: pages_per_sheet,
            capacity: pages_per_sheet,
        });
    }
    if remainder > 0 {
        groups.push(SignatureGroup {
            start: full_groups * pages_per_sheet,
            real_pages: remainder,
            capacity: pages_per_sheet,
        });
    }

    Ok(groups)
}
