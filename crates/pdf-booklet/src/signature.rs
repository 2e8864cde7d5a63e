//! Signature page maps
//!
//! A signature is the set of logical pages printed together on the two sides
//! of one physical sheet, reassembled into reading order after cutting and
//! stacking. For each supported signature size this module carries the
//! front/back page-order permutations, the per-slot 180° rotation flags, and
//! the slot placement geometry.
//!
//! The numeric tables encode a physical cutting/stacking scheme and are
//! transcribed as given constants; they are not derivable from the layout
//! grid alone and must not be altered.

use crate::paper::PaperFormat;
use crate::types::{BookletError, Result};

/// Number of sub-pages on one physical sheet (both sides combined)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignatureSize {
    S4,
    S8,
    S12,
    S16,
    S24,
    S32,
    S64,
}

impl SignatureSize {
    /// All supported sizes, smallest first
    pub const ALL: [SignatureSize; 7] = [
        SignatureSize::S4,
        SignatureSize::S8,
        SignatureSize::S12,
        SignatureSize::S16,
        SignatureSize::S24,
        SignatureSize::S32,
        SignatureSize::S64,
    ];

    /// Look up a size by its sub-page count
    pub fn from_pages(pages: usize) -> Result<Self> {
        match pages {
            4 => Ok(SignatureSize::S4),
            8 => Ok(SignatureSize::S8),
            12 => Ok(SignatureSize::S12),
            16 => Ok(SignatureSize::S16),
            24 => Ok(SignatureSize::S24),
            32 => Ok(SignatureSize::S32),
            64 => Ok(SignatureSize::S64),
            other => Err(BookletError::InvalidSignatureSize(other)),
        }
    }

    /// Sub-pages per sheet (front and back together)
    pub fn pages_per_sheet(self) -> usize {
        match self {
            SignatureSize::S4 => 4,
            SignatureSize::S8 => 8,
            SignatureSize::S12 => 12,
            SignatureSize::S16 => 16,
            SignatureSize::S24 => 24,
            SignatureSize::S32 => 32,
            SignatureSize::S64 => 64,
        }
    }

    /// Sub-pages per sheet side
    pub fn slots_per_side(self) -> usize {
        self.pages_per_sheet() / 2
    }
}

// =============================================================================
// Canonical page-order tables (1-based logical indices within one signature)
// =============================================================================

const FRONT_4: [usize; 2] = [4, 1];
const BACK_4: [usize; 2] = [2, 3];

const FRONT_8: [usize; 4] = [8, 1, 5, 4];
const BACK_8: [usize; 4] = [2, 7, 3, 6];

const FRONT_12: [usize; 6] = [12, 1, 9, 4, 8, 5];
const BACK_12: [usize; 6] = [2, 11, 3, 10, 6, 7];

const FRONT_16: [usize; 8] = [16, 1, 4, 13, 9, 8, 5, 12];
const BACK_16: [usize; 8] = [10, 7, 6, 11, 15, 2, 3, 14];

const FRONT_24: [usize; 12] = [24, 1, 12, 13, 21, 4, 9, 16, 20, 5, 8, 17];
const BACK_24: [usize; 12] = [14, 11, 2, 23, 15, 10, 3, 22, 18, 7, 6, 19];

const FRONT_32: [usize; 16] = [
    20, 13, 12, 21, 29, 4, 5, 28, 32, 1, 8, 25, 17, 16, 9, 24,
];
const BACK_32: [usize; 16] = [
    22, 11, 14, 19, 27, 6, 3, 30, 26, 7, 2, 31, 23, 10, 15, 18,
];

const FRONT_64: [usize; 32] = [
    44, 21, 28, 37, 40, 25, 24, 41, 53, 12, 5, 60, 57, 8, 9, 56, 52, 13, 4, 61, 64, 1, 16, 49, 45,
    20, 29, 36, 33, 32, 17, 48,
];
const BACK_64: [usize; 32] = [
    46, 19, 30, 35, 34, 31, 18, 47, 51, 14, 3, 62, 63, 2, 15, 50, 54, 11, 6, 59, 58, 7, 10, 55, 43,
    22, 27, 38, 39, 26, 23, 42,
];

// =============================================================================
// Rotation tables (parallel to the order tables; true = rotate 180°)
// =============================================================================

const ROT_NONE_2: [bool; 2] = [false; 2];
const ROT_8: [bool; 4] = [false, false, true, true];
const ROT_16: [bool; 8] = [false, false, false, false, true, true, true, true];
// Sizes 12/24/32/64 ship without rotation data in the reference tables;
// treated as no rotation for every slot.
const ROT_NONE_6: [bool; 6] = [false; 6];
const ROT_NONE_12: [bool; 12] = [false; 12];
const ROT_NONE_16: [bool; 16] = [false; 16];
const ROT_NONE_32: [bool; 32] = [false; 32];

// =============================================================================
// Signature map
// =============================================================================

/// Page map, rotation policy and slot geometry for one signature size.
///
/// Coordinates are in mm with the origin at the bottom-left of the sheet,
/// matching the PDF coordinate system. Both sheet sides share one coordinate
/// layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureMap {
    size: SignatureSize,
    front_order: &'static [usize],
    back_order: &'static [usize],
    front_rotation: &'static [bool],
    back_rotation: &'static [bool],
    slot_coords: Vec<(f32, f32)>,
    leaf_format: PaperFormat,
    sheet_format: PaperFormat,
}

impl SignatureMap {
    /// Build the map for a signature size, a final sub-page (leaf) format and
    /// a physical sheet format.
    pub fn new(size: SignatureSize, leaf_format: PaperFormat, sheet_format: PaperFormat) -> Self {
        let (front_order, back_order): (&'static [usize], &'static [usize]) = match size {
            SignatureSize::S4 => (&FRONT_4, &BACK_4),
            SignatureSize::S8 => (&FRONT_8, &BACK_8),
            SignatureSize::S12 => (&FRONT_12, &BACK_12),
            SignatureSize::S16 => (&FRONT_16, &BACK_16),
            SignatureSize::S24 => (&FRONT_24, &BACK_24),
            SignatureSize::S32 => (&FRONT_32, &BACK_32),
            SignatureSize::S64 => (&FRONT_64, &BACK_64),
        };
        let (front_rotation, back_rotation): (&'static [bool], &'static [bool]) = match size {
            SignatureSize::S4 => (&ROT_NONE_2, &ROT_NONE_2),
            SignatureSize::S8 => (&ROT_8, &ROT_8),
            SignatureSize::S12 => (&ROT_NONE_6, &ROT_NONE_6),
            SignatureSize::S16 => (&ROT_16, &ROT_16),
            SignatureSize::S24 => (&ROT_NONE_12, &ROT_NONE_12),
            SignatureSize::S32 => (&ROT_NONE_16, &ROT_NONE_16),
            SignatureSize::S64 => (&ROT_NONE_32, &ROT_NONE_32),
        };

        let slot_coords = calc_slot_coords(size.slots_per_side(), leaf_format);

        Self {
            size,
            front_order,
            back_order,
            front_rotation,
            back_rotation,
            slot_coords,
            leaf_format,
            sheet_format,
        }
    }

    pub fn size(&self) -> SignatureSize {
        self.size
    }

    /// Logical page index (1-based within the signature) per front slot
    pub fn front_order(&self) -> &'static [usize] {
        self.front_order
    }

    /// Logical page index (1-based within the signature) per back slot
    pub fn back_order(&self) -> &'static [usize] {
        self.back_order
    }

    pub fn front_rotation(&self) -> &'static [bool] {
        self.front_rotation
    }

    pub fn back_rotation(&self) -> &'static [bool] {
        self.back_rotation
    }

    /// Order table for one sheet side
    pub fn order(&self, side: crate::types::SheetSide) -> &'static [usize] {
        match side {
            crate::types::SheetSide::Front => self.front_order,
            crate::types::SheetSide::Back => self.back_order,
        }
    }

    /// Rotation table for one sheet side
    pub fn rotation(&self, side: crate::types::SheetSide) -> &'static [bool] {
        match side {
            crate::types::SheetSide::Front => self.front_rotation,
            crate::types::SheetSide::Back => self.back_rotation,
        }
    }

    /// Slot placement coordinates in mm, shared between front and back
    pub fn slot_coordinates(&self) -> &[(f32, f32)] {
        &self.slot_coords
    }

    pub fn leaf_format(&self) -> PaperFormat {
        self.leaf_format
    }

    pub fn sheet_format(&self) -> PaperFormat {
        self.sheet_format
    }

    pub fn slots_per_side(&self) -> usize {
        self.size.slots_per_side()
    }

    pub fn pages_per_sheet(&self) -> usize {
        self.size.pages_per_sheet()
    }
}

/// Compute slot placement coordinates for one sheet side.
///
/// Slots form a two-row grid with `slots_per_side / 2` columns, filled
/// left-to-right with the upper row first. The two-slot layout (signature
/// size 4) is the degenerate case: both slots side by side at y = 0.
fn calc_slot_coords(slots_per_side: usize, leaf_format: PaperFormat) -> Vec<(f32, f32)> {
    let (leaf_w, leaf_h) = leaf_format.dimensions_mm();
    let slots_per_row = slots_per_side / 2;

    if slots_per_row > 1 {
        let mut coords = Vec::with_capacity(slots_per_side);
        for row in (0..2).rev() {
            for col in 0..slots_per_row {
                coords.push((col as f32 * leaf_w, row as f32 * leaf_h));
            }
        }
        coords
    } else {
        vec![(0.0, 0.0), (leaf_w, 0.0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SheetSide;

    fn map_for(size: SignatureSize) -> SignatureMap {
        SignatureMap::new(size, PaperFormat::A6, PaperFormat::A4)
    }

    #[test]
    fn orders_cover_every_page_exactly_once() {
        for size in SignatureSize::ALL {
            let map = map_for(size);
            let n = size.pages_per_sheet();

            let mut seen = vec![false; n + 1];
            for &page in map.front_order().iter().chain(map.back_order()) {
                assert!(page >= 1 && page <= n, "{:?}: index {} out of range", size, page);
                assert!(!seen[page], "{:?}: duplicate index {}", size, page);
                seen[page] = true;
            }
            assert!(
                seen[1..].iter().all(|&s| s),
                "{:?}: not all pages covered",
                size
            );
        }
    }

    #[test]
    fn rotation_tables_parallel_order_tables() {
        for size in SignatureSize::ALL {
            let map = map_for(size);
            assert_eq!(map.front_rotation().len(), map.front_order().len());
            assert_eq!(map.back_rotation().len(), map.back_order().len());
        }
    }

    #[test]
    fn coordinates_one_per_slot_and_distinct() {
        for size in SignatureSize::ALL {
            let map = map_for(size);
            let coords = map.slot_coordinates();
            assert_eq!(coords.len(), size.slots_per_side());

            for (i, a) in coords.iter().enumerate() {
                for b in &coords[i + 1..] {
                    assert_ne!(a, b, "{:?}: duplicate slot coordinate {:?}", size, a);
                }
            }
        }
    }

    #[test]
    fn two_slot_layout_is_side_by_side() {
        let map = map_for(SignatureSize::S4);
        let (leaf_w, _) = PaperFormat::A6.dimensions_mm();
        assert_eq!(map.slot_coordinates(), [(0.0, 0.0), (leaf_w, 0.0)]);
    }

    #[test]
    fn grid_layout_fills_upper_row_first() {
        let map = map_for(SignatureSize::S8);
        let (leaf_w, leaf_h) = PaperFormat::A6.dimensions_mm();
        assert_eq!(
            map.slot_coordinates(),
            [(0.0, leaf_h), (leaf_w, leaf_h), (0.0, 0.0), (leaf_w, 0.0)]
        );
    }

    #[test]
    fn canonical_folio_tables() {
        let map = map_for(SignatureSize::S4);
        assert_eq!(map.front_order(), [4, 1]);
        assert_eq!(map.back_order(), [2, 3]);
        assert!(map.front_rotation().iter().all(|&r| !r));
    }

    #[test]
    fn eight_page_rotation_hits_lower_row() {
        let map = map_for(SignatureSize::S8);
        assert_eq!(map.rotation(SheetSide::Front), [false, false, true, true]);
        assert_eq!(map.rotation(SheetSide::Back), [false, false, true, true]);
    }

    #[test]
    fn unsupported_size_is_rejected() {
        match SignatureSize::from_pages(10) {
            Err(BookletError::InvalidSignatureSize(10)) => {}
            other => panic!("expected InvalidSignatureSize, got {:?}", other),
        }
    }

    #[test]
    fn from_pages_round_trips() {
        for size in SignatureSize::ALL {
            assert_eq!(
                SignatureSize::from_pages(size.pages_per_sheet()).unwrap(),
                size
            );
        }
    }
}
