//! Shared constants for booklet imposition

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

/// Default rasterization resolution
pub const DEFAULT_DPI: u16 = 600;

/// Lowest DPI accepted by option validation
pub const MIN_DPI: u16 = 72;

/// Highest DPI accepted by option validation
pub const MAX_DPI: u16 = 1200;

/// JPEG quality used when embedding rasterized pages
pub const JPEG_QUALITY: u8 = 90;

/// Zero-padded width of intermediate sheet file names (`0001.pdf`)
pub const SHEET_NUMBER_WIDTH: usize = 4;
