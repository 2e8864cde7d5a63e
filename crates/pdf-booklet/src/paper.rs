//! Physical paper format registry
//!
//! Static width/height data used as input to the layout geometry.

use crate::types::Orientation;

/// Named physical sheet formats plus custom dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperFormat {
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
    A7,
    A8,
    A9,
    A10,
    UsInvoice,
    UsExecutive,
    UsLegal,
    AnsiA,
    AnsiB,
    AnsiC,
    AnsiD,
    AnsiE,
    AnsiF,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperFormat {
    /// Base dimensions in mm (always portrait: width < height for named formats)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperFormat::A0 => (841.0, 1189.0),
            PaperFormat::A1 => (594.0, 841.0),
            PaperFormat::A2 => (420.0, 594.0),
            PaperFormat::A3 => (297.0, 420.0),
            PaperFormat::A4 => (210.0, 297.0),
            PaperFormat::A5 => (148.0, 210.0),
            PaperFormat::A6 => (105.0, 148.0),
            PaperFormat::A7 => (74.0, 105.0),
            PaperFormat::A8 => (52.0, 74.0),
            PaperFormat::A9 => (37.0, 52.0),
            PaperFormat::A10 => (26.0, 37.0),
            PaperFormat::UsInvoice => (140.0, 216.0),
            PaperFormat::UsExecutive => (184.0, 267.0),
            PaperFormat::UsLegal => (216.0, 356.0),
            PaperFormat::AnsiA => (216.0, 279.0),
            PaperFormat::AnsiB => (279.0, 432.0),
            PaperFormat::AnsiC => (432.0, 559.0),
            PaperFormat::AnsiD => (559.0, 864.0),
            PaperFormat::AnsiE => (864.0, 1118.0),
            PaperFormat::AnsiF => (711.0, 1016.0),
            PaperFormat::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_formats_are_portrait() {
        let formats = [
            PaperFormat::A0,
            PaperFormat::A4,
            PaperFormat::A6,
            PaperFormat::A10,
            PaperFormat::UsInvoice,
            PaperFormat::UsLegal,
            PaperFormat::AnsiA,
            PaperFormat::AnsiF,
        ];
        for format in formats {
            let (w, h) = format.dimensions_mm();
            assert!(w < h, "expected portrait dimensions for {:?}", format);
        }
    }

    #[test]
    fn landscape_swaps_dimensions() {
        let (w, h) = PaperFormat::A4.dimensions_with_orientation(Orientation::Landscape);
        assert_eq!((w, h), (297.0, 210.0));
    }

    #[test]
    fn a6_halves_a5_width() {
        // Folding an A5 leaf in half along the long edge gives A6
        let (a5_w, _) = PaperFormat::A5.dimensions_mm();
        let (_, a6_h) = PaperFormat::A6.dimensions_mm();
        assert_eq!(a5_w, a6_h);
    }
}
