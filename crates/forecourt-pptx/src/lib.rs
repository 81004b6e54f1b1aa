//! # forecourt-pptx
//!
//! PowerPoint (PPTX) generation for vehicle summary sheets.
//!
//! This crate renders one validated [`VehicleListing`] into a complete
//! single-slide PPTX package: a title block with dealer name and price
//! badge, a fixed specification table, and a contact footer. Every text
//! element is a real shape or table run, so the saved file stays fully
//! editable in PowerPoint.
//!
//! ## Example
//!
//! ```rust,ignore
//! use forecourt_listing::VehicleListing;
//! use forecourt_pptx::PptxWriter;
//!
//! let listing = VehicleListing::default();
//! let writer = PptxWriter::new(listing);
//! writer.save_to("vehicle.pptx".as_ref())?;
//! ```
//!
//! [`VehicleListing`]: forecourt_listing::VehicleListing

pub mod error;
pub mod layout;
pub mod writer;

// Re-exports
pub use error::{PptxError, Result};
pub use writer::PptxWriter;

/// PPTX-related constants
pub mod constants {
    /// Slide width in EMU (914400 EMU = 1 inch, standard 10" width)
    pub const SLIDE_WIDTH_EMU: i64 = 9_144_000;

    /// Slide height in EMU (standard 7.5" height for 4:3)
    pub const SLIDE_HEIGHT_EMU: i64 = 6_858_000;

    /// EMU per inch
    pub const EMU_PER_INCH: i64 = 914_400;

    /// PresentationML namespace
    pub const NS_PRESENTATION: &str =
        "http://schemas.openxmlformats.org/presentationml/2006/main";

    /// DrawingML namespace
    pub const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

    /// Relationships namespace
    pub const NS_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

    /// DrawingML table graphic data URI
    pub const URI_TABLE: &str = "http://schemas.openxmlformats.org/drawingml/2006/table";

    /// Slide relationship type
    pub const REL_TYPE_SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";

    /// Slide layout relationship type
    pub const REL_TYPE_SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";

    /// Slide master relationship type
    pub const REL_TYPE_SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";

    /// Theme relationship type
    pub const REL_TYPE_THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_dimensions() {
        // Standard 4:3 slide is 10" x 7.5"
        assert_eq!(constants::SLIDE_WIDTH_EMU, 10 * constants::EMU_PER_INCH);
        assert_eq!(
            constants::SLIDE_HEIGHT_EMU,
            15 * constants::EMU_PER_INCH / 2
        );
    }
}
