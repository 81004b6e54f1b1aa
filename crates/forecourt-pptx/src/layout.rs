//! Fixed slide geometry and styling for the summary sheet.
//!
//! The slide mirrors a printed showroom summary: dealer name and price
//! badge across the top, specification table in the middle, contact
//! line at the bottom. Positions, colors and font sizes are fixed
//! constants; nothing is derived from the content.

use crate::constants::EMU_PER_INCH;

/// Rectangular shape frame in EMU
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

/// Tenths of an inch to EMU
const fn tenths(v: i64) -> i64 {
    v * EMU_PER_INCH / 10
}

/// Dealer name box (top left)
pub const DEALER_NAME: Frame = Frame {
    x: tenths(5),
    y: tenths(3),
    cx: tenths(65),
    cy: tenths(8),
};

/// Price badge (top right)
pub const PRICE_BADGE: Frame = Frame {
    x: tenths(75),
    y: tenths(3),
    cx: tenths(20),
    cy: tenths(8),
};

/// Vehicle title box (beneath the dealer name)
pub const VEHICLE_TITLE: Frame = Frame {
    x: tenths(5),
    y: tenths(12),
    cx: tenths(90),
    cy: tenths(7),
};

/// Specification table frame
pub const SPEC_TABLE: Frame = Frame {
    x: tenths(5),
    y: tenths(20),
    cx: tenths(90),
    cy: tenths(65),
};

/// Contact footer box
pub const CONTACT: Frame = Frame {
    x: tenths(5),
    y: tenths(87),
    cx: tenths(90),
    cy: tenths(6),
};

/// Number of specification table rows
pub const SPEC_ROWS: usize = 10;

/// Label column width
pub const LABEL_COL_WIDTH: i64 = tenths(32);

/// Value column width
pub const VALUE_COL_WIDTH: i64 = tenths(58);

/// Cell left/right inset (0.1")
pub const CELL_SIDE_INSET: i64 = tenths(1);

/// Cell top/bottom inset (0.05")
pub const CELL_VERTICAL_INSET: i64 = tenths(1) / 2;

/// Default text color
pub const TEXT_COLOR: &str = "000000";

/// Price badge fill and outline
pub const PRICE_BADGE_FILL: &str = "F70000";

/// Price badge text color
pub const PRICE_BADGE_TEXT: &str = "FFFFFF";

/// Table label cell fill
pub const LABEL_FILL: &str = "003864";

/// Table label text color
pub const LABEL_TEXT: &str = "FFFFFF";

/// Table value cell fill
pub const VALUE_FILL: &str = "ECECEC";

/// Table body typeface
pub const TABLE_TYPEFACE: &str = "Calibri";

/// Font sizes in OOXML `sz` units (hundredths of a point)
pub const DEALER_NAME_SIZE: u32 = 3600;
pub const PRICE_SIZE: u32 = 3200;
pub const VEHICLE_TITLE_SIZE: u32 = 3600;
pub const TABLE_SIZE: u32 = 2000;
pub const CONTACT_SIZE: u32 = 1800;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SLIDE_WIDTH_EMU;

    #[test]
    fn test_frames_span_slide_width() {
        assert_eq!(SPEC_TABLE.x + SPEC_TABLE.cx, SLIDE_WIDTH_EMU - tenths(5));
        assert_eq!(PRICE_BADGE.x + PRICE_BADGE.cx, SLIDE_WIDTH_EMU - tenths(5));
    }

    #[test]
    fn test_columns_sum_to_table_width() {
        assert_eq!(LABEL_COL_WIDTH + VALUE_COL_WIDTH, SPEC_TABLE.cx);
    }

    #[test]
    fn test_insets() {
        assert_eq!(CELL_SIDE_INSET, 91_440);
        assert_eq!(CELL_VERTICAL_INSET, 45_720);
    }

    #[test]
    fn test_row_height_divides_evenly() {
        assert_eq!(SPEC_TABLE.cy % SPEC_ROWS as i64, 0);
    }
}
