//! Display and layout configuration.
//!
//! The board is drawn on a 3.7" e-paper panel in landscape orientation.
//! Text is placed by its top-left corner, row by row:
//!
//! ```text
//!  x: 5    50                     300 330
//!  ┌──────────────────────────────────[wifi][api]───┐
//!  │ Zürich, Paradeplatz                            │  header
//!  │ T2   Schlieren, Geissweid      [>>] 08:15 (4m) │  row
//!  │ T13  Zürich, Bahnhofstr..           08:19 (8m) │  row
//!  │                                                │  margin
//!  │ Next station ...                               │
//!  └────────────────────────────────────────────────┘
//! ```

use embedded_graphics::mono_font::MonoFont;
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::icons::{HURRY, LEAVE_NOW};

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (3.7" e-paper, landscape).
pub const SCREEN_WIDTH: u32 = 480;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 280;

/// Bytes in a 1-bpp frame buffer covering the whole display.
pub const CANVAS_BUFFER_SIZE: usize = (SCREEN_WIDTH / 8 * SCREEN_HEIGHT) as usize;

/// Height of the tallest glyph drawn in the icon column.
pub const URGENCY_GLYPH_SIZE: u32 = if HURRY.size > LEAVE_NOW.size { HURRY.size } else { LEAVE_NOW.size };

// =============================================================================
// Layout Parameters
// =============================================================================

/// Horizontal offsets of the four row fields, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Columns {
    /// Line identifier, e.g. `T13`.
    pub line: i32,
    /// Destination, truncated to end before the icon column.
    pub destination: i32,
    /// Urgency glyph.
    pub icon: i32,
    /// Departure time; also the x of the connectivity glyphs.
    pub time: i32,
}

/// Geometry and fonts of one display.
#[derive(Clone, Copy)]
pub struct LayoutParams {
    pub width: u32,
    pub height: u32,
    /// Top margin, left margin of headers and gap between stations.
    pub margin: u32,
    pub columns: Columns,
    pub header_font: &'static MonoFont<'static>,
    pub body_font: &'static MonoFont<'static>,
}

impl LayoutParams {
    /// Vertical space taken by a station header, including its margin.
    #[inline]
    pub const fn header_height(&self) -> u32 { self.header_font.character_size.height + self.margin }

    /// Vertical space taken by one departure row: the taller of the body
    /// text and the urgency glyph.
    #[inline]
    pub const fn row_height(&self) -> u32 {
        let text = self.body_font.character_size.height;
        if text > URGENCY_GLYPH_SIZE { text } else { URGENCY_GLYPH_SIZE }
    }

    /// Pixel budget of the destination field.
    #[inline]
    pub const fn destination_budget(&self) -> u32 { (self.columns.icon - self.columns.destination) as u32 }

    /// Pixel budget of the station header.
    #[inline]
    pub const fn header_budget(&self) -> u32 { (self.columns.icon - self.margin as i32) as u32 }

    /// Check that the columns are ordered and lie on the canvas.
    pub const fn is_valid(&self) -> bool {
        let c = self.columns;
        self.width % 8 == 0
            && (self.margin as i32) < c.icon
            && 0 <= c.line
            && c.line < c.destination
            && c.destination < c.icon
            && c.icon < c.time
            && c.time < self.width as i32
    }
}

/// Pico e-paper 3.7" in landscape orientation.
pub const EPAPER_37_LANDSCAPE: LayoutParams = LayoutParams {
    width: SCREEN_WIDTH,
    height: SCREEN_HEIGHT,
    margin: 5,
    columns: Columns {
        line: 5,
        destination: 50,
        icon: 300,
        time: 330,
    },
    header_font: &PROFONT_24_POINT,
    body_font: &PROFONT_18_POINT,
};

const _: () = assert!(EPAPER_37_LANDSCAPE.is_valid());

// =============================================================================
// Unit Tests
// =============================================================================
