//! 1-bpp glyphs for urgency and connectivity indicators.
//!
//! Bitmaps are packed MSB-first with each row padded to a whole byte, the
//! layout [`ImageRaw`] expects. A set bit is ink.

use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// A square glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Icon {
    pub size: u32,
    data: &'static [u8],
}

impl Icon {
    const fn new(
        size: u32,
        data: &'static [u8],
    ) -> Self {
        assert!(size % 8 == 0 && data.len() == (size / 8 * size) as usize);
        Self { size, data }
    }

    #[inline]
    pub const fn data(&self) -> &'static [u8] { self.data }

    /// Draw with the top-left corner at `top_left`. Unset bits paint paper.
    pub fn draw<D>(
        &self,
        display: &mut D,
        top_left: Point,
    ) where
        D: DrawTarget<Color = BinaryColor>,
    {
        let raw = ImageRaw::<BinaryColor>::new(self.data, self.size);
        Image::new(&raw, top_left).draw(display).ok();
    }
}

/// Departure is close: hurry.
pub const HURRY: Icon = Icon::new(24, &HURRY_DATA);

/// Departure is about time to leave.
pub const LEAVE_NOW: Icon = Icon::new(24, &LEAVE_NOW_DATA);

pub const WIFI: Icon = Icon::new(32, &WIFI_DATA);
pub const WIFI_OFF: Icon = Icon::new(32, &WIFI_OFF_DATA);

/// Last feed request succeeded.
pub const API_OK: Icon = Icon::new(32, &API_OK_DATA);

/// Last feed request failed.
pub const API_ERROR: Icon = Icon::new(32, &API_ERROR_DATA);

// =============================================================================
// Bitmaps
// =============================================================================

const HURRY_DATA: [u8; 72] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x38, 0x1C, 0x00,
    0x3C, 0x1E, 0x00, 0x3E, 0x1F, 0x00,
    0x1F, 0x0F, 0x80, 0x0F, 0x87, 0xC0,
    0x07, 0xC3, 0xE0, 0x03, 0xE1, 0xF0,
    0x01, 0xF0, 0xF8, 0x00, 0xF0, 0x78,
    0x00, 0xF0, 0x78, 0x01, 0xF0, 0xF8,
    0x03, 0xE1, 0xF0, 0x07, 0xC3, 0xE0,
    0x0F, 0x87, 0xC0, 0x1F, 0x0F, 0x80,
    0x3E, 0x1F, 0x00, 0x3C, 0x1E, 0x00,
    0x38, 0x1C, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

const LEAVE_NOW_DATA: [u8; 72] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x1C, 0x00, 0x00, 0x1E, 0x00,
    0x00, 0x1F, 0x00, 0x00, 0x0F, 0x80,
    0x00, 0x07, 0xC0, 0x00, 0x03, 0xE0,
    0x1F, 0xFF, 0xF0, 0x3F, 0xFF, 0xF0,
    0x3F, 0xFF, 0xF0, 0x1F, 0xFF, 0xF0,
    0x00, 0x03, 0xE0, 0x00, 0x07, 0xC0,
    0x00, 0x0F, 0x80, 0x00, 0x1F, 0x00,
    0x00, 0x1E, 0x00, 0x00, 0x1C, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

const WIFI_DATA: [u8; 128] = [
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x1F, 0xF8, 0x00,
    0x00, 0xFF, 0xFF, 0x00,
    0x07, 0xFF, 0xFF, 0xE0,
    0x0F, 0xFF, 0xFF, 0xF0,
    0x3F, 0xF0, 0x0F, 0xFC,
    0x7F, 0x00, 0x00, 0xFE,
    0xFC, 0x00, 0x00, 0x3F,
    0xF8, 0x0F, 0xF0, 0x1F,
    0xE0, 0x7F, 0xFE, 0x07,
    0x41, 0xFF, 0xFF, 0x82,
    0x03, 0xFF, 0xFF, 0xC0,
    0x0F, 0xF0, 0x0F, 0xF0,
    0x0F, 0xC0, 0x03, 0xF0,
    0x07, 0x00, 0x00, 0xE0,
    0x02, 0x07, 0xE0, 0x40,
    0x00, 0x1F, 0xF8, 0x00,
    0x00, 0x7F, 0xFE, 0x00,
    0x00, 0x7F, 0xFE, 0x00,
    0x00, 0x3C, 0x3C, 0x00,
    0x00, 0x10, 0x08, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x03, 0xC0, 0x00,
    0x00, 0x07, 0xE0, 0x00,
    0x00, 0x07, 0xE0, 0x00,
    0x00, 0x07, 0xE0, 0x00,
    0x00, 0x07, 0xE0, 0x00,
    0x00, 0x03, 0xC0, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

const WIFI_OFF_DATA: [u8; 128] = [
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x1C, 0x1F, 0xF8, 0x00,
    0x1E, 0x7F, 0xFF, 0x00,
    0x1F, 0x3F, 0xFF, 0xE0,
    0x0F, 0x9F, 0xFF, 0xF0,
    0x27, 0xC0, 0x0F, 0xFC,
    0x73, 0xE0, 0x00, 0xFE,
    0xF9, 0xF0, 0x00, 0x3F,
    0xF8, 0xF9, 0xF0, 0x1F,
    0xE0, 0x7C, 0xFE, 0x07,
    0x41, 0x3E, 0x7F, 0x82,
    0x03, 0x9F, 0x3F, 0xC0,
    0x0F, 0xCF, 0x8F, 0xF0,
    0x0F, 0xC7, 0xC3, 0xF0,
    0x07, 0x03, 0xE0, 0xE0,
    0x02, 0x01, 0xF0, 0x40,
    0x00, 0x1C, 0xF8, 0x00,
    0x00, 0x7E, 0x7C, 0x00,
    0x00, 0x7F, 0x3E, 0x00,
    0x00, 0x3C, 0x1F, 0x00,
    0x00, 0x10, 0x0F, 0x80,
    0x00, 0x00, 0x07, 0xC0,
    0x00, 0x03, 0xC3, 0xE0,
    0x00, 0x07, 0xE1, 0xF0,
    0x00, 0x07, 0xE0, 0xF8,
    0x00, 0x07, 0xE0, 0x78,
    0x00, 0x07, 0xE0, 0x38,
    0x00, 0x03, 0xC0, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

const API_OK_DATA: [u8; 128] = [
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x1F, 0xF8, 0x00,
    0x00, 0xFF, 0xFF, 0x00,
    0x01, 0xF0, 0x0F, 0x80,
    0x03, 0xC0, 0x03, 0xC0,
    0x07, 0x00, 0x00, 0xE0,
    0x0E, 0x00, 0x00, 0x70,
    0x1C, 0x00, 0x00, 0x38,
    0x38, 0x00, 0x00, 0x1C,
    0x38, 0x00, 0x00, 0x1C,
    0x30, 0x00, 0x07, 0x0C,
    0x70, 0x00, 0x07, 0x0E,
    0x60, 0x00, 0x0F, 0x06,
    0x60, 0x00, 0x1E, 0x06,
    0x60, 0x00, 0x3C, 0x06,
    0x60, 0xE0, 0x78, 0x06,
    0x60, 0xF0, 0xF0, 0x06,
    0x60, 0xF9, 0xE0, 0x06,
    0x60, 0x7F, 0xC0, 0x06,
    0x60, 0x3F, 0x80, 0x06,
    0x70, 0x1F, 0x00, 0x0E,
    0x30, 0x0F, 0x00, 0x0C,
    0x38, 0x00, 0x00, 0x1C,
    0x38, 0x00, 0x00, 0x1C,
    0x1C, 0x00, 0x00, 0x38,
    0x0E, 0x00, 0x00, 0x70,
    0x07, 0x00, 0x00, 0xE0,
    0x03, 0xC0, 0x03, 0xC0,
    0x01, 0xF0, 0x0F, 0x80,
    0x00, 0xFF, 0xFF, 0x00,
    0x00, 0x1F, 0xF8, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

const API_ERROR_DATA: [u8; 128] = [
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x1F, 0xF8, 0x00,
    0x00, 0xFF, 0xFF, 0x00,
    0x01, 0xF0, 0x0F, 0x80,
    0x03, 0xC0, 0x03, 0xC0,
    0x07, 0x00, 0x00, 0xE0,
    0x0E, 0x00, 0x00, 0x70,
    0x1C, 0x00, 0x00, 0x38,
    0x38, 0x00, 0x00, 0x1C,
    0x38, 0x70, 0x0E, 0x1C,
    0x30, 0x78, 0x1E, 0x0C,
    0x70, 0x7C, 0x3E, 0x0E,
    0x60, 0x3E, 0x7C, 0x06,
    0x60, 0x1F, 0xF8, 0x06,
    0x60, 0x0F, 0xF0, 0x06,
    0x60, 0x07, 0xE0, 0x06,
    0x60, 0x07, 0xE0, 0x06,
    0x60, 0x0F, 0xF0, 0x06,
    0x60, 0x1F, 0xF8, 0x06,
    0x60, 0x3E, 0x7C, 0x06,
    0x70, 0x7C, 0x3E, 0x0E,
    0x30, 0x78, 0x1E, 0x0C,
    0x38, 0x70, 0x0E, 0x1C,
    0x38, 0x00, 0x00, 0x1C,
    0x1C, 0x00, 0x00, 0x38,
    0x0E, 0x00, 0x00, 0x70,
    0x07, 0x00, 0x00, 0xE0,
    0x03, 0xC0, 0x03, 0xC0,
    0x01, 0xF0, 0x0F, 0x80,
    0x00, 0xFF, 0xFF, 0x00,
    0x00, 0x1F, 0xF8, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::FrameBuffer;

    #[test]
    fn test_glyphs_are_distinct() {
        assert_ne!(HURRY.data(), LEAVE_NOW.data());
        assert_ne!(WIFI.data(), WIFI_OFF.data());
        assert_ne!(API_OK.data(), API_ERROR.data());
    }

    #[test]
    fn test_glyphs_have_ink_and_margin() {
        for icon in [HURRY, LEAVE_NOW, WIFI, WIFI_OFF, API_OK, API_ERROR] {
            assert!(icon.data().iter().any(|&byte| byte != 0), "blank glyph");
            assert!(icon.data().iter().any(|&byte| byte != 0xFF), "solid glyph");
        }
    }

    #[test]
    fn test_draw_blits_set_bits_as_ink() {
        let mut canvas = FrameBuffer::<128>::new(32, 32);
        API_OK.draw(&mut canvas, Point::zero());
        let ink: u32 = API_OK.data().iter().map(|byte| byte.count_ones()).sum();
        assert_eq!(canvas.ink_count(), ink);
    }

    #[test]
    fn test_draw_clips_at_canvas_edge() {
        let mut canvas = FrameBuffer::<128>::new(32, 32);
        HURRY.draw(&mut canvas, Point::new(20, 20));
        assert!(canvas.ink_count() > 0);
        assert!(canvas.ink_count() < HURRY.data().iter().map(|byte| byte.count_ones()).sum());
    }
}
