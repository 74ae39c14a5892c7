//! 1-bpp frame buffer handed to the e-paper driver.
//!
//! Pixels are packed MSB-first, one row after another. A set bit is paper
//! (white), a cleared bit is ink (black), which is the order the panel
//! controller expects, so a blank canvas is all `0xFF`.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::config::layout::{CANVAS_BUFFER_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Frame buffer of `SIZE` bytes covering `width` x `height` pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer<const SIZE: usize> {
    data: [u8; SIZE],
    width: u32,
    height: u32,
}

/// Canvas of the 3.7" panel in landscape orientation.
pub type EpaperCanvas = FrameBuffer<CANVAS_BUFFER_SIZE>;

impl EpaperCanvas {
    /// Blank canvas for the shipped panel.
    pub const fn epaper() -> Self { Self::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl<const SIZE: usize> FrameBuffer<SIZE> {
    /// Blank (all paper) buffer.
    ///
    /// # Panics
    ///
    /// When `width` is not byte aligned or the dimensions don't match `SIZE`.
    pub const fn new(
        width: u32,
        height: u32,
    ) -> Self {
        assert!(width % 8 == 0, "width must be a multiple of 8");
        assert!((width / 8 * height) as usize == SIZE, "buffer size mismatch");
        Self {
            data: [0xFF; SIZE],
            width,
            height,
        }
    }

    /// Raw bytes for the display driver.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; SIZE] { &self.data }

    /// Color at `point`, or `None` outside the buffer.
    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<BinaryColor> {
        let (byte, mask) = self.locate(point)?;
        Some(if self.data[byte] & mask == 0 { BinaryColor::On } else { BinaryColor::Off })
    }

    /// Every pixel in row-major order, for copying onto another target.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel<BinaryColor>> + '_ {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| {
            (0..width).filter_map(move |x| {
                let point = Point::new(x, y);
                self.pixel(point).map(|color| Pixel(point, color))
            })
        })
    }

    /// Number of ink pixels.
    pub fn ink_count(&self) -> u32 { self.data.iter().map(|byte| byte.count_zeros()).sum() }

    fn locate(
        &self,
        point: Point,
    ) -> Option<(usize, u8)> {
        if point.x < 0 || point.y < 0 || point.x >= self.width as i32 || point.y >= self.height as i32 {
            return None;
        }
        let index = point.y as u32 * self.width + point.x as u32;
        Some(((index / 8) as usize, 0x80 >> (index % 8)))
    }
}

impl<const SIZE: usize> DrawTarget for FrameBuffer<SIZE> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let Some((byte, mask)) = self.locate(point) else {
                continue;
            };
            match color {
                BinaryColor::On => self.data[byte] &= !mask,
                BinaryColor::Off => self.data[byte] |= mask,
            }
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let byte = match color {
            BinaryColor::Off => 0xFF,
            BinaryColor::On => 0x00,
        };
        self.data.fill(byte);
        Ok(())
    }
}

impl<const SIZE: usize> OriginDimensions for FrameBuffer<SIZE> {
    fn size(&self) -> Size { Size::new(self.width, self.height) }
}

// =============================================================================
// Unit Tests
// =============================================================================
