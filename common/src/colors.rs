//! Color constants for the monochrome e-paper panel.
//!
//! The panel only knows two states, so the engine draws with
//! [`BinaryColor`]. `On` is ink (black) and `Off` is paper (white), the same
//! convention the e-paper drivers in the embedded-graphics ecosystem use.
//!
//! The frame buffer stores paper as a set bit, so a freshly cleared canvas
//! is "all set" (see [`crate::canvas`]).

use embedded_graphics::pixelcolor::BinaryColor;

/// Black ink. Used for text and glyphs.
pub const INK: BinaryColor = BinaryColor::On;

/// White paper. Used for the background the canvas is cleared to.
pub const PAPER: BinaryColor = BinaryColor::Off;
