//! Static text styles for the departure board.
//!
//! The text alignment is `const`. Font styles come from the active layout
//! through [`header_style`] and [`body_style`]; both are `const fn`, so
//! only the font reference varies between layouts.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::BinaryColor,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};

use crate::colors::INK;
use crate::config::layout::LayoutParams;

/// Text positioned by its top-left corner, matching the layout cursor.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Text centered on its anchor point, used by the splash screen.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Station names.
#[inline]
pub const fn header_style(params: &LayoutParams) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyle::new(params.header_font, INK)
}

/// Departure rows.
#[inline]
pub const fn body_style(params: &LayoutParams) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyle::new(params.body_font, INK)
}
