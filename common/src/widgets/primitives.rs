//! Low-level drawing primitives shared across widgets.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::icons::Icon;
use crate::styles::TOP_LEFT;

/// Draw `text` with its top-left corner at (`x`, `y`).
pub fn draw_text<D>(
    display: &mut D,
    text: &str,
    x: i32,
    y: i32,
    style: MonoTextStyle<'_, BinaryColor>,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_text_style(text, Point::new(x, y), style, TOP_LEFT)
        .draw(display)
        .ok();
}

/// Blit `icon` with its top-left corner at (`x`, `y`).
#[inline]
pub fn draw_icon<D>(
    display: &mut D,
    icon: &Icon,
    x: i32,
    y: i32,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    icon.draw(display, Point::new(x, y));
}
