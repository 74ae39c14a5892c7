//! Station headers and the connectivity glyphs in the top-right corner.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use super::primitives::{draw_icon, draw_text};
use crate::config::LayoutParams;
use crate::icons::{API_ERROR, API_OK, WIFI, WIFI_OFF};
use crate::render::Connectivity;
use crate::styles::header_style;
use crate::text::fit_text;

/// Draw the Wi-Fi glyph at the time column and, when the API state is
/// known, the API glyph right of it.
pub fn draw_status_icons<D>(
    display: &mut D,
    params: &LayoutParams,
    status: Connectivity,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let x = params.columns.time;
    let wifi = if status.wifi { &WIFI } else { &WIFI_OFF };
    draw_icon(display, wifi, x, 0);

    if let Some(api) = status.api {
        let icon = if api { &API_OK } else { &API_ERROR };
        draw_icon(display, icon, x + (wifi.size + params.margin) as i32, 0);
    }
}

/// Draw a station name at `y`, cut to end before the icon column.
pub fn draw_station_header<D>(
    display: &mut D,
    params: &LayoutParams,
    name: &str,
    y: i32,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = header_style(params);
    let name = fit_text(name, &style, params.header_budget());
    draw_text(display, &name, params.margin as i32, y, style);
}
