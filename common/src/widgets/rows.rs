//! Departure rows: line, destination, urgency glyph and time.

use core::fmt::Write;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use heapless::String;

use super::primitives::{draw_icon, draw_text};
use crate::board::Connection;
use crate::config::LayoutParams;
use crate::icons::{HURRY, Icon, LEAVE_NOW};
use crate::styles::body_style;
use crate::text::fit_text;

/// `category + number`, e.g. `"T13"`.
pub type LineLabel = String<16>;

/// `"HH:MM (Nm)"`; fits any `i32` minute count.
pub type TimeLabel = String<24>;

pub fn line_label(connection: &Connection) -> LineLabel {
    let mut label = LineLabel::new();
    let _ = write!(label, "{}{}", connection.category(), connection.number());
    label
}

/// Time column text, e.g. `"08:15 (10m)"` or `"--:-- (0m)"`.
pub fn time_label(connection: &Connection) -> TimeLabel {
    let mut label = TimeLabel::new();
    let _ = write!(label, "{} ({}m)", connection.display_time(), connection.minutes());
    label
}

/// Glyph for the icon column. Hurry outranks leave-now.
pub const fn urgency_icon(connection: &Connection) -> Option<&'static Icon> {
    if connection.is_hurry() {
        Some(&HURRY)
    } else if connection.is_leave_now() {
        Some(&LEAVE_NOW)
    } else {
        None
    }
}

/// Draw one connection row with its top edge at `y`.
pub fn draw_connection_row<D>(
    display: &mut D,
    params: &LayoutParams,
    connection: &Connection,
    y: i32,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = body_style(params);
    let columns = params.columns;

    draw_text(display, &line_label(connection), columns.line, y, style);

    let destination = fit_text(connection.destination(), &style, params.destination_budget());
    draw_text(display, &destination, columns.destination, y, style);

    draw_text(display, &time_label(connection), columns.time, y, style);

    if let Some(icon) = urgency_icon(connection) {
        draw_icon(display, icon, columns.icon, y);
    }
}
