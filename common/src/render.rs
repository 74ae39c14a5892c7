//! Layout engine: paints an assembled board onto a draw target.
//!
//! The target is cleared on every call and the board is laid out in a
//! single top-to-bottom pass over a vertical cursor:
//!
//! ```text
//! y = margin
//! for each station:
//!     header fits?  no -> stop
//!     header        y += header_height
//!     for each row:
//!         row fits? no -> stop
//!         row       y += row_height
//!     gap           y += margin (when it fits)
//! ```
//!
//! Content that does not fit is omitted, not reported as an error. Once a
//! header or a row fails to fit nothing else is drawn, even if a later
//! station would fit into the leftover space.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;

use crate::board::StationBoard;
use crate::colors::{INK, PAPER};
use crate::config::LayoutParams;
use crate::styles::{CENTERED, header_style};
use crate::widgets::{draw_connection_row, draw_station_header, draw_status_icons};

/// Product name shown while the first board is fetched.
pub const SPLASH_TITLE: &str = "Tramwise";

const SPLASH_RULE_STYLE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(INK, 2);

/// Connectivity shown in the top-right corner. Display only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Connectivity {
    pub wifi: bool,
    /// Outcome of the last feed request, `None` to hide the glyph.
    pub api: Option<bool>,
}

/// What a render pass managed to fit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderSummary {
    /// Stations whose header was drawn; always a prefix of the board.
    pub stations_drawn: usize,
    pub rows_drawn: usize,
    /// Vertical cursor after the last drawn element.
    pub cursor_y: u32,
    /// Some content was left out for lack of space.
    pub truncated: bool,
}

/// Clear `display` and draw the board, status glyphs first.
pub fn render_board<D>(
    display: &mut D,
    board: &[StationBoard<'_>],
    params: &LayoutParams,
    status: Connectivity,
) -> RenderSummary
where
    D: DrawTarget<Color = BinaryColor>,
{
    display.clear(PAPER).ok();
    draw_status_icons(display, params, status);

    let height = display.bounding_box().size.height;
    let fits = |y: u32, item_height: u32| y + item_height <= height;

    let mut summary = RenderSummary {
        cursor_y: params.margin,
        ..RenderSummary::default()
    };

    'stations: for station in board {
        if !fits(summary.cursor_y, params.header_height()) {
            log_debug!("no room for station {}, board cut off", station.name);
            summary.truncated = true;
            break;
        }
        draw_station_header(display, params, station.name, summary.cursor_y as i32);
        summary.cursor_y += params.header_height();
        summary.stations_drawn += 1;

        for connection in &station.connections {
            if !fits(summary.cursor_y, params.row_height()) {
                log_debug!("{}: rows cut off at y={}", station.name, summary.cursor_y);
                summary.truncated = true;
                break 'stations;
            }
            draw_connection_row(display, params, connection, summary.cursor_y as i32);
            summary.cursor_y += params.row_height();
            summary.rows_drawn += 1;
        }

        // No gap past the bottom edge; the next header cannot fit anyway.
        if fits(summary.cursor_y, params.margin) {
            summary.cursor_y += params.margin;
        }
    }

    summary
}

/// Clear `display` and draw the startup splash: the product name centered
/// above a rule.
pub fn render_splash<D>(
    display: &mut D,
    params: &LayoutParams,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    display.clear(PAPER).ok();

    let center = display.bounding_box().center();
    let style = header_style(params);
    Text::with_text_style(SPLASH_TITLE, center, style, CENTERED).draw(display).ok();

    let half_width = (SPLASH_TITLE.len() as u32 * style.font.character_size.width / 2) as i32;
    let rule_y = center.y + params.header_height() as i32 / 2 + params.margin as i32;
    Line::new(Point::new(center.x - half_width, rule_y), Point::new(center.x + half_width, rule_y))
        .into_styled(SPLASH_RULE_STYLE)
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
