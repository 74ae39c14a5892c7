//! Widget components for the departure board.
//!
//! All widgets are generic over `DrawTarget<Color = BinaryColor>` so the
//! same code paints the device frame buffer and the simulator display.

mod header;
mod primitives;
mod rows;

pub use header::{draw_station_header, draw_status_icons};
pub use primitives::{draw_icon, draw_text};
pub use rows::{LineLabel, TimeLabel, draw_connection_row, line_label, time_label, urgency_icon};
