//! Departure board engine for the Tramwise e-paper display.
//!
//! This crate contains platform-agnostic code shared between the desktop
//! simulator and device firmware:
//!
//! - [`config`]: Display layout, capacities and the shipped station table
//! - [`thresholds`]: Per-station urgency thresholds and classification
//! - [`timestamp`]: Departure timestamp parsing with fallback
//! - [`routes`]: Raw feed records and monitored-route filtering
//! - [`board`]: Per-station boards and the assembled multi-station board
//! - [`text`]: Pixel-width measurement and truncation with ellipsis
//! - [`canvas`]: 1-bpp frame buffer handed to the e-paper driver
//! - [`render`]: Layout engine that paints a board onto a canvas
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` and allocation-free outside of tests. All
//! collections have fixed capacities (see [`config`]), and the board
//! borrows its strings from the station table and the fetched feed.
//!
//! # Logging
//!
//! Diagnostics go through `defmt` (feature `defmt`) on the device and the
//! `log` facade (feature `log`) on the host. Nothing in the engine fails
//! hard: malformed input degrades to a displayable default.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

#[macro_use]
mod diag;

pub mod board;
pub mod canvas;
pub mod colors;
pub mod config;
pub mod icons;
pub mod render;
pub mod routes;
pub mod styles;
pub mod text;
pub mod thresholds;
pub mod timestamp;
pub mod widgets;

#[cfg(test)]
mod test_properties;

// Re-export commonly used items
pub use board::{Board, Connection, StationBoard, assemble_board, build_station_board};
pub use canvas::{EpaperCanvas, FrameBuffer};
pub use config::{LayoutParams, StationConfig};
pub use render::{Connectivity, RenderSummary, render_board, render_splash};
pub use routes::{RawRecord, RouteKey};
pub use thresholds::{Thresholds, Urgency};
pub use timestamp::Departure;
