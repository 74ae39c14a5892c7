//! Application configuration.
//!
//! - `layout`: Display dimensions, column offsets and fonts
//! - `stations`: The shipped station table and per-network profiles
//!
//! Everything here is a compile-time constant. Invariants that the engine
//! relies on are checked with `const` assertions, so a bad table fails the
//! build instead of the device.

pub mod layout;
pub mod stations;

// Re-export at config level for convenience
pub use layout::{CANVAS_BUFFER_SIZE, Columns, EPAPER_37_LANDSCAPE, LayoutParams, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use stations::{COMMUTE_STATIONS, DEMO_STATIONS, PROFILES, StationConfig, StationProfile, stations_for_network, validate_stations};

// =============================================================================
// Capacities
// =============================================================================

/// Maximum number of stations on one board.
pub const MAX_STATIONS: usize = 8;

/// Maximum departure rows per station.
pub const MAX_ROWS: usize = 8;

/// Maximum feed records considered per station. Extra records are ignored.
pub const MAX_FEED_RECORDS: usize = 32;

// =============================================================================
// Refresh Cycle
// =============================================================================

/// Seconds between two refresh cycles (fetch, build, render).
pub const REFRESH_INTERVAL_SECS: u64 = 30;

/// Number of departures requested from the feed per station.
pub const FEED_QUERY_LIMIT: usize = 15;

const _: () = assert!(FEED_QUERY_LIMIT <= MAX_FEED_RECORDS);
const _: () = assert!(MAX_ROWS <= MAX_FEED_RECORDS);
