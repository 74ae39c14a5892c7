//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

use tramwise_common::config::REFRESH_INTERVAL_SECS;

/// Pause between two refresh cycles.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(REFRESH_INTERVAL_SECS);

/// Clock advance per refresh cycle, in seconds.
pub const REFRESH_STEP_SECS: i64 = REFRESH_INTERVAL_SECS as i64;
