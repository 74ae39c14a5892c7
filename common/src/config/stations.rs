//! Station table and per-network station profiles.
//!
//! Station names and monitored routes must match the transit feed exactly
//! (e.g. `"Zürich, Paradeplatz"`), since routes are compared without any
//! normalization.
//!
//! # Profiles
//!
//! A device may travel between networks (home, office). Each
//! [`StationProfile`] binds a station list to a Wi-Fi network name; the
//! profile is re-resolved whenever connectivity changes. A profile without
//! a network name is the default.

use super::{MAX_ROWS, MAX_STATIONS};
use crate::routes::RouteKey;
use crate::thresholds::Thresholds;

// =============================================================================
// Station Configuration
// =============================================================================

/// One monitored station.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StationConfig<'a> {
    /// Exact station name as used by the feed.
    pub name: &'a str,
    /// Maximum number of departures shown.
    pub rows: usize,
    pub thresholds: Thresholds,
    /// Allow-list of routes; empty shows every departure.
    pub monitored_routes: &'a [RouteKey<'a>],
}

/// Station list used while connected to a given network.
#[derive(Clone, Copy, Debug)]
pub struct StationProfile<'a> {
    /// Wi-Fi network name, or `None` for the default profile.
    pub network: Option<&'a str>,
    pub stations: &'a [StationConfig<'a>],
}

/// Pick the stations for the current network.
///
/// The profile bound to `ssid` wins, then the first default profile. With
/// no match the board is empty.
pub fn stations_for_network<'a>(
    profiles: &[StationProfile<'a>],
    ssid: Option<&str>,
) -> &'a [StationConfig<'a>] {
    ssid.and_then(|ssid| profiles.iter().find(|p| p.network == Some(ssid)))
        .or_else(|| profiles.iter().find(|p| p.network.is_none()))
        .map_or(&[], |p| p.stations)
}

/// Check a station table against the engine's capacities and the expected
/// threshold ordering.
pub const fn validate_stations(stations: &[StationConfig]) -> bool {
    if stations.len() > MAX_STATIONS {
        return false;
    }
    let mut i = 0;
    while i < stations.len() {
        let station = &stations[i];
        if station.rows > MAX_ROWS || !station.thresholds.is_ordered() {
            return false;
        }
        i += 1;
    }
    true
}

// =============================================================================
// Shipped Tables
// =============================================================================

/// Demo table: two tram lines at Zürich Paradeplatz.
pub const DEMO_STATIONS: &[StationConfig<'static>] = &[StationConfig {
    name: "Zürich, Paradeplatz",
    rows: 4,
    thresholds: Thresholds::new(4, 5, 6),
    monitored_routes: &[
        RouteKey::new("T", "2", "Schlieren, Geissweid"),
        RouteKey::new("T", "13", "Zürich, Bahnhofstrasse/HB"),
    ],
}];

/// Two stations on the way to work, every line shown at Bellevue.
pub const COMMUTE_STATIONS: &[StationConfig<'static>] = &[
    StationConfig {
        name: "Zürich, Bellevue",
        rows: 2,
        thresholds: Thresholds::new(3, 4, 5),
        monitored_routes: &[],
    },
    StationConfig {
        rows: 3,
        ..DEMO_STATIONS[0]
    },
];

/// Profiles shipped with the firmware.
pub const PROFILES: &[StationProfile<'static>] = &[
    StationProfile {
        network: Some("tramwise-commute"),
        stations: COMMUTE_STATIONS,
    },
    StationProfile {
        network: None,
        stations: DEMO_STATIONS,
    },
];

const _: () = assert!(validate_stations(DEMO_STATIONS));
const _: () = assert!(validate_stations(COMMUTE_STATIONS));

// =============================================================================
// Unit Tests
// =============================================================================
