//! Per-station departure boards and the assembled multi-station board.
//!
//! A board is rebuilt from scratch every refresh cycle. It borrows station
//! names from the station table and route strings from the fetched feed, so
//! it lives exactly as long as one cycle's records.

use heapless::Vec;

use crate::config::{MAX_FEED_RECORDS, MAX_ROWS, MAX_STATIONS, StationConfig};
use crate::routes::{RawRecord, RouteKey, filter_routes};
use crate::thresholds::Urgency;
use crate::timestamp::{Departure, parse_departure, select_timestamp};

// =============================================================================
// Board Types
// =============================================================================

/// One departure that made it onto the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connection<'a> {
    pub route: RouteKey<'a>,
    pub departure: Departure,
    pub urgency: Urgency,
}

impl<'a> Connection<'a> {
    /// Classify a validated record against the station thresholds.
    fn from_record(
        route: RouteKey<'a>,
        record: &RawRecord<'_>,
        station: &StationConfig<'_>,
        now_epoch_secs: i64,
    ) -> Self {
        let timestamp = select_timestamp(record.departure, record.prognosis);
        let departure = parse_departure(timestamp, now_epoch_secs);
        let urgency = departure.classify(&station.thresholds);
        Self {
            route,
            departure,
            urgency,
        }
    }

    #[inline]
    pub const fn category(&self) -> &'a str { self.route.category }

    #[inline]
    pub const fn number(&self) -> &'a str { self.route.number }

    #[inline]
    pub const fn destination(&self) -> &'a str { self.route.destination }

    /// `"HH:MM"`, or `"--:--"` when the timestamp was unusable.
    #[inline]
    pub fn display_time(&self) -> &str { self.departure.display_time() }

    #[inline]
    pub const fn minutes(&self) -> i32 { self.departure.minutes() }

    #[inline]
    pub const fn is_hurry(&self) -> bool { self.urgency.is_hurry() }

    #[inline]
    pub const fn is_leave_now(&self) -> bool { self.urgency.is_leave_now() }
}

/// Departures of one station, soonest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationBoard<'a> {
    pub name: &'a str,
    pub connections: Vec<Connection<'a>, MAX_ROWS>,
}

/// All station boards, in configuration order.
pub type Board<'a> = Vec<StationBoard<'a>, MAX_STATIONS>;

// =============================================================================
// Building
// =============================================================================

/// Build one station's board: filter, classify, drop unreachable
/// departures, sort by minutes (feed order on ties) and keep `rows`.
///
/// Unreachable departures are removed before truncation so the row budget
/// is only spent on connections that can still be caught.
pub fn build_station_board<'a>(
    station: &StationConfig<'a>,
    records: &'a [RawRecord<'a>],
    now_epoch_secs: i64,
) -> StationBoard<'a> {
    let mut candidates: Vec<(usize, Connection<'a>), MAX_FEED_RECORDS> = Vec::new();

    for (index, (route, record)) in filter_routes(records, station.monitored_routes).enumerate() {
        let connection = Connection::from_record(route, record, station, now_epoch_secs);
        if connection.urgency.is_unreachable() {
            continue;
        }
        if candidates.push((index, connection)).is_err() {
            log_warn!("{}: more than {} departures, ignoring the rest", station.name, MAX_FEED_RECORDS);
            break;
        }
    }

    // The feed index makes the unstable sort stable.
    candidates.sort_unstable_by_key(|(index, connection)| (connection.minutes(), *index));

    let rows = station.rows.min(MAX_ROWS);
    let connections = candidates.into_iter().take(rows).map(|(_, connection)| connection).collect();

    StationBoard {
        name: station.name,
        connections,
    }
}

/// Build every station's board in configuration order.
///
/// `feed` returns the fetched records of a station; an empty slice means
/// no departures, not an error.
pub fn assemble_board<'a, F>(
    stations: &'a [StationConfig<'a>],
    mut feed: F,
    now_epoch_secs: i64,
) -> Board<'a>
where
    F: FnMut(&StationConfig<'a>) -> &'a [RawRecord<'a>],
{
    let mut board = Board::new();
    for station in stations {
        let station_board = build_station_board(station, feed(station), now_epoch_secs);
        log_debug!("{}: {} connections", station.name, station_board.connections.len());
        if board.push(station_board).is_err() {
            log_warn!("more than {} stations configured, ignoring the rest", MAX_STATIONS);
            break;
        }
    }
    board
}

// =============================================================================
// Unit Tests
// =============================================================================
