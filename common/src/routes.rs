//! Raw feed records and monitored-route filtering.
//!
//! The stationboard feed is consumed structurally: each departure has a
//! category (`T`, `B`, `S`, ...), a line number, a destination and a
//! scheduled/prognosis timestamp pair. Any of these may be missing in the
//! JSON, so [`RawRecord`] keeps every field optional and validation happens
//! here instead of failing on the first missing key.

// =============================================================================
// Route Key
// =============================================================================

/// A line + destination pair, e.g. tram 2 towards "Schlieren, Geissweid".
/// Compared by exact string equality, no normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RouteKey<'a> {
    pub category: &'a str,
    pub number: &'a str,
    pub destination: &'a str,
}

impl<'a> RouteKey<'a> {
    pub const fn new(
        category: &'a str,
        number: &'a str,
        destination: &'a str,
    ) -> Self {
        Self {
            category,
            number,
            destination,
        }
    }
}

// =============================================================================
// Raw Record
// =============================================================================

/// One departure as delivered by the feed, borrowed from the fetched
/// response for the duration of a refresh cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub category: Option<&'a str>,
    pub number: Option<&'a str>,
    /// Destination (`to` in the feed).
    pub to: Option<&'a str>,
    /// Scheduled departure (`stop.departure`).
    pub departure: Option<&'a str>,
    /// Real-time estimate (`stop.prognosis.departure`).
    pub prognosis: Option<&'a str>,
}

impl<'a> RawRecord<'a> {
    /// The record's route, or `None` when any of the three fields is missing.
    #[inline]
    pub fn route(&self) -> Option<RouteKey<'a>> {
        Some(RouteKey::new(self.category?, self.number?, self.to?))
    }
}

// =============================================================================
// Filtering
// =============================================================================

/// Keep the records whose route is monitored, in feed order.
///
/// An empty `monitored` set shows everything. Records missing a route field
/// are dropped in both modes.
pub fn filter_routes<'r, 'a>(
    records: &'r [RawRecord<'a>],
    monitored: &'r [RouteKey<'_>],
) -> impl Iterator<Item = (RouteKey<'a>, &'r RawRecord<'a>)> {
    records.iter().filter_map(move |record| {
        let Some(route) = record.route() else {
            log_debug!("dropping feed record without category/number/destination");
            return None;
        };
        (monitored.is_empty() || monitored.iter().any(|key| *key == route)).then_some((route, record))
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
