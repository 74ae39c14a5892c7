//! Departure timestamp parsing.
//!
//! The transit feed encodes departures as fixed-width ISO 8601 strings:
//!
//! ```text
//! 2024-03-01T08:15:00+0200
//! ^^^^ ^^ ^^ ^^ ^^ ^^^^^^^
//! |    |  |  |  |  |  offset (optional, ±HHMM, only when len >= 24)
//! |    |  |  |  |  seconds
//! |    |  |  |  minutes
//! |    |  |  hours
//! |    |  day
//! |    month
//! year
//! ```
//!
//! Parsing never fails hard. A missing, short, non-numeric or
//! calendar-invalid timestamp becomes [`Departure::Fallback`], which shows
//! as `--:--`, counts as 0 minutes and carries no urgency.

use core::fmt::Write;
use core::ops::Range;

use chrono::NaiveDate;
use heapless::String;

use crate::thresholds::{Thresholds, Urgency};

// =============================================================================
// Format Constants
// =============================================================================

/// Shown in place of the clock time when the timestamp is unusable.
pub const FALLBACK_TIME: &str = "--:--";

/// Shortest string that still holds a full date and time.
const MIN_TIMESTAMP_LEN: usize = 19;

/// Shortest string that carries a trailing UTC offset.
const OFFSET_TIMESTAMP_LEN: usize = 24;

const YEAR: Range<usize> = 0..4;
const MONTH: Range<usize> = 5..7;
const DAY: Range<usize> = 8..10;
const HOUR: Range<usize> = 11..13;
const MINUTE: Range<usize> = 14..16;
const SECOND: Range<usize> = 17..19;

/// `"HH:MM"` clock label of a parsed departure.
pub type ClockTime = String<5>;

// =============================================================================
// Parse Outcome
// =============================================================================

/// Outcome of parsing a departure timestamp against the current time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Departure {
    /// Usable timestamp: local clock label and minutes until departure
    /// (floored, negative once the departure has passed).
    Parsed { clock: ClockTime, minutes: i32 },
    /// Missing or malformed timestamp.
    Fallback,
}

impl Departure {
    /// Clock label, `"HH:MM"` or `"--:--"`.
    pub fn display_time(&self) -> &str {
        match self {
            Self::Parsed { clock, .. } => clock.as_str(),
            Self::Fallback => FALLBACK_TIME,
        }
    }

    /// Minutes to departure; 0 for the fallback.
    #[inline]
    pub const fn minutes(&self) -> i32 {
        match self {
            Self::Parsed { minutes, .. } => *minutes,
            Self::Fallback => 0,
        }
    }

    #[inline]
    pub const fn is_fallback(&self) -> bool { matches!(self, Self::Fallback) }

    /// Urgency band under the given thresholds. The fallback is always
    /// [`Urgency::Relaxed`]: an unknown time is shown, never hidden.
    pub const fn classify(
        &self,
        thresholds: &Thresholds,
    ) -> Urgency {
        match self {
            Self::Parsed { minutes, .. } => thresholds.classify(*minutes),
            Self::Fallback => Urgency::Relaxed,
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Pick the real-time prognosis when present, else the schedule.
/// An empty prognosis counts as absent.
#[inline]
pub fn select_timestamp<'a>(
    scheduled: Option<&'a str>,
    prognosis: Option<&'a str>,
) -> Option<&'a str> {
    prognosis.filter(|p| !p.is_empty()).or(scheduled)
}

/// Parse a departure timestamp relative to `now_epoch_secs` (UTC).
pub fn parse_departure(
    timestamp: Option<&str>,
    now_epoch_secs: i64,
) -> Departure {
    let Some(timestamp) = timestamp else {
        log_debug!("departure without timestamp");
        return Departure::Fallback;
    };
    let Some(fields) = Fields::parse(timestamp) else {
        log_debug!("unusable departure timestamp: {}", timestamp);
        return Departure::Fallback;
    };
    let Some(departure_secs) = fields.epoch_seconds() else {
        log_debug!("departure timestamp outside the calendar: {}", timestamp);
        return Departure::Fallback;
    };

    let minutes = (departure_secs - now_epoch_secs).div_euclid(60);
    let minutes = minutes.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;

    let mut clock = ClockTime::new();
    let _ = write!(clock, "{:02}:{:02}", fields.hour, fields.minute);

    Departure::Parsed { clock, minutes }
}

/// Absolute UTC instant of a feed timestamp, in seconds since the epoch.
pub fn epoch_seconds(timestamp: &str) -> Option<i64> { Fields::parse(timestamp)?.epoch_seconds() }

/// Numeric fields of a timestamp, validated as digits but not yet as a
/// calendar date.
struct Fields {
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    offset_secs: i64,
}

impl Fields {
    fn parse(timestamp: &str) -> Option<Self> {
        let bytes = timestamp.as_bytes();
        if bytes.len() < MIN_TIMESTAMP_LEN {
            return None;
        }

        let offset_secs = if bytes.len() >= OFFSET_TIMESTAMP_LEN {
            let end = bytes.len();
            let sign = if bytes[end - 5] == b'-' { -1 } else { 1 };
            let hours = digits(bytes, end - 4..end - 2)?;
            let minutes = digits(bytes, end - 2..end)?;
            sign * (i64::from(hours) * 3600 + i64::from(minutes) * 60)
        } else {
            0
        };

        Some(Self {
            year: digits(bytes, YEAR)?,
            month: digits(bytes, MONTH)?,
            day: digits(bytes, DAY)?,
            hour: digits(bytes, HOUR)?,
            minute: digits(bytes, MINUTE)?,
            second: digits(bytes, SECOND)?,
            offset_secs,
        })
    }

    /// Shift the wall-clock time by the offset and convert to UTC seconds.
    fn epoch_seconds(&self) -> Option<i64> {
        let local = NaiveDate::from_ymd_opt(self.year as i32, self.month, self.day)?.and_hms_opt(
            self.hour,
            self.minute,
            self.second,
        )?;
        Some(local.and_utc().timestamp() - self.offset_secs)
    }
}

/// Parse an all-digit byte range. Any other byte rejects the field.
fn digits(
    bytes: &[u8],
    range: Range<usize>,
) -> Option<u32> {
    bytes.get(range)?.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
