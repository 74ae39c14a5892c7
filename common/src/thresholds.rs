//! Per-station urgency thresholds and departure classification.
//!
//! Every departure is placed in exactly one urgency band based on its
//! minutes-to-departure (mtd) and the thresholds of its station:
//!
//! | Band | Condition (first match wins) | Shown as |
//! |------|------------------------------|----------|
//! | `Unreachable` | `mtd < unreachable` | not shown |
//! | `Hurry` | `mtd < hurry` | running glyph |
//! | `LeaveNow` | `mtd <= leave_now` | door glyph |
//! | `Relaxed` | otherwise | no glyph |
//!
//! # Precedence
//!
//! The bands are evaluated in the order above, so a misconfigured station
//! (e.g. `hurry < unreachable`) still yields a single band per departure,
//! and "about to be missed" always outranks "hurry", which always outranks
//! "leave now". The ordering `unreachable <= hurry <= leave_now` is only
//! checked for the shipped station table (see [`crate::config`]).

// =============================================================================
// Thresholds
// =============================================================================

/// Urgency thresholds of one station, in minutes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Thresholds {
    /// Departures sooner than this are dropped from the board.
    pub unreachable: i32,
    /// Departures sooner than this get the "hurry" glyph.
    pub hurry: i32,
    /// Departures at or below this get the "leave now" glyph.
    pub leave_now: i32,
}

impl Thresholds {
    pub const fn new(
        unreachable: i32,
        hurry: i32,
        leave_now: i32,
    ) -> Self {
        Self {
            unreachable,
            hurry,
            leave_now,
        }
    }

    /// Classify a minutes-to-departure value. Defined for every input,
    /// including inverted or overlapping thresholds.
    #[inline]
    pub const fn classify(
        &self,
        minutes: i32,
    ) -> Urgency {
        if minutes < self.unreachable {
            Urgency::Unreachable
        } else if minutes < self.hurry {
            Urgency::Hurry
        } else if minutes <= self.leave_now {
            Urgency::LeaveNow
        } else {
            Urgency::Relaxed
        }
    }

    /// Check `unreachable <= hurry <= leave_now`.
    #[inline]
    pub const fn is_ordered(&self) -> bool { self.unreachable <= self.hurry && self.hurry <= self.leave_now }
}

// =============================================================================
// Urgency
// =============================================================================

/// Urgency band of a single departure. Exactly one applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Urgency {
    /// Too late to catch; dropped before the row budget is spent.
    Unreachable,
    /// Catchable only when running.
    Hurry,
    /// Time to head out.
    LeaveNow,
    /// No urgency. Also the state of departures without a usable timestamp.
    #[default]
    Relaxed,
}

impl Urgency {
    #[inline]
    pub const fn is_unreachable(self) -> bool { matches!(self, Self::Unreachable) }

    #[inline]
    pub const fn is_hurry(self) -> bool { matches!(self, Self::Hurry) }

    #[inline]
    pub const fn is_leave_now(self) -> bool { matches!(self, Self::LeaveNow) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ZURICH: Thresholds = Thresholds::new(4, 5, 6);

    #[test]
    fn test_classify_documented_bands() {
        assert_eq!(ZURICH.classify(3), Urgency::Unreachable, "3 min is below unreachable=4");
        assert_eq!(ZURICH.classify(4), Urgency::Hurry, "4 min is below hurry=5");
        assert_eq!(ZURICH.classify(5), Urgency::LeaveNow, "5 min is within leave_now=6");
        assert_eq!(ZURICH.classify(6), Urgency::LeaveNow, "leave_now is inclusive");
        assert_eq!(ZURICH.classify(7), Urgency::Relaxed, "7 min needs no glyph");
    }

    #[test]
    fn test_classify_negative_minutes() {
        assert_eq!(ZURICH.classify(-3), Urgency::Unreachable, "departed trains are unreachable");
        let lenient = Thresholds::new(-5, 0, 2);
        assert_eq!(lenient.classify(-3), Urgency::Hurry);
    }

    #[test]
    fn test_classify_inverted_thresholds() {
        // hurry below unreachable: the hurry band is empty
        let inverted = Thresholds::new(5, 3, 1);
        assert_eq!(inverted.classify(4), Urgency::Unreachable);
        assert_eq!(inverted.classify(5), Urgency::Relaxed, "5 fails hurry (<3) and leave_now (<=1)");
        assert!(!inverted.is_ordered());
    }

    #[test]
    fn test_classify_overlapping_thresholds() {
        let equal = Thresholds::new(5, 5, 5);
        assert_eq!(equal.classify(4), Urgency::Unreachable);
        assert_eq!(equal.classify(5), Urgency::LeaveNow, "hurry band is empty, leave_now is inclusive");
        assert_eq!(equal.classify(6), Urgency::Relaxed);
    }

    #[test]
    fn test_is_ordered() {
        assert!(ZURICH.is_ordered());
        assert!(Thresholds::new(3, 3, 3).is_ordered());
        assert!(!Thresholds::new(4, 6, 5).is_ordered());
    }

    #[test]
    fn test_urgency_flags_exclusive() {
        for urgency in [Urgency::Unreachable, Urgency::Hurry, Urgency::LeaveNow, Urgency::Relaxed] {
            let set = [urgency.is_unreachable(), urgency.is_hurry(), urgency.is_leave_now()]
                .iter()
                .filter(|flag| **flag)
                .count();
            assert!(set <= 1, "{urgency:?} sets more than one flag");
        }
        assert_eq!(Urgency::default(), Urgency::Relaxed);
    }
}
