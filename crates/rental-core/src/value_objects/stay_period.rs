//! Stay period - the booked time range of a reservation

use chrono::{DateTime, Utc};

/// Milliseconds in one night (24h)
const MILLIS_PER_NIGHT: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// A stay from `start` to `end`, both endpoints inclusive.
///
/// Construction does not check ordering; `Reservation::validate` owns that rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl StayPeriod {
    #[inline]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Inclusive overlap: `s1 <= e2 && e1 >= s2`.
    ///
    /// Ranges that only touch at a boundary overlap, so a checkout and a
    /// check-in on the same instant conflict. Relaxing this to half-open
    /// ranges must also change the `'[]'` bound in the storage constraint.
    #[inline]
    pub fn overlaps(&self, other: &StayPeriod) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Length of the stay in nights, fractional, not rounded.
    pub fn nights(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / MILLIS_PER_NIGHT
    }
}
