// Copyright 2026 the Twirl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic event timestamps.
//!
//! [`EventTime`] stamps every [`PointerEvent`](crate::pointer::PointerEvent)
//! with the platform's monotonic input clock, expressed in nanoseconds
//! (Android's `MotionEvent.getEventTimeNanos`, `performance.now()` scaled on
//! the web). The recognizer itself never reads it; it is carried through to
//! trace events so diagnostics can be laid out on a timeline.

use core::fmt;

/// A point in time on the input clock, in nanoseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EventTime(pub u64);

impl EventTime {
    /// The zero timestamp, used when the platform does not supply one.
    pub const ZERO: Self = Self(0);

    /// Creates a timestamp from milliseconds (the unit most touch APIs use).
    #[inline]
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis.saturating_mul(1_000_000))
    }

    /// Returns the raw nanosecond value.
    #[inline]
    #[must_use]
    pub const fn nanos(self) -> u64 {
        self.0
    }

    /// Returns the timestamp in (fractional) microseconds.
    #[inline]
    #[must_use]
    pub fn as_micros_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Returns the nanoseconds elapsed since `earlier`, or zero if `earlier`
    /// is after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_nanos_since(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Returns this timestamp advanced by `nanos`, saturating at the maximum.
    #[inline]
    #[must_use]
    pub const fn saturating_add_nanos(self, nanos: u64) -> Self {
        Self(self.0.saturating_add(nanos))
    }
}

impl fmt::Debug for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventTime({}ns)", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_millis_scales_to_nanos() {
        assert_eq!(EventTime::from_millis(16).nanos(), 16_000_000);
    }

    #[test]
    fn from_millis_saturates() {
        assert_eq!(EventTime::from_millis(u64::MAX), EventTime(u64::MAX));
    }

    #[test]
    fn micros_conversion() {
        assert!((EventTime(1_500).as_micros_f64() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn saturating_difference() {
        let a = EventTime(1_000);
        let b = EventTime(4_000);
        assert_eq!(b.saturating_nanos_since(a), 3_000);
        assert_eq!(a.saturating_nanos_since(b), 0);
    }

    #[test]
    fn advance() {
        assert_eq!(EventTime(10).saturating_add_nanos(5), EventTime(15));
        assert_eq!(
            EventTime(u64::MAX).saturating_add_nanos(1),
            EventTime(u64::MAX)
        );
    }
}
