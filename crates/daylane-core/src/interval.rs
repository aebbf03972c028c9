//! Validated time intervals.
//!
//! An [`Interval`] is a span on the day axis with `start < end`. Offsets are
//! opaque ordered values: the unit is chosen by the caller and negative
//! offsets are allowed.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Error returned when an interval does not end strictly after it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid interval: start {start:?} is not before end {end:?}")]
pub struct InvalidInterval<T: fmt::Debug> {
    start: T,
    end: T,
}

impl<T: fmt::Debug + Copy> InvalidInterval<T> {
    /// The rejected start offset.
    pub fn start(&self) -> T {
        self.start
    }

    /// The rejected end offset.
    pub fn end(&self) -> T {
        self.end
    }
}

/// A time span on the day axis.
///
/// The only way to build an interval is [`Interval::new`], so every value of
/// this type satisfies `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval<T> {
    start: T,
    end: T,
}

impl<T: Copy + Ord + fmt::Debug> Interval<T> {
    /// Create a new interval.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInterval`] if `start >= end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use daylane_core::interval::Interval;
    ///
    /// let lunch = Interval::new(180, 240).unwrap();
    /// assert_eq!(lunch.start(), 180);
    ///
    /// assert!(Interval::new(240, 240).is_err());
    /// ```
    pub fn new(start: T, end: T) -> Result<Self, InvalidInterval<T>> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(InvalidInterval { start, end })
        }
    }
}

impl<T: Copy + Ord> Interval<T> {
    /// Get the start offset.
    pub fn start(&self) -> T {
        self.start
    }

    /// Get the end offset.
    pub fn end(&self) -> T {
        self.end
    }

    /// Check whether two intervals collide on the day axis.
    ///
    /// Intervals that merely touch (`a.end == b.start`) do not overlap.
    /// Identical intervals always overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        (self.start < other.end && other.start < self.end) || self == other
    }
}
