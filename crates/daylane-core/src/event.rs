//! Events and the records produced while laying them out.
//!
//! An event moves through three shapes:
//!
//! - [`Event`] - an identified [`Interval`], the layout input.
//! - [`AssignedEvent`] - an event placed in a column of its cluster.
//! - [`LaidOutEvent`] - the output record, once the cluster's column count is known.
//!
//! The identity carried by an event is opaque; layout only reads the interval.

use std::fmt;

use serde::Serialize;

use crate::{
    geometry::{Geometry, Projection},
    interval::{Interval, InvalidInterval},
};

/// A time-bound event with an external identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event<I, T> {
    id: I,
    interval: Interval<T>,
}

impl<I, T: Copy + Ord + fmt::Debug> Event<I, T> {
    /// Create an event from raw offsets.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInterval`] if `start >= end`.
    pub fn new(id: I, start: T, end: T) -> Result<Self, InvalidInterval<T>> {
        Ok(Self::from_interval(id, Interval::new(start, end)?))
    }
}

impl<I, T: Copy + Ord> Event<I, T> {
    /// Create an event from an already validated interval.
    pub fn from_interval(id: I, interval: Interval<T>) -> Self {
        Self { id, interval }
    }

    /// Get the event identity.
    pub fn id(&self) -> &I {
        &self.id
    }

    /// Get the event interval.
    pub fn interval(&self) -> Interval<T> {
        self.interval
    }

    /// Get the start offset.
    pub fn start(&self) -> T {
        self.interval.start()
    }

    /// Get the end offset.
    pub fn end(&self) -> T {
        self.interval.end()
    }
}

/// An event placed in a column of its cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedEvent<I, T> {
    event: Event<I, T>,
    column: usize,
}

impl<I, T: Copy + Ord> AssignedEvent<I, T> {
    pub fn new(event: Event<I, T>, column: usize) -> Self {
        Self { event, column }
    }

    /// Get the placed event.
    pub fn event(&self) -> &Event<I, T> {
        &self.event
    }

    /// Get the zero-based column index.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Turn the placement into an output record for a cluster that opened
    /// `column_count` columns.
    pub fn into_laid_out(self, column_count: usize) -> LaidOutEvent<I, T> {
        LaidOutEvent {
            start: self.event.start(),
            end: self.event.end(),
            id: self.event.id,
            column: self.column,
            column_count,
        }
    }
}

/// Layout record for one event.
///
/// `column_count` is the number of columns opened by the event's cluster and
/// is shared by every event of that cluster, so all of them get the same
/// width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaidOutEvent<I, T> {
    id: I,
    start: T,
    end: T,
    column: usize,
    column_count: usize,
}

impl<I, T: Copy + Ord> LaidOutEvent<I, T> {
    /// Get the event identity.
    pub fn id(&self) -> &I {
        &self.id
    }

    /// Consume the record and return the event identity.
    pub fn into_id(self) -> I {
        self.id
    }

    /// Get the start offset.
    pub fn start(&self) -> T {
        self.start
    }

    /// Get the end offset.
    pub fn end(&self) -> T {
        self.end
    }

    /// Get the zero-based column index.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Get the number of columns of the event's cluster.
    pub fn column_count(&self) -> usize {
        self.column_count
    }
}

impl<I, T: Copy + Ord + Into<f64>> LaidOutEvent<I, T> {
    /// Project this record to render geometry.
    pub fn geometry(&self, projection: &Projection) -> Geometry {
        projection.project(
            self.start.into(),
            self.end.into(),
            self.column,
            self.column_count,
        )
    }
}
