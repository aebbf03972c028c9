//! Schedules read from source text.
//!
//! A [`Schedule`] is the ordered list of entries of one day. Each entry keeps
//! its position in the source, which becomes the identity of the [`Event`]
//! handed to the layout.

use log::trace;

use crate::{event::Event, interval::Interval, time::Minutes};

/// One scheduled entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: Option<String>,
    title: Option<String>,
    interval: Interval<Minutes>,
}

impl Entry {
    /// Create a new entry.
    pub fn new(name: Option<String>, title: Option<String>, interval: Interval<Minutes>) -> Self {
        Self {
            name,
            title,
            interval,
        }
    }

    /// Get the entry name, if it was given one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the display title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Get the entry interval.
    pub fn interval(&self) -> Interval<Minutes> {
        self.interval
    }
}

/// The entries of one day, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    entries: Vec<Entry>,
}

impl Schedule {
    /// Create a schedule from entries in source order.
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Get all entries.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Get the entry with the given index.
    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the schedule has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build layout events, identified by entry index.
    pub fn events(&self) -> Vec<Event<usize, Minutes>> {
        trace!(entries = self.entries.len(); "Building events from schedule");
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Event::from_interval(index, entry.interval))
            .collect()
    }
}
