//! Working state of one cluster of overlapping events.

use log::trace;

use daylane_core::event::{AssignedEvent, Event};

use super::ClusterLayout;

/// Events placed so far in the current cluster.
///
/// `columns[i]` holds the end of the most recently placed event in column
/// `i`. `max_end` is the latest end among all placed events, `None` while the
/// cluster is empty.
#[derive(Debug)]
pub(super) struct Cluster<I, T> {
    max_end: Option<T>,
    events: Vec<AssignedEvent<I, T>>,
    columns: Vec<T>,
}

impl<I, T: Copy + Ord> Cluster<I, T> {
    pub fn new() -> Self {
        Self {
            max_end: None,
            events: Vec::new(),
            columns: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Check whether `event` can join this cluster.
    ///
    /// An empty cluster admits anything. Otherwise the event must start
    /// strictly before the cluster's latest end; an event starting exactly at
    /// `max_end` begins a new cluster.
    pub fn admits(&self, event: &Event<I, T>) -> bool {
        self.max_end.is_none_or(|max_end| event.start() < max_end)
    }

    /// Place `event` in the first free column, opening a new one if none is.
    ///
    /// A column is free when its last event ended strictly before `event`
    /// starts. Returns the column index.
    pub fn place(&mut self, event: Event<I, T>) -> usize {
        let (start, end) = (event.start(), event.end());
        self.max_end = Some(self.max_end.map_or(end, |max_end| max_end.max(end)));

        let column = match self.columns.iter().position(|&last_end| start > last_end) {
            Some(column) => {
                self.columns[column] = end;
                column
            }
            None => {
                self.columns.push(end);
                self.columns.len() - 1
            }
        };

        trace!(column, columns = self.columns.len(); "Placed event");
        self.events.push(AssignedEvent::new(event, column));
        column
    }

    /// Finalize the cluster into its layout records.
    ///
    /// Every event gets the number of columns opened in the cluster, which
    /// can exceed the peak number of simultaneous events.
    pub fn finish(self) -> ClusterLayout<I, T> {
        let column_count = self.columns.len();
        let events = self
            .events
            .into_iter()
            .map(|assigned| assigned.into_laid_out(column_count))
            .collect();
        ClusterLayout::new(events, column_count)
    }
}
