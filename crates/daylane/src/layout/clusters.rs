//! Streaming grouping of sorted events into laid-out clusters.

use std::mem;

use log::debug;

use daylane_core::event::Event;

use super::{ClusterLayout, cluster::Cluster};

/// Iterator that groups events sorted by start into clusters and lays each
/// one out.
///
/// Only the cluster being built is held in memory. A cluster is yielded as
/// soon as an event starts at or after its latest end, since no later event
/// can overlap it either.
///
/// The input must be sorted by start offset; see
/// [`sort_by_start`](super::sort_by_start).
///
/// # Examples
///
/// ```
/// use daylane::{Event, layout::Clusters};
///
/// let events = vec![
///     Event::new("a", 0, 30).unwrap(),
///     Event::new("b", 10, 40).unwrap(),
///     Event::new("c", 40, 60).unwrap(),
/// ];
///
/// let counts: Vec<_> = Clusters::new(events).map(|c| c.column_count()).collect();
/// assert_eq!(counts, vec![2, 1]);
/// ```
pub struct Clusters<It, I, T>
where
    It: Iterator<Item = Event<I, T>>,
{
    events: It,
    current: Cluster<I, T>,
}

impl<It, I, T> Clusters<It, I, T>
where
    It: Iterator<Item = Event<I, T>>,
    T: Copy + Ord,
{
    /// Create a cluster iterator over events sorted by start offset.
    pub fn new(events: impl IntoIterator<IntoIter = It>) -> Self {
        Self {
            events: events.into_iter(),
            current: Cluster::new(),
        }
    }

    /// Swap the current cluster for an empty one and lay it out.
    fn take_current(&mut self) -> ClusterLayout<I, T> {
        let finished = mem::replace(&mut self.current, Cluster::new()).finish();
        debug!(
            events = finished.events().len(),
            column_count = finished.column_count();
            "Cluster finalized"
        );
        finished
    }
}

impl<It, I, T> Iterator for Clusters<It, I, T>
where
    It: Iterator<Item = Event<I, T>>,
    T: Copy + Ord,
{
    type Item = ClusterLayout<I, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(event) = self.events.next() {
            if self.current.admits(&event) {
                self.current.place(event);
                continue;
            }

            let finished = self.take_current();
            self.current.place(event);
            return Some(finished);
        }

        if self.current.is_empty() {
            None
        } else {
            Some(self.take_current())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(intervals: &[(i32, i32)]) -> Vec<Event<usize, i32>> {
        intervals
            .iter()
            .enumerate()
            .map(|(id, &(start, end))| Event::new(id, start, end).unwrap())
            .collect()
    }

    #[test]
    fn test_no_events_no_clusters() {
        assert_eq!(Clusters::new(events(&[])).count(), 0);
    }

    #[test]
    fn test_cluster_boundaries() {
        let clusters: Vec<_> =
            Clusters::new(events(&[(30, 150), (540, 600), (560, 620), (610, 670)])).collect();

        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].events().len(), 1);
        assert_eq!(clusters[1].events().len(), 3);
    }

    #[test]
    fn test_transitive_overlap_stays_in_one_cluster() {
        // The first and last events do not overlap, but are chained by the middle one
        let clusters: Vec<_> = Clusters::new(events(&[(0, 20), (10, 40), (30, 50)])).collect();

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].column_count(), 2);
    }

    #[test]
    fn test_touching_events_start_new_cluster() {
        let clusters: Vec<_> = Clusters::new(events(&[(0, 50), (50, 100)])).collect();

        assert_eq!(clusters.len(), 2);
        assert!(clusters.iter().all(|c| c.column_count() == 1));
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut clusters = Clusters::new(events(&[(0, 10)]));

        assert!(clusters.next().is_some());
        assert!(clusters.next().is_none());
        assert!(clusters.next().is_none());
    }
}
