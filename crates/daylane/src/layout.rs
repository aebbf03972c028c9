//! Column layout of a day's events.
//!
//! Layout runs in four stages over events ordered by start:
//!
//! 1. **Sort** - [`sort_by_start`] orders events by start offset, keeping the
//!    input order of events that start together.
//! 2. **Group** - [`Clusters`] splits the sorted events into maximal runs of
//!    transitively overlapping events.
//! 3. **Assign** - within a cluster, each event takes the first column whose
//!    last event ended strictly before it starts, or opens a new column.
//! 4. **Emit** - a finished cluster becomes a [`ClusterLayout`] whose events
//!    all share the cluster's column count.
//!
//! Clusters are finalized one at a time, so the working state never holds
//! more than the largest cluster.

mod cluster;
mod clusters;

pub use clusters::Clusters;

use std::fmt;

use log::debug;

use daylane_core::{
    event::{Event, LaidOutEvent},
    interval::InvalidInterval,
};

/// Layout records of one cluster, in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterLayout<I, T> {
    events: Vec<LaidOutEvent<I, T>>,
    column_count: usize,
}

impl<I, T> ClusterLayout<I, T> {
    fn new(events: Vec<LaidOutEvent<I, T>>, column_count: usize) -> Self {
        Self {
            events,
            column_count,
        }
    }

    /// Get the layout records of the cluster's events.
    pub fn events(&self) -> &[LaidOutEvent<I, T>] {
        &self.events
    }

    /// Get the number of columns opened by the cluster.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Consume the cluster and return its layout records.
    pub fn into_events(self) -> Vec<LaidOutEvent<I, T>> {
        self.events
    }
}

/// Layout of a whole day: its clusters in ascending start order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLayout<I, T> {
    clusters: Vec<ClusterLayout<I, T>>,
}

impl<I, T> Default for DayLayout<I, T> {
    fn default() -> Self {
        Self {
            clusters: Vec::new(),
        }
    }
}

impl<I, T> FromIterator<ClusterLayout<I, T>> for DayLayout<I, T> {
    fn from_iter<It: IntoIterator<Item = ClusterLayout<I, T>>>(iter: It) -> Self {
        Self {
            clusters: iter.into_iter().collect(),
        }
    }
}

impl<I, T> DayLayout<I, T> {
    /// Get the clusters, in the order they were finalized.
    pub fn clusters(&self) -> &[ClusterLayout<I, T>] {
        &self.clusters
    }

    /// Iterate over every layout record, cluster by cluster.
    pub fn events(&self) -> impl Iterator<Item = &LaidOutEvent<I, T>> {
        self.clusters.iter().flat_map(|cluster| cluster.events.iter())
    }

    /// Get the number of laid-out events.
    pub fn len(&self) -> usize {
        self.clusters.iter().map(|cluster| cluster.events.len()).sum()
    }

    /// Check whether the layout holds no events.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Get the largest column count of any cluster, zero for an empty day.
    pub fn column_count_max(&self) -> usize {
        self.clusters
            .iter()
            .map(ClusterLayout::column_count)
            .max()
            .unwrap_or(0)
    }

    /// Consume the layout and return all records, cluster by cluster.
    pub fn into_events(self) -> Vec<LaidOutEvent<I, T>> {
        self.clusters
            .into_iter()
            .flat_map(ClusterLayout::into_events)
            .collect()
    }
}

impl<I: Ord, T: Copy + Ord> DayLayout<I, T> {
    /// Consume the layout and return all records ordered by event identity.
    ///
    /// With identities that follow the input order (such as input indices),
    /// this restores the input order.
    pub fn into_input_order(self) -> Vec<LaidOutEvent<I, T>> {
        let mut events = self.into_events();
        events.sort_by(|a, b| a.id().cmp(b.id()));
        events
    }
}

/// Sort events by start offset.
///
/// The sort is stable: events with equal starts keep their input order.
pub fn sort_by_start<I, T: Copy + Ord>(mut events: Vec<Event<I, T>>) -> Vec<Event<I, T>> {
    events.sort_by_key(Event::start);
    events
}

/// Lay out validated events.
///
/// Events may be given in any order; the result lists clusters in ascending
/// start order and, within a cluster, events in placement order.
///
/// # Examples
///
/// ```
/// use daylane::{Event, layout::lay_out};
///
/// let events = vec![
///     Event::new(0, 30, 150).unwrap(),
///     Event::new(1, 540, 600).unwrap(),
///     Event::new(2, 560, 620).unwrap(),
///     Event::new(3, 610, 670).unwrap(),
/// ];
///
/// let layout = lay_out(events);
/// let columns: Vec<_> = layout
///     .events()
///     .map(|e| (e.column(), e.column_count()))
///     .collect();
/// assert_eq!(columns, vec![(0, 1), (0, 2), (1, 2), (0, 2)]);
/// ```
pub fn lay_out<I, T: Copy + Ord>(events: Vec<Event<I, T>>) -> DayLayout<I, T> {
    let event_count = events.len();
    let layout: DayLayout<I, T> = Clusters::new(sort_by_start(events)).collect();

    debug!(
        events = event_count,
        clusters = layout.clusters().len(),
        column_count_max = layout.column_count_max();
        "Day laid out"
    );
    layout
}

/// Validate raw `(id, start, end)` triples and lay them out.
///
/// # Errors
///
/// Fails fast with [`InvalidInterval`] on the first triple whose start is not
/// before its end; nothing is laid out in that case.
///
/// # Examples
///
/// ```
/// use daylane::layout::lay_out_day;
///
/// let layout = lay_out_day([("a", 0, 50), ("b", 50, 100)]).unwrap();
/// assert_eq!(layout.clusters().len(), 2);
///
/// assert!(lay_out_day([("c", 10, 10)]).is_err());
/// ```
pub fn lay_out_day<I, T>(
    raw: impl IntoIterator<Item = (I, T, T)>,
) -> Result<DayLayout<I, T>, InvalidInterval<T>>
where
    T: Copy + Ord + fmt::Debug,
{
    let events = raw
        .into_iter()
        .map(|(id, start, end)| Event::new(id, start, end))
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|err| debug!(err:%; "Rejected event"))?;

    Ok(lay_out(events))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_of(intervals: &[(i32, i32)]) -> DayLayout<usize, i32> {
        lay_out_day(
            intervals
                .iter()
                .enumerate()
                .map(|(id, &(start, end))| (id, start, end)),
        )
        .unwrap()
    }

    /// `(id, column, column_count)` of every record, in emission order.
    fn placements(layout: &DayLayout<usize, i32>) -> Vec<(usize, usize, usize)> {
        layout
            .events()
            .map(|e| (*e.id(), e.column(), e.column_count()))
            .collect()
    }

    #[test]
    fn test_empty_day() {
        let layout = layout_of(&[]);

        assert!(layout.is_empty());
        assert_eq!(layout.len(), 0);
        assert_eq!(layout.column_count_max(), 0);
    }

    #[test]
    fn test_disjoint_events() {
        let layout = layout_of(&[(0, 30), (60, 90)]);

        assert_eq!(layout.clusters().len(), 2);
        assert_eq!(placements(&layout), vec![(0, 0, 1), (1, 0, 1)]);
    }

    #[test]
    fn test_sample_day() {
        let layout = layout_of(&[(30, 150), (540, 600), (560, 620), (610, 670)]);

        assert_eq!(layout.clusters().len(), 2);
        assert_eq!(
            placements(&layout),
            vec![(0, 0, 1), (1, 0, 2), (2, 1, 2), (3, 0, 2)]
        );
    }

    #[test]
    fn test_three_way_overlap() {
        let layout = layout_of(&[(0, 100), (10, 100), (20, 100)]);

        assert_eq!(layout.clusters().len(), 1);
        assert_eq!(
            placements(&layout),
            vec![(0, 0, 3), (1, 1, 3), (2, 2, 3)]
        );
    }

    #[test]
    fn test_boundary_touch() {
        let layout = layout_of(&[(0, 50), (50, 100)]);

        assert_eq!(layout.clusters().len(), 2);
        assert_eq!(placements(&layout), vec![(0, 0, 1), (1, 0, 1)]);
    }

    #[test]
    fn test_unsorted_input() {
        let layout = layout_of(&[(610, 670), (30, 150), (560, 620), (540, 600)]);

        assert_eq!(
            placements(&layout),
            vec![(1, 0, 1), (3, 0, 2), (2, 1, 2), (0, 0, 2)]
        );
    }

    #[test]
    fn test_equal_starts_keep_input_order() {
        let layout = layout_of(&[(0, 40), (0, 20), (0, 60)]);

        assert_eq!(
            placements(&layout),
            vec![(0, 0, 3), (1, 1, 3), (2, 2, 3)]
        );
    }

    #[test]
    fn test_identical_intervals_get_distinct_columns() {
        let layout = layout_of(&[(10, 20), (10, 20)]);

        assert_eq!(layout.clusters().len(), 1);
        assert_eq!(placements(&layout), vec![(0, 0, 2), (1, 1, 2)]);
    }

    #[test]
    fn test_column_count_counts_opened_columns() {
        // Peak concurrency is 2 (the long event plus one other), but the
        // touching pair forces a third column.
        let layout = layout_of(&[(0, 100), (10, 50), (50, 80)]);

        assert_eq!(
            placements(&layout),
            vec![(0, 0, 3), (1, 1, 3), (2, 2, 3)]
        );
    }

    #[test]
    fn test_column_reuse_after_gap() {
        let layout = layout_of(&[(0, 100), (10, 30), (40, 60), (70, 90)]);

        assert_eq!(
            placements(&layout),
            vec![(0, 0, 2), (1, 1, 2), (2, 1, 2), (3, 1, 2)]
        );
    }

    #[test]
    fn test_negative_offsets() {
        let layout = layout_of(&[(-120, -60), (-90, -30)]);

        assert_eq!(placements(&layout), vec![(0, 0, 2), (1, 1, 2)]);
    }

    #[test]
    fn test_invalid_interval_fails_fast() {
        let err = lay_out_day([(0usize, 10, 20), (1, 30, 30), (2, 50, 40)]).unwrap_err();

        assert_eq!(err.start(), 30);
        assert_eq!(err.end(), 30);
    }

    #[test]
    fn test_into_input_order() {
        let layout = layout_of(&[(610, 670), (30, 150), (560, 620), (540, 600)]);

        let ids: Vec<_> = layout
            .into_input_order()
            .into_iter()
            .map(LaidOutEvent::into_id)
            .collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_sort_by_start_is_stable() {
        let events = vec![
            Event::new("late", 50, 60).unwrap(),
            Event::new("first", 10, 20).unwrap(),
            Event::new("second", 10, 30).unwrap(),
        ];

        let ids: Vec<_> = sort_by_start(events).iter().map(|e| *e.id()).collect();
        assert_eq!(ids, vec!["first", "second", "late"]);
    }
}
