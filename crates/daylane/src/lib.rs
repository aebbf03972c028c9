//! Daylane - Column layout for the overlapping events of a day.
//!
//! Events with a start and an end are split into clusters of transitively
//! overlapping events, and each event is given a column inside its cluster so
//! that no two events in one column collide. Layout records can then be
//! projected to render geometry for a day view.
//!
//! The [`layout`] module works on any ordered offset type. [`DayBuilder`]
//! ties it to the schedule text format, the day window and the geometry
//! settings of an [`AppConfig`](config::AppConfig).

pub mod config;
pub mod layout;

mod error;

pub use daylane_core::{event, geometry, interval, schedule, time};

pub use daylane_core::event::Event;
pub use error::DaylaneError;

use log::{debug, info, trace, warn};

use daylane_core::{
    event::LaidOutEvent, geometry::Geometry, schedule::Schedule, time::Minutes,
};
use daylane_parser::ParseConfig;

use config::AppConfig;
use layout::DayLayout;

/// An event's layout record together with its render geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    event: LaidOutEvent<usize, Minutes>,
    geometry: Geometry,
}

impl Placement {
    /// Get the layout record.
    pub fn event(&self) -> &LaidOutEvent<usize, Minutes> {
        &self.event
    }

    /// Get the input index of the event.
    pub fn index(&self) -> usize {
        *self.event.id()
    }

    /// Get the render geometry.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }
}

/// Builder for reading and laying out a day of events.
///
/// This provides an API for processing a day through parsing, layout, and
/// geometry stages.
///
/// # Examples
///
/// ```rust
/// use daylane::{DayBuilder, config::AppConfig};
///
/// let source = "standup: 09:30..09:45\nreview: 09:40..10:30";
///
/// let builder = DayBuilder::new(AppConfig::default());
///
/// let schedule = builder.parse(source).expect("Failed to parse");
/// let layout = builder.lay_out(&schedule);
/// assert_eq!(layout.column_count_max(), 2);
///
/// let placements = builder.place(&layout);
/// assert_eq!(placements[1].geometry().left(), 50.0);
/// ```
#[derive(Debug, Default)]
pub struct DayBuilder {
    config: AppConfig,
}

impl DayBuilder {
    /// Create a new day builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including day window and geometry settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Get the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse schedule source text.
    ///
    /// Clock times are converted to offsets from the start of the configured
    /// day window.
    ///
    /// # Errors
    ///
    /// Returns `DaylaneError::Config` for an invalid day window or geometry and
    /// `DaylaneError::Parse` for syntax or validation errors.
    pub fn parse(&self, source: &str) -> Result<Schedule, DaylaneError> {
        info!("Parsing schedule");

        self.config.validate().map_err(DaylaneError::Config)?;
        let day = self.config.day();

        let schedule = daylane_parser::parse(source, ParseConfig::new(day.origin()))
            .map_err(|err| DaylaneError::new_parse_error(err, source))?;

        debug!(entries = schedule.len(); "Schedule parsed successfully");
        trace!(schedule:?; "Parsed schedule");

        Ok(schedule)
    }

    /// Lay out the events of a schedule.
    ///
    /// Event identities are entry indices. Events reaching outside the day
    /// window are still laid out.
    pub fn lay_out(&self, schedule: &Schedule) -> DayLayout<usize, Minutes> {
        let events = schedule.events();
        self.warn_outside_window(&events);

        let layout = layout::lay_out(events);
        info!(
            events = layout.len(),
            clusters = layout.clusters().len();
            "Layout calculated"
        );
        layout
    }

    /// Lay out raw `(start, end)` offsets, identified by their index.
    ///
    /// # Errors
    ///
    /// Returns `DaylaneError::InvalidInterval` for the first pair whose start
    /// is not before its end.
    pub fn lay_out_offsets(
        &self,
        offsets: &[(Minutes, Minutes)],
    ) -> Result<DayLayout<usize, Minutes>, DaylaneError> {
        let events = offsets
            .iter()
            .enumerate()
            .map(|(index, &(start, end))| Event::new(index, start, end))
            .collect::<Result<Vec<_>, _>>()?;
        self.warn_outside_window(&events);

        let layout = layout::lay_out(events);
        info!(
            events = layout.len(),
            clusters = layout.clusters().len();
            "Layout calculated"
        );
        Ok(layout)
    }

    /// Project a layout to render geometry, in input order.
    pub fn place(&self, layout: &DayLayout<usize, Minutes>) -> Vec<Placement> {
        let projection = self.config.geometry().projection();

        let mut placements: Vec<_> = layout
            .events()
            .map(|event| Placement {
                geometry: event.geometry(&projection),
                event: event.clone(),
            })
            .collect();
        placements.sort_by_key(Placement::index);

        debug!(placements = placements.len(); "Geometry projected");
        placements
    }

    /// Height of the day view, in scaled units.
    pub fn container_height(&self) -> f64 {
        f64::from(self.config.day().span_minutes()) * self.config.geometry().scale()
    }

    fn warn_outside_window(&self, events: &[Event<usize, Minutes>]) {
        let day = self.config.day();
        for event in events.iter().filter(|event| !day.contains(event.interval())) {
            warn!(
                index = *event.id(),
                start = event.start(),
                end = event.end(),
                span = day.span_minutes();
                "Event reaches outside the day window"
            );
        }
    }
}
