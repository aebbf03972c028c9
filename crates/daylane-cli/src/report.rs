//! TOML layout report written by the CLI.
//!
//! The report has a `[window]` table describing the day view and one
//! `[[events]]` table per schedule entry, in input order.

use serde::Serialize;

use daylane::{DayBuilder, Placement, schedule::Schedule, time::Minutes};

/// Layout report of one schedule.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    window: WindowReport,
    events: Vec<EventReport<'a>>,
}

#[derive(Debug, Serialize)]
struct WindowReport {
    start_hour: u8,
    end_hour: u8,
    height: f64,
}

#[derive(Debug, Serialize)]
struct EventReport<'a> {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    start: Minutes,
    end: Minutes,
    column: usize,
    column_count: usize,
    top: f64,
    height: f64,
    left: f64,
    width: f64,
}

impl<'a> Report<'a> {
    /// Build a report from placements of `schedule`'s events.
    pub fn new(builder: &DayBuilder, schedule: &'a Schedule, placements: &[Placement]) -> Self {
        let day = builder.config().day();
        let window = WindowReport {
            start_hour: day.start_hour(),
            end_hour: day.end_hour(),
            height: builder.container_height(),
        };

        let events = placements
            .iter()
            .map(|placement| {
                let entry = schedule.entry(placement.index());
                let event = placement.event();
                let geometry = placement.geometry();
                EventReport {
                    index: placement.index(),
                    name: entry.and_then(|entry| entry.name()),
                    title: entry.and_then(|entry| entry.title()),
                    start: event.start(),
                    end: event.end(),
                    column: event.column(),
                    column_count: event.column_count(),
                    top: geometry.top(),
                    height: geometry.height(),
                    left: geometry.left(),
                    width: geometry.width(),
                }
            })
            .collect();

        Self { window, events }
    }

    /// Render the report as a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
