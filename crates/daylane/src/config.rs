//! Configuration types for Daylane day layouts.
//!
//! This module provides configuration structures that control the visible day
//! window and how layout records are projected to geometry. All types
//! implement [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining day and geometry settings.
//! - [`DayConfig`] - The visible day window and the clock origin of offsets.
//! - [`GeometryConfig`] - Vertical scale and width rounding of the [`Projection`].
//!
//! # Example
//!
//! ```
//! # use daylane::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.day().origin(), 540);
//! assert!(config.day().validate().is_ok());
//! ```

use serde::Deserialize;

use daylane_core::{
    geometry::{MAX_WIDTH_DECIMALS, Projection},
    interval::Interval,
    time::{LAST_HOUR, Minutes, hour_minutes},
};

/// Top-level application configuration combining day and geometry settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Day window section.
    #[serde(default)]
    day: DayConfig,

    /// Geometry section.
    #[serde(default)]
    geometry: GeometryConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified day and geometry configurations.
    pub fn new(day: DayConfig, geometry: GeometryConfig) -> Self {
        Self { day, geometry }
    }

    /// Returns the day window configuration.
    pub fn day(&self) -> &DayConfig {
        &self.day
    }

    /// Returns the geometry configuration.
    pub fn geometry(&self) -> &GeometryConfig {
        &self.geometry
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns the message of the first invalid section.
    pub fn validate(&self) -> Result<(), String> {
        self.day.validate()?;
        self.geometry.validate()
    }
}

/// The visible day window.
///
/// Offsets are measured in minutes from `start_hour`, and the window ends at
/// `end_hour`. Defaults to 09:00 to 21:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DayConfig {
    start_hour: u8,
    end_hour: u8,
}

impl Default for DayConfig {
    fn default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 21,
        }
    }
}

impl DayConfig {
    /// Creates a new [`DayConfig`].
    ///
    /// The window is not checked here; see [`DayConfig::validate`].
    pub fn new(start_hour: u8, end_hour: u8) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Returns the first hour of the window.
    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }

    /// Returns the hour the window ends at.
    pub fn end_hour(&self) -> u8 {
        self.end_hour
    }

    /// Minutes since midnight that offset zero stands for.
    pub fn origin(&self) -> Minutes {
        hour_minutes(self.start_hour)
    }

    /// Length of the window in minutes.
    pub fn span_minutes(&self) -> Minutes {
        hour_minutes(self.end_hour) - hour_minutes(self.start_hour)
    }

    /// Check whether an interval of offsets lies inside the window.
    pub fn contains(&self, interval: Interval<Minutes>) -> bool {
        interval.start() >= 0 && interval.end() <= self.span_minutes()
    }

    /// Check that the window is non-empty and ends no later than midnight.
    ///
    /// # Errors
    ///
    /// Returns a message describing the problem if `start_hour >= end_hour` or
    /// `end_hour > 24`.
    pub fn validate(&self) -> Result<(), String> {
        if self.end_hour > LAST_HOUR {
            return Err(format!(
                "Invalid day window in config: end_hour {} is past {LAST_HOUR}",
                self.end_hour
            ));
        }
        if self.start_hour >= self.end_hour {
            return Err(format!(
                "Invalid day window in config: start_hour {} is not before end_hour {}",
                self.start_hour, self.end_hour
            ));
        }
        Ok(())
    }
}

/// Projection settings for geometry output.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Vertical units per minute.
    scale: f64,

    /// Decimal places kept in column widths.
    width_decimals: u32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        let projection = Projection::default();
        Self {
            scale: projection.scale(),
            width_decimals: projection.width_decimals(),
        }
    }
}

impl GeometryConfig {
    /// Creates a new [`GeometryConfig`].
    pub fn new(scale: f64, width_decimals: u32) -> Self {
        Self {
            scale,
            width_decimals,
        }
    }

    /// Returns the vertical scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the number of decimal places kept in column widths.
    pub fn width_decimals(&self) -> u32 {
        self.width_decimals
    }

    /// Check that the scale is a positive finite number and that widths are
    /// rounded to at most [`MAX_WIDTH_DECIMALS`] places.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending field.
    pub fn validate(&self) -> Result<(), String> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(format!(
                "Invalid geometry in config: scale {} must be a positive number",
                self.scale
            ));
        }
        if self.width_decimals > MAX_WIDTH_DECIMALS {
            return Err(format!(
                "Invalid geometry in config: width_decimals {} is above {MAX_WIDTH_DECIMALS}",
                self.width_decimals
            ));
        }
        Ok(())
    }

    /// Returns the [`Projection`] described by this configuration.
    pub fn projection(&self) -> Projection {
        Projection::new(self.scale, self.width_decimals)
    }
}
