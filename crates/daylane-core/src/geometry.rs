//! Render geometry derived from layout records.
//!
//! The vertical axis is linear in the offset unit; the horizontal axis is
//! expressed in percent of the day view width:
//!
//! - `top = start * scale`
//! - `height = (end - start) * scale`
//! - `width = round(100 / column_count)` to [`Projection::width_decimals`] places
//! - `left = column * width`
//!
//! `left` is computed from the rounded width, so the geometry of every event
//! is reproducible from `(start, end, column, column_count)` alone.

use serde::Serialize;

/// Most decimal places a column width is rounded to. Larger values are clamped.
pub const MAX_WIDTH_DECIMALS: u32 = 6;

/// Position and size of one event in the day view.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Geometry {
    top: f64,
    height: f64,
    left: f64,
    width: f64,
}

impl Geometry {
    /// Create a new geometry from its components.
    pub fn new(top: f64, height: f64, left: f64, width: f64) -> Self {
        Self {
            top,
            height,
            left,
            width,
        }
    }

    /// Get the distance from the top of the day view, in scaled units.
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Get the height, in scaled units.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Get the horizontal offset, in percent of the view width.
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Get the width, in percent of the view width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Get the bottom edge, in scaled units.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Maps layout records onto [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    scale: f64,
    width_decimals: u32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            scale: 1.0,
            width_decimals: 2,
        }
    }
}

impl Projection {
    /// Create a projection.
    ///
    /// # Arguments
    ///
    /// * `scale` - Vertical units per offset unit (pixels per minute for a
    ///   minute-based day).
    /// * `width_decimals` - Decimal places kept when rounding column widths,
    ///   clamped to [`MAX_WIDTH_DECIMALS`].
    pub fn new(scale: f64, width_decimals: u32) -> Self {
        Self {
            scale,
            width_decimals: width_decimals.min(MAX_WIDTH_DECIMALS),
        }
    }

    /// Get the vertical scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Get the number of decimal places kept in column widths.
    pub fn width_decimals(&self) -> u32 {
        self.width_decimals
    }

    /// Width of one column, in percent, for a cluster of `column_count` columns.
    ///
    /// Rounds half up. A zero column count is treated as a single column.
    pub fn column_width(&self, column_count: usize) -> f64 {
        let factor = 10f64.powi(self.width_decimals as i32);
        let raw = 100.0 / column_count.max(1) as f64;
        (raw * factor + 0.5).floor() / factor
    }

    /// Project raw layout values to geometry.
    pub fn project(&self, start: f64, end: f64, column: usize, column_count: usize) -> Geometry {
        let width = self.column_width(column_count);
        Geometry {
            top: start * self.scale,
            height: (end - start) * self.scale,
            left: column as f64 * width,
            width,
        }
    }
}
