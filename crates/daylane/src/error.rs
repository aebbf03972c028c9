//! Error types for Daylane operations.
//!
//! This module provides the main error type [`DaylaneError`] which wraps the
//! error conditions that can occur while reading and laying out a day.

use std::io;

use thiserror::Error;

use daylane_core::{interval::InvalidInterval, time::Minutes};
use daylane_parser::error::ParseError;

/// The main error type for Daylane operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the structured
/// diagnostics, so reports can point into it.
#[derive(Debug, Error)]
pub enum DaylaneError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error(transparent)]
    InvalidInterval(#[from] InvalidInterval<Minutes>),

    #[error("Config error: {0}")]
    Config(String),
}

impl DaylaneError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
