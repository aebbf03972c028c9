//! CLI logic for the Daylane layout tool.
//!
//! This module contains the core CLI logic: read a schedule, lay it out and
//! write the layout report.

pub mod error_adapter;

mod args;
mod config;
mod report;

pub use args::Args;

use std::{fs, io};

use log::info;

use daylane::{DayBuilder, DaylaneError};

use report::Report;

/// Run the Daylane CLI application
///
/// This function processes the input schedule through the Daylane pipeline
/// and writes the resulting TOML layout report to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `DaylaneError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing and validation errors
pub fn run(args: &Args) -> Result<(), DaylaneError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing schedule"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DayBuilder::new(app_config);
    let schedule = builder.parse(&source)?;
    let layout = builder.lay_out(&schedule);
    let placements = builder.place(&layout);

    let report = Report::new(&builder, &schedule, &placements)
        .to_toml()
        .map_err(io::Error::other)?;

    fs::write(&args.output, report)?;

    info!(output_file = args.output; "Layout report written successfully");

    Ok(())
}
