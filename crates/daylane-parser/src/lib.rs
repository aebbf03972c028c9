//! # Daylane Parser
//!
//! Parser for the Daylane schedule format. A schedule lists the events of
//! one day, one per line:
//!
//! ```text
//! # Tuesday
//! commute: 30..150 "Commute"
//! review:  18:00..19:00 "Design review"
//! 560..620
//! ```
//!
//! ## Usage
//!
//! ```
//! # use daylane_parser::{parse, ParseConfig, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = "standup: 09:30..09:45 \"Daily standup\"\n540..600";
//!
//!     // Clock times are measured from 09:00
//!     let schedule = parse(source, ParseConfig::new(9 * 60))?;
//!     assert_eq!(schedule.len(), 2);
//!     assert_eq!(schedule.entries()[0].interval().start(), 30);
//!     Ok(())
//! }
//! ```

pub mod error;

mod parser;
mod span;
mod validate;

pub use parser::ParseConfig;
pub use span::Span;

use log::{debug, trace};

use daylane_core::schedule::Schedule;

use error::{DiagnosticCollector, ParseError};

/// Parse schedule source text.
///
/// Runs two phases and reports the diagnostics of both together:
///
/// 1. **Parse** - Read every line into raw entries, recovering after
///    malformed lines
/// 2. **Validate** - Check intervals and name uniqueness
///
/// # Errors
///
/// Returns a [`ParseError`] holding every diagnostic found if any line is
/// malformed or any entry fails validation.
pub fn parse(source: &str, config: ParseConfig) -> Result<Schedule, ParseError> {
    debug!(bytes = source.len(), origin = config.origin(); "Parsing schedule");

    let mut diagnostics = DiagnosticCollector::new();

    let raw_entries = parser::parse_entries(source, config, &mut diagnostics);
    trace!(raw_entries = raw_entries.len(); "Lines parsed");

    let entries = validate::validate_entries(&raw_entries, &mut diagnostics);

    diagnostics.finish()?;
    Ok(Schedule::new(entries))
}
