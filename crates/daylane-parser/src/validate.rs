//! Validation of parsed entries.
//!
//! Checks run on entries that parsed cleanly:
//! - every entry ends strictly after it starts (E200)
//! - entry names are unique (E201)

use indexmap::IndexMap;
use log::debug;

use daylane_core::{interval::Interval, schedule::Entry};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    parser::RawEntry,
    span::Span,
};

/// Validate raw entries and build schedule entries from the valid ones.
pub(crate) fn validate_entries(
    raw_entries: &[RawEntry<'_>],
    diagnostics: &mut DiagnosticCollector,
) -> Vec<Entry> {
    let mut names: IndexMap<&str, Span> = IndexMap::new();
    let mut entries = Vec::with_capacity(raw_entries.len());

    for raw in raw_entries {
        if let Some((name, span)) = raw.name {
            match names.get(name) {
                Some(first) => diagnostics.emit(
                    Diagnostic::error(format!("entry `{name}` is defined multiple times"))
                        .with_code(ErrorCode::E201)
                        .with_label(span, "duplicate name")
                        .with_secondary_label(*first, "first defined here")
                        .with_help("rename one of the entries"),
                ),
                None => {
                    names.insert(name, span);
                }
            }
        }

        match Interval::new(raw.start, raw.end) {
            Ok(interval) => entries.push(Entry::new(
                raw.name.map(|(name, _)| name.to_string()),
                raw.title.map(str::to_string),
                interval,
            )),
            Err(err) => {
                let message = if err.start() == err.end() {
                    "entry has no duration"
                } else {
                    "entry ends before it starts"
                };
                diagnostics.emit(
                    Diagnostic::error(message)
                        .with_code(ErrorCode::E200)
                        .with_label(raw.span, ErrorCode::E200.description())
                        .with_help("the end time must be later than the start time"),
                );
            }
        }
    }

    debug!(entries = entries.len(), named = names.len(); "Entries validated");
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw<'a>(name: Option<(&'a str, Span)>, start: i32, end: i32, span: Span) -> RawEntry<'a> {
        RawEntry {
            name,
            title: None,
            start,
            end,
            span,
        }
    }

    #[test]
    fn test_valid_entries() {
        let mut diagnostics = DiagnosticCollector::new();
        let entries = validate_entries(
            &[
                raw(Some(("commute", Span::new(0..7))), 30, 150, Span::new(0..16)),
                raw(None, 540, 600, Span::new(17..25)),
            ],
            &mut diagnostics,
        );

        assert!(diagnostics.finish().is_ok());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name(), Some("commute"));
        assert_eq!(entries[1].interval().start(), 540);
    }

    #[test]
    fn test_reversed_interval() {
        let mut diagnostics = DiagnosticCollector::new();
        let entries = validate_entries(&[raw(None, 90, 30, Span::new(0..6))], &mut diagnostics);

        assert!(entries.is_empty());
        let err = diagnostics.finish().unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E200));
        assert_eq!(err.diagnostics()[0].message(), "entry ends before it starts");
        assert_eq!(err.diagnostics()[0].labels()[0].span(), Span::new(0..6));
    }

    #[test]
    fn test_zero_length_interval() {
        let mut diagnostics = DiagnosticCollector::new();
        validate_entries(&[raw(None, 50, 50, Span::new(0..6))], &mut diagnostics);

        let err = diagnostics.finish().unwrap_err();
        assert_eq!(err.diagnostics()[0].message(), "entry has no duration");
    }

    #[test]
    fn test_duplicate_names() {
        let mut diagnostics = DiagnosticCollector::new();
        let entries = validate_entries(
            &[
                raw(Some(("lunch", Span::new(0..5))), 180, 240, Span::new(0..16)),
                raw(Some(("lunch", Span::new(17..22))), 240, 270, Span::new(17..33)),
            ],
            &mut diagnostics,
        );

        // Both intervals are valid, only the name clashes
        assert_eq!(entries.len(), 2);

        let err = diagnostics.finish().unwrap_err();
        let diag = &err.diagnostics()[0];
        assert_eq!(diag.code(), Some(ErrorCode::E201));
        assert_eq!(diag.labels()[0].span(), Span::new(17..22));
        assert!(diag.labels()[1].is_secondary());
        assert_eq!(diag.labels()[1].span(), Span::new(0..5));
    }
}
