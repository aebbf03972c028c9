//! Rendering of [`DaylaneError`] through miette.
//!
//! A parse failure becomes one report per schedule diagnostic, each pointing
//! into the schedule source. Any other failure becomes a single report with a
//! `daylane::<kind>` code and no source snippet.

use std::{error::Error, fmt};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceCode, SourceSpan};

use daylane::DaylaneError;
use daylane_parser::{Span, error::Diagnostic};

/// One schedule diagnostic paired with the source it was reported against.
#[derive(Debug)]
pub struct ScheduleDiagnostic<'a> {
    diag: &'a Diagnostic,
    src: &'a str,
}

impl<'a> ScheduleDiagnostic<'a> {
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Display for ScheduleDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diag.message())
    }
}

impl Error for ScheduleDiagnostic<'_> {}

impl MietteDiagnostic for ScheduleDiagnostic<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = self.diag.code()?;
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = self.diag.help()?;
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let message = Some(label.message().to_string());
            let span = source_span(label.span());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// A [`DaylaneError`] with nothing to point at in the schedule source.
#[derive(Debug)]
pub struct PlainError<'a>(&'a DaylaneError);

impl PlainError<'_> {
    /// Report code naming the kind of failure.
    fn kind(&self) -> &'static str {
        match self.0 {
            DaylaneError::Io(_) => "daylane::io",
            DaylaneError::Parse { .. } => "daylane::parse",
            DaylaneError::InvalidInterval(_) => "daylane::interval",
            DaylaneError::Config(_) => "daylane::config",
        }
    }
}

impl fmt::Display for PlainError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

impl Error for PlainError<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Error::source(self.0)
    }
}

impl MietteDiagnostic for PlainError<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.0 {
            DaylaneError::InvalidInterval(_) => Some(Box::new(
                "the end time must be later than the start time",
            )),
            _ => None,
        }
    }
}

/// A single miette report.
#[derive(Debug)]
pub enum Reportable<'a> {
    Diagnostic(ScheduleDiagnostic<'a>),
    Error(PlainError<'a>),
}

impl Reportable<'_> {
    fn inner(&self) -> &dyn MietteDiagnostic {
        match self {
            Reportable::Diagnostic(d) => d,
            Reportable::Error(e) => e,
        }
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Error::source(self.inner())
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().code()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().help()
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.inner().source_code()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.inner().labels()
    }
}

fn source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Split an error into the reports to render, in source order.
pub fn to_reportables(err: &DaylaneError) -> Vec<Reportable<'_>> {
    match err {
        DaylaneError::Parse { err, src } => err
            .diagnostics()
            .iter()
            .map(|diag| Reportable::Diagnostic(ScheduleDiagnostic::new(diag, src)))
            .collect(),
        _ => vec![Reportable::Error(PlainError(err))],
    }
}
