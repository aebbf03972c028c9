//! Collector for accumulating diagnostics during parsing.

use crate::error::{Diagnostic, ParseError};

/// A collector for accumulating diagnostics so that every problem in a
/// schedule is reported in a single pass.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection and return a result.
    ///
    /// Returns `Err(ParseError)` with all diagnostics if any was emitted.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.diagnostics.is_empty() {
            Ok(())
        } else {
            Err(ParseError::new(self.diagnostics))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorCode, span::Span};

    #[test]
    fn test_collector_new_finish_ok() {
        assert!(DiagnosticCollector::new().finish().is_ok());
    }

    #[test]
    fn test_collector_single_diagnostic_fails() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::error("unexpected input"));

        let err = collector.finish().unwrap_err();
        assert_eq!(err.to_string(), "error: unexpected input");
    }

    #[test]
    fn test_collector_keeps_all_diagnostics() {
        let mut collector = DiagnosticCollector::new();

        collector.emit(
            Diagnostic::error("invalid clock time")
                .with_code(ErrorCode::E100)
                .with_label(Span::new(10..15), "here"),
        );
        collector.emit(Diagnostic::error("entry has no duration").with_code(ErrorCode::E200));

        let err = collector.finish().unwrap_err();
        assert_eq!(err.diagnostics().len(), 2);
        assert_eq!(err.diagnostics()[0].message(), "invalid clock time");
        assert_eq!(err.diagnostics()[1].code(), Some(ErrorCode::E200));
    }
}
