//! Error codes for the Daylane diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Syntax errors
//! - `E1xx` - Time value errors
//! - `E2xx` - Validation errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Syntax Errors (E0xx)
    // =========================================================================
    /// Unexpected input.
    ///
    /// A line is neither blank, a comment, nor an event entry.
    E001,

    /// Unterminated title.
    ///
    /// A title was opened with a quote but not closed on the same line.
    E002,

    /// Missing range separator.
    ///
    /// The start time is not followed by `..`.
    E003,

    // =========================================================================
    // Time Errors (E1xx)
    // =========================================================================
    /// Invalid clock time.
    ///
    /// Clock times use `H:MM` or `HH:MM` with hours up to 24 and minutes
    /// below 60; `24:00` is the latest time.
    E100,

    /// Offset out of range.
    ///
    /// An integer offset does not fit the minute offset type.
    E101,

    /// Missing time.
    ///
    /// The range separator is not followed by an end time.
    E102,

    // =========================================================================
    // Validation Errors (E2xx)
    // =========================================================================
    /// Invalid interval.
    ///
    /// An entry does not end strictly after it starts.
    E200,

    /// Duplicate entry name.
    ///
    /// An entry with this name has already been defined.
    E201,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Syntax errors
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            // Time errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            // Validation errors
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Syntax errors
            ErrorCode::E001 => "unexpected input",
            ErrorCode::E002 => "unterminated title",
            ErrorCode::E003 => "missing range separator",
            // Time errors
            ErrorCode::E100 => "invalid clock time",
            ErrorCode::E101 => "offset out of range",
            ErrorCode::E102 => "missing time",
            // Validation errors
            ErrorCode::E200 => "invalid interval",
            ErrorCode::E201 => "duplicate entry name",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E201.to_string(), "E201");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E002.description(), "unterminated title");
        assert_eq!(ErrorCode::E200.description(), "invalid interval");
    }
}
