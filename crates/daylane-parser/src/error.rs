//! Error and diagnostic system for the Daylane parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error message with optional error code, multiple source
//! locations, and help text. Multiple diagnostics are wrapped in [`ParseError`]
//! for returning from [`parse`](crate::parse).
//!
//! # Example
//!
//! ```
//! # use daylane_parser::error::{Diagnostic, ErrorCode};
//! # use daylane_parser::Span;
//!
//! let span = Span::new(40..58);
//! let original_span = Span::new(0..20);
//!
//! let diag = Diagnostic::error("entry `lunch` is defined multiple times")
//!     .with_code(ErrorCode::E201)
//!     .with_label(span, "duplicate name")
//!     .with_secondary_label(original_span, "first defined here")
//!     .with_help("rename one of the entries");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
