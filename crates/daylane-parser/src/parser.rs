//! Line parser for schedule source text.
//!
//! Each line is blank, a `#` comment, or one entry:
//!
//! ```text
//! [name:] <time>..<time> ["title"] [# comment]
//! ```
//!
//! A time is either an integer minute offset (used verbatim, may be
//! negative) or a clock time `H:MM`/`HH:MM`, converted to minutes relative
//! to [`ParseConfig::origin`].
//!
//! Parsing recovers at line granularity: a malformed line produces one
//! diagnostic and parsing resumes on the next line.

use winnow::{
    Parser as _,
    ascii::{digit1, line_ending},
    combinator::{alt, cut_err, eof, not, opt, preceded, terminated},
    error::{AddContext, ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{one_of, take_till, take_while},
};

use daylane_core::time::{Minutes, clock_minutes};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    span::Span,
};

/// Configuration for turning source times into offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseConfig {
    origin: Minutes,
}

impl ParseConfig {
    /// Create a parse configuration.
    ///
    /// # Arguments
    ///
    /// * `origin` - Minutes since midnight that map to offset zero. Clock
    ///   times are shifted by this amount; integer offsets are not.
    pub fn new(origin: Minutes) -> Self {
        Self { origin }
    }

    /// Get the clock origin, in minutes since midnight.
    pub fn origin(&self) -> Minutes {
        self.origin
    }
}

/// An entry as written in the source, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawEntry<'a> {
    pub name: Option<(&'a str, Span)>,
    pub title: Option<&'a str>,
    pub start: Minutes,
    pub end: Minutes,
    pub span: Span,
}

/// Diagnostic details attached to winnow errors via `.context()`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SyntaxDiagnostic {
    code: ErrorCode,
    message: &'static str,
    help: Option<&'static str>,
    /// The error span covers from `start` to the error position.
    start: usize,
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError<SyntaxDiagnostic>>;

const ENTRY_HELP: &str = "write entries as `name: start..end \"title\"`, e.g. `standup: 09:30..09:45`";

fn syntax(
    code: ErrorCode,
    message: &'static str,
    help: Option<&'static str>,
    start: usize,
) -> SyntaxDiagnostic {
    SyntaxDiagnostic {
        code,
        message,
        help,
        start,
    }
}

/// Create a Cut error carrying `diagnostic` at the current position.
fn cut_with(input: &Input<'_>, diagnostic: SyntaxDiagnostic) -> ErrMode<ContextError<SyntaxDiagnostic>> {
    ErrMode::Cut(ContextError::new().add_context(input, &input.checkpoint(), diagnostic))
}

/// Parse spaces and tabs.
fn blank(input: &mut Input<'_>) -> IResult<()> {
    take_while(0.., [' ', '\t']).void().parse_next(input)
}

/// Parse a `#` comment up to the end of the line.
fn comment(input: &mut Input<'_>) -> IResult<()> {
    ('#', take_till(0.., ['\n', '\r'])).void().parse_next(input)
}

/// Parse an entry name with its span.
fn entry_name<'a>(input: &mut Input<'a>) -> IResult<(&'a str, Span)> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| {
            c.is_ascii_alphanumeric() || c == '_' || c == '-'
        }),
    )
        .take()
        .with_span()
        .map(|(name, range)| (name, Span::new(range)))
        .parse_next(input)
}

/// Parse a clock time `H:MM` or `HH:MM` into an offset from `origin`.
///
/// Commits once the `:` is seen.
fn clock_time(input: &mut Input<'_>, origin: Minutes) -> IResult<Minutes> {
    let start = input.current_token_start();
    let invalid = syntax(
        ErrorCode::E100,
        "invalid clock time",
        Some("clock times use `HH:MM`, from `00:00` to `24:00`"),
        start,
    );

    let hours = take_while(1..=2, |c: char| c.is_ascii_digit()).parse_next(input)?;
    ':'.parse_next(input)?;
    let minutes = cut_err(terminated(
        take_while(2..=2, |c: char| c.is_ascii_digit()),
        not(one_of(|c: char| c.is_ascii_digit())),
    ))
    .context(invalid.clone())
    .parse_next(input)?;

    let hours = hours.parse::<u8>().map_err(|_| cut_with(input, invalid.clone()))?;
    let minutes = minutes
        .parse::<u8>()
        .map_err(|_| cut_with(input, invalid.clone()))?;

    clock_minutes(hours, minutes)
        .map(|since_midnight| since_midnight - origin)
        .ok_or_else(|| cut_with(input, invalid))
}

/// Parse an integer minute offset.
fn offset(input: &mut Input<'_>) -> IResult<Minutes> {
    let start = input.current_token_start();
    let digits = (opt('-'), digit1).take().parse_next(input)?;

    digits.parse::<Minutes>().map_err(|_| {
        cut_with(
            input,
            syntax(
                ErrorCode::E101,
                "offset out of range",
                Some("offsets must fit in a 32-bit signed integer"),
                start,
            ),
        )
    })
}

/// Parse a time, clock notation first.
fn time(input: &mut Input<'_>, origin: Minutes) -> IResult<Minutes> {
    alt((|input: &mut Input<'_>| clock_time(input, origin), offset)).parse_next(input)
}

/// Parse a double-quoted title on a single line.
fn entry_title<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    let start = input.current_token_start();
    preceded(
        '"',
        cut_err(terminated(take_till(0.., ['"', '\n', '\r']), '"')).context(syntax(
            ErrorCode::E002,
            "unterminated title",
            Some("add a closing `\"` before the end of the line"),
            start,
        )),
    )
    .parse_next(input)
}

/// Parse one entry: `[name:] start..end ["title"]`.
fn entry<'a>(input: &mut Input<'a>, origin: Minutes) -> IResult<RawEntry<'a>> {
    let entry_start = input.current_token_start();

    let name = opt(terminated(entry_name, (blank, ':', blank))).parse_next(input)?;

    let start_pos = input.current_token_start();
    let start = if name.is_some() {
        // A name commits the line to being an entry
        cut_err(|input: &mut Input<'_>| time(input, origin))
            .context(syntax(
                ErrorCode::E102,
                "expected a start time",
                Some(ENTRY_HELP),
                start_pos,
            ))
            .parse_next(input)?
    } else {
        time(input, origin)?
    };

    blank(input)?;
    let separator_pos = input.current_token_start();
    cut_err("..")
        .context(syntax(
            ErrorCode::E003,
            "expected `..` after the start time",
            Some(ENTRY_HELP),
            separator_pos,
        ))
        .parse_next(input)?;
    blank(input)?;

    let end_pos = input.current_token_start();
    let end = cut_err(|input: &mut Input<'_>| time(input, origin))
        .context(syntax(
            ErrorCode::E102,
            "expected an end time",
            Some(ENTRY_HELP),
            end_pos,
        ))
        .parse_next(input)?;

    let title = opt(preceded(blank, entry_title)).parse_next(input)?;
    let entry_end = input.current_token_start();

    Ok(RawEntry {
        name,
        title,
        start,
        end,
        span: Span::new(entry_start..entry_end),
    })
}

/// Parse one line, including its line ending.
fn line<'a>(input: &mut Input<'a>, origin: Minutes) -> IResult<Option<RawEntry<'a>>> {
    blank(input)?;
    let parsed = opt(|input: &mut Input<'a>| entry(input, origin)).parse_next(input)?;
    blank(input)?;
    opt(comment).parse_next(input)?;

    let rest_pos = input.current_token_start();
    cut_err(alt((line_ending, eof)))
        .context(syntax(
            ErrorCode::E001,
            "unexpected input",
            Some(ENTRY_HELP),
            rest_pos,
        ))
        .parse_next(input)?;

    Ok(parsed)
}

/// Skip the remainder of the current line, including its line ending.
fn skip_line(input: &mut Input<'_>) {
    let _: ModalResult<&str> = take_till(0.., ['\n']).parse_next(input);
    let _: ModalResult<Option<char>> = opt('\n').parse_next(input);
}

/// Line parser that accumulates entries and diagnostics.
struct ScheduleParser<'a, 'd> {
    source_len: usize,
    origin: Minutes,
    entries: Vec<RawEntry<'a>>,
    diagnostics: &'d mut DiagnosticCollector,
}

impl<'a, 'd> ScheduleParser<'a, 'd> {
    fn new(source_len: usize, origin: Minutes, diagnostics: &'d mut DiagnosticCollector) -> Self {
        Self {
            source_len,
            origin,
            entries: Vec::new(),
            diagnostics,
        }
    }

    /// Parse every line, collecting entries and errors.
    fn parse_lines(&mut self, mut input: Input<'a>) {
        while !input.is_empty() {
            match line(&mut input, self.origin) {
                Ok(Some(entry)) => self.entries.push(entry),
                Ok(None) => {}
                Err(e) => {
                    let error_pos = input.current_token_start();
                    let diagnostic = self.convert_err_mode(e, error_pos);
                    self.diagnostics.emit(diagnostic);

                    skip_line(&mut input);
                }
            }
        }
    }

    /// Convert an ErrMode and error position to a Diagnostic.
    ///
    /// Uses the innermost `SyntaxDiagnostic` context; falls back to E001
    /// (unexpected input) when none is attached.
    fn convert_err_mode(
        &self,
        err: ErrMode<ContextError<SyntaxDiagnostic>>,
        error_pos: usize,
    ) -> Diagnostic {
        let context_error = match err {
            ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
            ErrMode::Incomplete(_) => ContextError::new(),
        };

        if let Some(SyntaxDiagnostic {
            code,
            message,
            help,
            start,
        }) = context_error.context().next()
        {
            let span = self.label_span(*start, error_pos);

            let mut diag = Diagnostic::error(*message)
                .with_code(*code)
                .with_label(span, code.description());
            if let Some(h) = help {
                diag = diag.with_help(*h);
            }
            return diag;
        }

        let span = self.label_span(error_pos, error_pos);
        Diagnostic::error("unexpected input")
            .with_code(ErrorCode::E001)
            .with_label(span, ErrorCode::E001.description())
    }

    /// Span from `start` to `end`, at least one byte wide when the source allows.
    fn label_span(&self, start: usize, end: usize) -> Span {
        let end = end.max(start.saturating_add(1)).min(self.source_len);
        Span::new(start..end)
    }
}

/// Parse all entries of `source`, emitting syntax errors to `diagnostics`.
///
/// Lines that fail to parse are reported and skipped; the entries of every
/// other line are returned in source order.
pub(crate) fn parse_entries<'a>(
    source: &'a str,
    config: ParseConfig,
    diagnostics: &mut DiagnosticCollector,
) -> Vec<RawEntry<'a>> {
    let mut parser = ScheduleParser::new(source.len(), config.origin(), diagnostics);
    parser.parse_lines(LocatingSlice::new(source));
    parser.entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(source: &str) -> Vec<RawEntry<'_>> {
        parse_with_origin(source, 0)
    }

    fn parse_with_origin(source: &str, origin: Minutes) -> Vec<RawEntry<'_>> {
        let mut diagnostics = DiagnosticCollector::new();
        let entries = parse_entries(source, ParseConfig::new(origin), &mut diagnostics);
        assert!(
            diagnostics.finish().is_ok(),
            "Expected no errors for: {source:?}"
        );
        entries
    }

    fn parse_errors(source: &str) -> Vec<Diagnostic> {
        let mut diagnostics = DiagnosticCollector::new();
        let _ = parse_entries(source, ParseConfig::default(), &mut diagnostics);
        diagnostics
            .finish()
            .expect_err("Expected errors")
            .diagnostics()
            .to_vec()
    }

    #[test]
    fn test_offset_entry() {
        let entries = parse_ok("30..150");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].start, 30);
        assert_eq!(entries[0].end, 150);
        assert!(entries[0].name.is_none());
        assert!(entries[0].title.is_none());
        assert_eq!(entries[0].span, Span::new(0..7));
    }

    #[test]
    fn test_negative_offsets() {
        let entries = parse_ok("-60 .. -15");

        assert_eq!(entries[0].start, -60);
        assert_eq!(entries[0].end, -15);
    }

    #[test]
    fn test_named_entry_with_title() {
        let entries = parse_ok("standup: 570..585 \"Daily standup\"");

        let (name, span) = entries[0].name.expect("name");
        assert_eq!(name, "standup");
        assert_eq!(span, Span::new(0..7));
        assert_eq!(entries[0].title, Some("Daily standup"));
        assert_eq!(entries[0].span.end(), 33);
    }

    #[test]
    fn test_clock_times_relative_to_origin() {
        let entries = parse_with_origin("09:30..11:00\n9:00..9:15", 540);

        assert_eq!(entries[0].start, 30);
        assert_eq!(entries[0].end, 120);
        assert_eq!(entries[1].start, 0);
        assert_eq!(entries[1].end, 15);
    }

    #[test]
    fn test_blank_lines_and_comments() {
        let source = "# morning\n\n  30..150   # commute\r\n\t\n540..600\n";
        let entries = parse_ok(source);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].start, 540);
    }

    #[test]
    fn test_empty_source() {
        assert!(parse_ok("").is_empty());
    }

    #[test]
    fn test_invalid_clock_time() {
        let errors = parse_errors("10:75..11:00");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code(), Some(ErrorCode::E100));
        assert_eq!(errors[0].labels()[0].span(), Span::new(0..5));
    }

    #[test]
    fn test_clock_time_past_midnight() {
        let errors = parse_errors("23:00..24:30");

        assert_eq!(errors[0].code(), Some(ErrorCode::E100));
    }

    #[test]
    fn test_missing_separator() {
        let errors = parse_errors("lunch: 12:00 13:00");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code(), Some(ErrorCode::E003));
    }

    #[test]
    fn test_missing_end_time() {
        let errors = parse_errors("30..");

        assert_eq!(errors[0].code(), Some(ErrorCode::E102));
    }

    #[test]
    fn test_named_entry_without_time() {
        let errors = parse_errors("lunch: noon..13:00");

        assert_eq!(errors[0].code(), Some(ErrorCode::E102));
        assert_eq!(errors[0].message(), "expected a start time");
    }

    #[test]
    fn test_unterminated_title() {
        let errors = parse_errors("30..60 \"Coffee\n90..120");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code(), Some(ErrorCode::E002));
    }

    #[test]
    fn test_offset_out_of_range() {
        let errors = parse_errors("0..99999999999");

        assert_eq!(errors[0].code(), Some(ErrorCode::E101));
    }

    #[test]
    fn test_unexpected_input() {
        let errors = parse_errors("hello world");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code(), Some(ErrorCode::E001));
        assert_eq!(errors[0].labels()[0].span(), Span::new(0..1));
    }

    #[test]
    fn test_trailing_garbage() {
        let errors = parse_errors("30..60 extra");

        assert_eq!(errors[0].code(), Some(ErrorCode::E001));
        assert_eq!(errors[0].labels()[0].span().start(), 7);
    }

    #[test]
    fn test_recovers_on_next_line() {
        let mut diagnostics = DiagnosticCollector::new();
        let source = "10:75..11:00\n30..150\nbad\n540..600";
        let entries = parse_entries(source, ParseConfig::default(), &mut diagnostics);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].start, 30);
        assert_eq!(entries[1].start, 540);

        let err = diagnostics.finish().unwrap_err();
        assert_eq!(err.diagnostics().len(), 2);
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E100));
        assert_eq!(err.diagnostics()[1].code(), Some(ErrorCode::E001));
    }
}
