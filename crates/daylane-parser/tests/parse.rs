use daylane_parser::{ParseConfig, Span, error::ErrorCode, parse};

#[test]
fn test_sample_day() {
    let source = r#"
        # The sample day, offsets in minutes from 09:00
        30..150
        540..600
        560..620
        610..670
    "#;

    let schedule = parse(source, ParseConfig::default()).expect("Failed to parse");

    let intervals: Vec<_> = schedule
        .entries()
        .iter()
        .map(|entry| (entry.interval().start(), entry.interval().end()))
        .collect();
    assert_eq!(intervals, vec![(30, 150), (540, 600), (560, 620), (610, 670)]);
}

#[test]
fn test_named_clock_entries() {
    let source = r#"
        standup: 09:30..09:45 "Daily standup"
        lunch:   12:00..13:00 "Lunch"   # team lunch
        review:  18:00..19:00
    "#;

    let schedule = parse(source, ParseConfig::new(9 * 60)).expect("Failed to parse");

    assert_eq!(schedule.len(), 3);

    let standup = &schedule.entries()[0];
    assert_eq!(standup.name(), Some("standup"));
    assert_eq!(standup.title(), Some("Daily standup"));
    assert_eq!(standup.interval().start(), 30);
    assert_eq!(standup.interval().end(), 45);

    let lunch = &schedule.entries()[1];
    assert_eq!(lunch.title(), Some("Lunch"));
    assert_eq!(lunch.interval().start(), 180);

    let review = &schedule.entries()[2];
    assert_eq!(review.title(), None);
    assert_eq!(review.interval().end(), 600);
}

#[test]
fn test_events_follow_source_order() {
    let schedule = parse("610..670\n30..150", ParseConfig::default()).expect("Failed to parse");

    let events = schedule.events();
    assert_eq!(*events[0].id(), 0);
    assert_eq!(events[0].start(), 610);
    assert_eq!(*events[1].id(), 1);
    assert_eq!(events[1].start(), 30);
}

#[test]
fn test_reports_all_errors_in_one_pass() {
    let source = "\
lunch: 12:00..13:00
10:61..11:00
review: 11:00..10:30
lunch: 13:00..13:30
";

    let err = parse(source, ParseConfig::default()).expect_err("Expected errors");
    let codes: Vec<_> = err.diagnostics().iter().map(|d| d.code()).collect();

    assert_eq!(
        codes,
        vec![
            Some(ErrorCode::E100),
            Some(ErrorCode::E200),
            Some(ErrorCode::E201),
        ]
    );
}

#[test]
fn test_duplicate_name_labels() {
    let source = "lunch: 100..160\nlunch: 200..230";

    let err = parse(source, ParseConfig::default()).expect_err("Expected errors");
    let diag = &err.diagnostics()[0];

    assert_eq!(diag.message(), "entry `lunch` is defined multiple times");
    assert_eq!(diag.labels()[0].span(), Span::new(16..21));
    assert_eq!(diag.labels()[1].span(), Span::new(0..5));
}

#[test]
fn test_error_display() {
    let err = parse("30..30", ParseConfig::default()).expect_err("Expected errors");

    assert_eq!(err.to_string(), "error[E200]: entry has no duration");
}
