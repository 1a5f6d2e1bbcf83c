//! Tests for the plain and styled text strategies, rendered at fixed timestamps.

use chrono::{Local, TimeZone};
use plume::{Level, LogRecord, Message, Meta, MetaValue, PlainOutput, StyledOutput};

fn record(level: Level, message: Message, meta: Option<Meta>) -> LogRecord {
    LogRecord {
        timestamp: Local.with_ymd_and_hms(2024, 5, 17, 7, 8, 9).unwrap(),
        name: "App".to_string(),
        level,
        message,
        meta,
    }
}

#[test]
fn plain_message_with_metadata() {
    let rec = record(
        Level::Info,
        Message::from("Starting"),
        Some(Meta::new().field("usage", 95)),
    );
    assert_eq!(
        PlainOutput::new().format(&rec),
        "[07:08:09] [App/INFO] Starting\n  usage: 95"
    );
}

#[test]
fn plain_message_without_metadata() {
    let rec = record(Level::Warn, Message::from("Careful"), None);
    assert_eq!(PlainOutput::new().format(&rec), "[07:08:09] [App/WARN] Careful");
}

#[test]
fn plain_empty_metadata_renders_like_none() {
    let rec = record(Level::Info, Message::from("hi"), Some(Meta::new()));
    assert_eq!(PlainOutput::new().format(&rec), "[07:08:09] [App/INFO] hi");
}

#[test]
fn plain_strips_magic_tags_from_message() {
    let rec = record(
        Level::Debug,
        Message::from("run <hl sql>SELECT 1</hl>"),
        None,
    );
    assert_eq!(
        PlainOutput::new().format(&rec),
        "[07:08:09] [App/DEBUG] run SELECT 1"
    );
}

#[test]
fn plain_structured_message_folds_under_msg_key() {
    let data = MetaValue::Map(vec![("a".to_string(), MetaValue::from(1))]);
    let rec = record(
        Level::Info,
        Message::Data(data),
        Some(Meta::new().field("b", 2)),
    );
    assert_eq!(
        PlainOutput::new().format(&rec),
        "[07:08:09] [App/INFO]\n  msg:\n    a: 1\n  b: 2"
    );
}

#[test]
fn plain_scalar_message_value() {
    let rec = record(Level::Info, Message::Data(MetaValue::from(42)), None);
    assert_eq!(
        PlainOutput::new().format(&rec),
        "[07:08:09] [App/INFO]\n  msg: 42"
    );
}

#[test]
fn styled_header_colors_each_field() {
    let rec = record(Level::Info, Message::from("Starting"), None);
    let out = StyledOutput::new().format(&rec);

    // timestamp accent, name accent, severity-colored level token
    assert!(out.contains("\x1b[38;2;98;114;164m07:08:09\x1b[0m"));
    assert!(out.contains("\x1b[38;2;189;147;249mApp\x1b[0m"));
    assert!(out.contains("\x1b[38;2;139;173;253mINFO\x1b[0m"));
}

#[test]
fn styled_level_colors_follow_severity() {
    let cases = [
        (Level::Debug, "\x1b[38;2;139;233;253mDEBUG"),
        (Level::Info, "\x1b[38;2;139;173;253mINFO"),
        (Level::Warn, "\x1b[38;2;241;250;140mWARN"),
        (Level::Error, "\x1b[38;2;255;85;85mERROR"),
    ];
    for (level, expected) in cases {
        let rec = record(level, Message::from("x"), None);
        let out = StyledOutput::new().format(&rec);
        assert!(out.contains(expected), "{level}: {out:?}");
    }
}

#[test]
fn styled_message_is_wrapped_in_severity_color() {
    let rec = record(Level::Error, Message::from("boom"), None);
    let out = StyledOutput::new().format(&rec);
    assert!(out.contains("\x1b[38;2;255;85;85mboom\x1b[0m"));
}

#[test]
fn styled_resolves_markup_before_severity_wrap() {
    let rec = record(Level::Info, Message::from("<chalk bold>hi</chalk>"), None);
    let out = StyledOutput::new().format(&rec);
    assert!(!out.contains("<chalk"));
    assert!(out.contains("\x1b[1mhi\x1b[0m"));
}

#[test]
fn styled_metadata_block_keeps_margin() {
    let rec = record(
        Level::Info,
        Message::from("up"),
        Some(Meta::new().field("usage", 95)),
    );
    let out = StyledOutput::new().format(&rec);
    let block_line = out.lines().nth(1).unwrap();
    assert!(block_line.starts_with("  usage:"));
}

#[test]
fn header_shape_is_stable_across_strategies() {
    let rec = record(Level::Info, Message::from("x"), None);
    let plain = PlainOutput::new().format(&rec);
    assert!(plain.starts_with("[07:08:09] [App/INFO]"));
}
