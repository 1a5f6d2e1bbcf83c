//! Tests for severity ordering and the emission gate.

use plume::{Level, should_emit};

#[test]
fn priority_table() {
    assert_eq!(Level::Error.priority(), 0);
    assert_eq!(Level::Warn.priority(), 1);
    assert_eq!(Level::Info.priority(), 2);
    assert_eq!(Level::Debug.priority(), 3);
}

#[test]
fn level_display() {
    assert_eq!(Level::Error.to_string(), "error");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Debug.to_string(), "debug");
}

#[test]
fn level_from_str() {
    assert_eq!("error".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
}

#[test]
fn level_from_str_invalid() {
    assert!("invalid".parse::<Level>().is_err());
}

#[test]
fn parse_or_default_is_permissive() {
    assert_eq!(Level::parse_or_default(Some("  ERROR ")), Level::Error);
    assert_eq!(Level::parse_or_default(Some("Debug")), Level::Debug);
    assert_eq!(Level::parse_or_default(Some("verbose")), Level::Info);
    assert_eq!(Level::parse_or_default(Some("")), Level::Info);
    assert_eq!(Level::parse_or_default(None), Level::Info);
}

#[test]
fn warn_threshold_admits_error_and_warn_only() {
    assert!(should_emit(Level::Error, Level::Warn));
    assert!(should_emit(Level::Warn, Level::Warn));
    assert!(!should_emit(Level::Info, Level::Warn));
    assert!(!should_emit(Level::Debug, Level::Warn));
}

#[test]
fn error_threshold_admits_error_only() {
    assert!(should_emit(Level::Error, Level::Error));
    assert!(!should_emit(Level::Warn, Level::Error));
    assert!(!should_emit(Level::Info, Level::Error));
    assert!(!should_emit(Level::Debug, Level::Error));
}

#[test]
fn debug_threshold_admits_everything() {
    for level in Level::all() {
        assert!(should_emit(level, Level::Debug));
    }
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}
