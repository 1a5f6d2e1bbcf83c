//! Tests for the magic-tag engine and its two resolvers.

use plume::fmt::{StripResolver, StyledResolver, substitute};
use plume::internal;
use std::sync::{Arc, Mutex};

#[test]
fn strip_returns_body_verbatim() {
    assert_eq!(
        substitute("<hl sql>SELECT 1</hl>", &StripResolver),
        "SELECT 1"
    );
}

#[test]
fn strip_keeps_surrounding_text() {
    assert_eq!(
        substitute("run <hl sql>SELECT 1</hl> now", &StripResolver),
        "run SELECT 1 now"
    );
}

#[test]
fn styled_hl_applies_ansi_and_drops_markers() {
    let out = substitute("<hl sql>SELECT 1</hl>", &StyledResolver::new());
    assert!(out.contains("SELECT"));
    assert!(out.contains('1'));
    assert!(out.contains("\x1b["));
    assert!(!out.contains("<hl"));
    assert_ne!(out, "<hl sql>SELECT 1</hl>");
}

#[test]
fn mismatched_closer_passes_through_unchanged() {
    let input = "<hl sql>SELECT 1</foo>";
    assert_eq!(substitute(input, &StripResolver), input);
    assert_eq!(substitute(input, &StyledResolver::new()), input);
}

#[test]
fn missing_closer_passes_through_unchanged() {
    let input = "<chalk green>never closed";
    assert_eq!(substitute(input, &StripResolver), input);
}

#[test]
fn cross_name_closer_is_not_a_match() {
    let input = "<hl sql>SELECT 1</chalk>";
    assert_eq!(substitute(input, &StripResolver), input);
}

#[test]
fn multiple_tags_resolve_in_one_pass() {
    let out = substitute(
        "a <hl sql>SELECT 1</hl> b <chalk green>ok</chalk> c",
        &StripResolver,
    );
    assert_eq!(out, "a SELECT 1 b ok c");
}

#[test]
fn matching_is_non_greedy() {
    // The first closer ends the first tag; the rest is scanned separately.
    let out = substitute("<hl sql>one</hl> mid <hl sql>two</hl>", &StripResolver);
    assert_eq!(out, "one mid two");
}

#[test]
fn unknown_tag_names_are_untouched() {
    let input = "<bold>hi</bold>";
    assert_eq!(substitute(input, &StripResolver), input);
}

#[test]
fn chalk_chain_applies_every_segment() {
    let out = substitute("<chalk green-bold>ok</chalk>", &StyledResolver::new());
    // green foreground applied first, bold wrapped around it
    assert!(out.contains("\x1b[38;2;80;250;123m"));
    assert!(out.contains("\x1b[1m"));
    assert!(out.contains("ok"));
}

#[test]
fn chalk_unknown_segment_warns_and_continues() {
    let captured: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&captured);
    internal::set_writer(Arc::new(move |line: &str| {
        sink.lock().unwrap().push(line.to_string());
    }));

    let out = substitute("<chalk green-zorp-bold>ok</chalk>", &StyledResolver::new());
    internal::reset_writer();

    // resolved segments still apply
    assert!(out.contains("\x1b[38;2;80;250;123m"));
    assert!(out.contains("\x1b[1m"));

    let warnings = captured.lock().unwrap();
    assert!(warnings.iter().any(|w| w.contains("zorp")));
}

#[test]
fn body_may_span_lines() {
    let out = substitute("<hl sql>SELECT 1\nFROM t</hl>", &StripResolver);
    assert_eq!(out, "SELECT 1\nFROM t");
}
