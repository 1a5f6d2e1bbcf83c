//! Tests for environment-driven strategy selection.

use plume::env::{Environment, Selection, Strategy, select};

fn env() -> Environment {
    Environment::default()
}

#[test]
fn bare_environment_selects_plain() {
    assert_eq!(
        select(&env()),
        Selection {
            strategy: Strategy::Plain,
            file: false
        }
    );
}

#[test]
fn serverless_marker_selects_events() {
    let e = Environment {
        serverless: true,
        ..env()
    };
    assert_eq!(select(&e).strategy, Strategy::Event);
}

#[test]
fn color_capability_selects_styled() {
    let e = Environment {
        color: true,
        ..env()
    };
    assert_eq!(select(&e).strategy, Strategy::Styled);
}

#[test]
fn serverless_beats_color() {
    let e = Environment {
        serverless: true,
        color: true,
        ..env()
    };
    assert_eq!(select(&e).strategy, Strategy::Event);
}

#[test]
fn lambda_tokens_force_events() {
    for token in ["lambda", "aws", "cloudwatch", "LAMBDA", " Aws "] {
        let e = Environment {
            mode: Some(token.to_string()),
            ..env()
        };
        assert_eq!(select(&e).strategy, Strategy::Event, "{token}");
    }
}

#[test]
fn color_tokens_force_styled() {
    for token in ["colorful", "color", "Colorful"] {
        let e = Environment {
            mode: Some(token.to_string()),
            ..env()
        };
        assert_eq!(select(&e).strategy, Strategy::Styled, "{token}");
    }
}

#[test]
fn plain_tokens_force_plain_even_with_color() {
    for token in ["plain", "text", "plaintext"] {
        let e = Environment {
            mode: Some(token.to_string()),
            color: true,
            ..env()
        };
        assert_eq!(select(&e).strategy, Strategy::Plain, "{token}");
    }
}

#[test]
fn console_token_follows_color_capability() {
    let colored = Environment {
        mode: Some("cli".to_string()),
        color: true,
        ..env()
    };
    assert_eq!(select(&colored).strategy, Strategy::Styled);

    let dumb = Environment {
        mode: Some("console".to_string()),
        color: false,
        ..env()
    };
    assert_eq!(select(&dumb).strategy, Strategy::Plain);
}

#[test]
fn file_token_adds_a_file_destination() {
    let e = Environment {
        mode: Some(" lambda , file ".to_string()),
        ..env()
    };
    let selection = select(&e);
    assert_eq!(selection.strategy, Strategy::Event);
    assert!(selection.file);
}

#[test]
fn file_path_override_adds_a_file_destination() {
    let e = Environment {
        file_path: Some("/tmp/plume.log".to_string()),
        color: true,
        ..env()
    };
    let selection = select(&e);
    assert_eq!(selection.strategy, Strategy::Styled);
    assert!(selection.file);
}

#[test]
fn unknown_tokens_are_ignored() {
    let e = Environment {
        mode: Some("bogus,,mystery".to_string()),
        color: true,
        ..env()
    };
    assert_eq!(select(&e).strategy, Strategy::Styled);
}

#[test]
fn level_parses_permissively() {
    let e = Environment {
        level: Some("WARN".to_string()),
        ..env()
    };
    assert_eq!(e.min_level(), plume::Level::Warn);

    let bad = Environment {
        level: Some("shout".to_string()),
        ..env()
    };
    assert_eq!(bad.min_level(), plume::Level::Info);
}
