//! Deterministic block-notation rendering for metadata dumps.
//!
//! Indentation-based, human-first: maps as `key: value` lines, sequences as
//! `- item` lines, two spaces per nesting level. String scalars are always
//! double-quoted and long ones fold so no emitted line exceeds the width cap.
//! The finished block gets a fixed two-space margin, then one pass through the
//! markup engine with the active renderer's resolver, so tags embedded in
//! string leaves (including the synthetic signature spans) resolve exactly
//! once.

use super::signature;
use super::value::{ErrorInfo, MetaValue};
use crate::fmt::markup::{self, Resolver};
use regex::Regex;
use std::sync::LazyLock;

const MAX_WIDTH: usize = 120;

static BARE_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][\w-]*$").expect("Invalid bare key regex"));

/// Renders `value` as an indented block and resolves any embedded magic tags
/// with `resolver`. Every line carries the two-space margin; trailing
/// whitespace is trimmed.
#[must_use]
pub fn serialize(value: &MetaValue, resolver: &dyn Resolver) -> String {
    let mut lines = Vec::new();
    emit(value, 0, &mut lines);

    let block = lines
        .iter()
        .map(|line| format!("  {line}").trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n");

    markup::substitute(&block, resolver)
}

fn pad(indent: usize) -> String {
    "  ".repeat(indent)
}

fn emit(value: &MetaValue, indent: usize, out: &mut Vec<String>) {
    match value {
        MetaValue::Map(entries) => emit_map(entries, indent, out),
        MetaValue::Error(info) => emit_map(&error_entries(info), indent, out),
        MetaValue::Seq(items) => emit_seq(items, indent, out),
        other => {
            if let Some(s) = scalar(other) {
                push_folded(pad(indent), s, indent, out);
            }
        }
    }
}

fn emit_map(entries: &[(String, MetaValue)], indent: usize, out: &mut Vec<String>) {
    for (key, value) in entries {
        let key_str = format_key(key);
        match value {
            MetaValue::Map(nested) if nested.is_empty() => {
                out.push(format!("{}{key_str}: {{}}", pad(indent)));
            }
            MetaValue::Seq(nested) if nested.is_empty() => {
                out.push(format!("{}{key_str}: []", pad(indent)));
            }
            MetaValue::Map(_) | MetaValue::Seq(_) => {
                out.push(format!("{}{key_str}:", pad(indent)));
                emit(value, indent + 1, out);
            }
            MetaValue::Error(info) => {
                out.push(format!("{}{key_str}:", pad(indent)));
                emit_map(&error_entries(info), indent + 1, out);
            }
            other => {
                if let Some(s) = scalar(other) {
                    push_folded(format!("{}{key_str}: ", pad(indent)), s, indent, out);
                }
                // Values without a representation are skipped, never an error.
            }
        }
    }
}

fn emit_seq(items: &[MetaValue], indent: usize, out: &mut Vec<String>) {
    for item in items {
        match item {
            MetaValue::Map(_) | MetaValue::Seq(_) | MetaValue::Error(_) => {
                // Render the nested block one level deeper, then fold the
                // dash marker into its first line.
                let mut nested = Vec::new();
                emit(item, indent + 1, &mut nested);
                if let Some(first) = nested.first_mut() {
                    let marker = format!("{}- ", pad(indent));
                    *first = format!("{marker}{}", first.trim_start());
                }
                out.extend(nested);
            }
            other => {
                if let Some(s) = scalar(other) {
                    push_folded(format!("{}- ", pad(indent)), s, indent, out);
                }
            }
        }
    }
}

/// Error-like values expand into a plain mapping of everything they carry.
fn error_entries(info: &ErrorInfo) -> Vec<(String, MetaValue)> {
    let mut entries = vec![
        ("name".to_string(), MetaValue::Str(info.name.clone())),
        ("message".to_string(), MetaValue::Str(info.message.clone())),
    ];
    if let Some(stack) = &info.stack {
        entries.push(("stack".to_string(), MetaValue::Str(stack.clone())));
    }
    entries.extend(info.extra.iter().cloned());
    entries
}

/// Scalar rendering. Returns `None` for values with no scalar form at this
/// position (nested structures are handled by the callers).
fn scalar(value: &MetaValue) -> Option<String> {
    match value {
        MetaValue::Null => Some("null".to_string()),
        MetaValue::Bool(b) => Some(b.to_string()),
        MetaValue::Int(i) => Some(i.to_string()),
        MetaValue::BigInt(i) => Some(i.to_string()),
        MetaValue::Float(f) => Some(float_scalar(*f)),
        MetaValue::Str(s) => Some(quote(s)),
        MetaValue::Func(info) => {
            let sig = signature::extract(&info.source);
            Some(quote(&format!("<hl rust>{sig}</hl>")))
        }
        MetaValue::Error(_) | MetaValue::Seq(_) | MetaValue::Map(_) => None,
    }
}

fn float_scalar(f: f64) -> String {
    if f.is_nan() {
        ".nan".to_string()
    } else if f.is_infinite() {
        if f.is_sign_positive() {
            ".inf".to_string()
        } else {
            "-.inf".to_string()
        }
    } else {
        format!("{f}")
    }
}

fn format_key(key: &str) -> String {
    if BARE_KEY_REGEX.is_match(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Emits `prefix + scalar` as one line, folding long quoted strings so no
/// line exceeds the width cap. Inside a double-quoted scalar, a line break
/// plus continuation indent reads back as a single space.
fn push_folded(prefix: String, scalar: String, indent: usize, out: &mut Vec<String>) {
    let line = format!("{prefix}{scalar}");
    if line.chars().count() <= MAX_WIDTH || !scalar.starts_with('"') {
        out.push(line);
        return;
    }

    let inner = &scalar[1..scalar.len() - 1];
    let continuation = pad(indent + 1);
    let mut current = format!("{prefix}\"");
    let mut first_word = true;

    for word in inner.split(' ') {
        if !first_word && current.chars().count() + 1 + word.chars().count() > MAX_WIDTH - 1 {
            out.push(current);
            current = format!("{continuation}{word}");
        } else {
            if !first_word {
                current.push(' ');
            }
            current.push_str(word);
        }
        first_word = false;
    }

    current.push('"');
    out.push(current);
}
