//! Best-effort signature extraction for function-like metadata values.
//!
//! This is pattern matching over source text, not parsing: each recognized
//! shape has a fixed pattern, tried in priority order, with a generic
//! placeholder when nothing matches. Unmatched input must degrade, never fail.

use regex::Regex;
use std::sync::LazyLock;

/// Free functions and methods, with optional `pub`/`async` and generics.
static ITEM_FN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:pub(?:\([^)]*\))?\s+)?(async\s+)?fn\s+([A-Za-z_]\w*)\s*(?:<[^>]*>)?\s*\(([^)]*)\)")
        .expect("Invalid item fn regex")
});

/// Closures, with or without `move`.
static CLOSURE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:move\s+)?\|([^|]*)\|").expect("Invalid closure regex"));

/// An `impl` block whose constructor is the interesting part.
static IMPL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*impl(?:<[^>]*>)?\s+([A-Za-z_]\w*)").expect("Invalid impl regex"));

static NEW_FN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"fn\s+new\s*\(([^)]*)\)").expect("Invalid constructor regex"));

/// Type declarations stand in for class declarations.
static TYPE_DECL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:pub(?:\([^)]*\))?\s+)?(struct|enum|trait)\s+([A-Za-z_]\w*)")
        .expect("Invalid type decl regex")
});

static WHITESPACE_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static COMMA_SPACING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*").expect("Invalid comma regex"));

/// Extracts a normalized one-line signature approximation ending in an
/// ellipsis placeholder for the omitted body.
#[must_use]
pub fn extract(source: &str) -> String {
    if let Some(caps) = ITEM_FN_REGEX.captures(source) {
        let asyncness = if caps.get(1).is_some() { "async " } else { "" };
        let name = &caps[2];
        let params = normalize(&caps[3]);
        return format!("{asyncness}fn {name}({params}) {{ ... }}");
    }

    if let Some(caps) = CLOSURE_REGEX.captures(source) {
        let params = normalize(&caps[1]);
        return format!("|{params}| {{ ... }}");
    }

    if let Some(caps) = IMPL_REGEX.captures(source) {
        let name = caps[1].to_string();
        if let Some(ctor) = NEW_FN_REGEX.captures(source) {
            let params = normalize(&ctor[1]);
            return format!("{name}::new({params}) {{ ... }}");
        }
    }

    if let Some(caps) = TYPE_DECL_REGEX.captures(source) {
        let kind = &caps[1];
        let name = &caps[2];
        return format!("{kind} {name} {{ ... }}");
    }

    "fn(...) { ... }".to_string()
}

/// Collapses whitespace runs to one space and normalizes comma spacing, so
/// multi-line parameter lists come out single-spaced.
fn normalize(params: &str) -> String {
    let collapsed = WHITESPACE_RUN_REGEX.replace_all(params.trim(), " ");
    COMMA_SPACING_REGEX
        .replace_all(&collapsed, ", ")
        .trim()
        .to_string()
}
