//! Inline magic tags: `<hl LANG>code</hl>` marks a language-tagged snippet,
//! `<chalk PATH>text</chalk>` marks a styled span. Messages and serialized
//! metadata both pass through here, so a tag written at a call site survives
//! the serialization round-trip and is resolved only at the final render step.

use super::highlight::{self, Theme};
use super::style::StyleTable;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// One alternation arm per tag name ties each closing marker to its own
/// opener — `<hl sql>…</chalk>` is not a match. Bodies are non-greedy and may
/// span lines; matches are found in a single pass over the original string
/// and replacements are never re-scanned.
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<hl ([\w-]+)>(.*?)</hl>|<chalk ([\w-]+)>(.*?)</chalk>")
        .expect("Invalid magic tag regex")
});

/// The closed set of recognized tag names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Language-tagged code snippet.
    Hl,
    /// Styling-path span.
    Chalk,
}

/// Per-tag replacement strategy. Implementations must be infallible: a log
/// message must never error out of its own rendering.
pub trait Resolver {
    fn resolve(&self, tag: Tag, param: &str, body: &str) -> String;
}

/// Substitutes every well-formed magic tag in `text` through `resolver`.
/// Malformed tags (mismatched closer, missing closer) never match and pass
/// through as literal text.
#[must_use]
pub fn substitute(text: &str, resolver: &dyn Resolver) -> String {
    TAG_REGEX
        .replace_all(text, |caps: &Captures<'_>| {
            if let (Some(param), Some(body)) = (caps.get(1), caps.get(2)) {
                resolver.resolve(Tag::Hl, param.as_str(), body.as_str())
            } else if let (Some(param), Some(body)) = (caps.get(3), caps.get(4)) {
                resolver.resolve(Tag::Chalk, param.as_str(), body.as_str())
            } else {
                // Unreachable with the alternation above; keep the text as-is.
                caps.get(0).map_or_else(String::new, |m| m.as_str().to_string())
            }
        })
        .into_owned()
}

/// Returns tag bodies verbatim — for destinations that cannot or should not
/// carry styling (files, plain console).
#[derive(Debug, Clone, Copy, Default)]
pub struct StripResolver;

impl Resolver for StripResolver {
    fn resolve(&self, _tag: Tag, _param: &str, body: &str) -> String {
        body.to_string()
    }
}

/// Renders `hl` bodies through the syntax highlighter and `chalk` bodies
/// through the style namespace.
#[derive(Debug, Clone, Default)]
pub struct StyledResolver {
    theme: Theme,
    styles: StyleTable,
}

impl StyledResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Outputs with a custom palette thread their own table through.
    #[must_use]
    pub fn with_styles(styles: StyleTable) -> Self {
        Self {
            theme: Theme::default(),
            styles,
        }
    }
}

impl Resolver for StyledResolver {
    fn resolve(&self, tag: Tag, param: &str, body: &str) -> String {
        match tag {
            Tag::Hl => highlight::render(body, param, &self.theme),
            Tag::Chalk => self.styles.apply_path(param, body),
        }
    }
}
