//! Styling namespace behind `chalk` tags. A tag parameter like `green-bold`
//! names a chain of entries in this namespace, applied left to right.

use super::Color;
use crate::internal;
use std::collections::HashMap;

/// One resolvable step of a chalk path — either an SGR modifier or a foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Dim,
    Italic,
    Underline,
    Fg(Color),
}

impl Style {
    /// Each step wraps the text in its own escape pair; chained steps nest.
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Bold => format!("\x1b[1m{text}\x1b[0m"),
            Self::Dim => format!("\x1b[2m{text}\x1b[0m"),
            Self::Italic => format!("\x1b[3m{text}\x1b[0m"),
            Self::Underline => format!("\x1b[4m{text}\x1b[0m"),
            Self::Fg(color) => {
                let fg = color.fg_ansi();
                format!("{fg}{text}\x1b[0m")
            }
        }
    }
}

/// Named colors plus the fixed modifier set. A `chalk` path segment resolves
/// against this table; the table is cheap to clone and extend per output.
#[derive(Debug, Clone)]
pub struct StyleTable {
    colors: HashMap<String, Color>,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleTable {
    #[must_use]
    pub fn new() -> Self {
        let mut colors = HashMap::new();
        colors.insert("red".to_string(), Color::red());
        colors.insert("green".to_string(), Color::green());
        colors.insert("yellow".to_string(), Color::yellow());
        colors.insert("cyan".to_string(), Color::cyan());
        colors.insert("blue".to_string(), Color::blue());
        colors.insert("purple".to_string(), Color::purple());
        colors.insert("magenta".to_string(), Color::pink());
        colors.insert("orange".to_string(), Color::orange());
        colors.insert("grey".to_string(), Color::grey());
        colors.insert("gray".to_string(), Color::grey());
        colors.insert("white".to_string(), Color::white());

        Self { colors }
    }

    /// Default level colors may clash with a project's palette — entries are overridable.
    #[must_use]
    pub fn color(mut self, name: impl Into<String>, color: Color) -> Self {
        self.colors.insert(name.into(), color);
        self
    }

    /// Modifiers take precedence over colors so a theme can't shadow `bold`.
    #[must_use]
    pub fn resolve(&self, segment: &str) -> Option<Style> {
        match segment {
            "bold" => Some(Style::Bold),
            "dim" => Some(Style::Dim),
            "italic" => Some(Style::Italic),
            "underline" => Some(Style::Underline),
            _ => self.colors.get(segment).copied().map(Style::Fg),
        }
    }

    /// Applies a hyphen-delimited chain (`green-bold`) to `body`. An
    /// unresolvable segment is reported to the diagnostics channel and
    /// skipped; the rest of the chain still applies. Styling must never fail a
    /// log call outright.
    #[must_use]
    pub fn apply_path(&self, path: &str, body: &str) -> String {
        let mut out = body.to_string();
        for segment in path.split('-').filter(|s| !s.is_empty()) {
            if let Some(style) = self.resolve(segment) {
                out = style.apply(&out);
            } else {
                internal::warn("STYLE", &format!("unknown style segment: {segment}"));
            }
        }
        out
    }
}
