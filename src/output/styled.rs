//! Rich text rendering for color-capable terminals: colored header fields,
//! severity-tinted messages, highlighted code spans, chalk style chains.

use super::{LogRecord, Message, Output};
use crate::fmt::{Color, StyleTable, StyledResolver, colorize, markup};
use crate::level::Level;
use crate::meta;
use crate::sink;
use std::io::Write;

/// Fixed severity tints: each level token (and the whole resolved message)
/// carries its level's color.
const fn level_color(level: Level) -> Color {
    match level {
        Level::Debug => Color::cyan(),
        Level::Info => Color::blue(),
        Level::Warn => Color::yellow(),
        Level::Error => Color::red(),
    }
}

/// ANSI-rendering counterpart of `PlainOutput`.
#[derive(Debug, Clone, Default)]
pub struct StyledOutput {
    resolver: StyledResolver,
}

impl StyledOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A custom palette replaces the named colors the chalk namespace resolves against.
    #[must_use]
    pub fn styles(mut self, styles: StyleTable) -> Self {
        self.resolver = StyledResolver::with_styles(styles);
        self
    }

    /// Exposed separately from `write` so a fixed-timestamp record renders to
    /// a comparable string.
    #[must_use]
    pub fn format(&self, record: &LogRecord) -> String {
        let severity = level_color(record.level);
        let header = format!(
            "[{}] [{}/{}]",
            colorize(&record.time_str(), Color::grey()),
            colorize(&record.name, Color::purple()),
            colorize(&record.level.as_str().to_uppercase(), severity),
        );

        match &record.message {
            Message::Data(value) => {
                let block = meta::serialize(&record.data_with_meta(value), &self.resolver);
                format!("{header}\n{block}")
            }
            Message::Text(text) => {
                let msg = colorize(&markup::substitute(text, &self.resolver), severity);
                record.present_meta().map_or_else(
                    || format!("{header} {msg}"),
                    |fields| {
                        let block = meta::serialize(&fields.to_value(), &self.resolver);
                        format!("{header} {msg}\n{block}")
                    },
                )
            }
        }
    }
}

impl Output for StyledOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        sink::console_write(&self.format(record));
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        std::io::stdout().flush()?;
        Ok(())
    }
}
