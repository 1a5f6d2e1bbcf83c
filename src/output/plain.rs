//! Markup-free text rendering for terminals without color support. Also the
//! shape the file strategy writes, since both destinations strip styling.

use super::{LogRecord, Message, Output};
use crate::fmt::{StripResolver, markup};
use crate::meta;
use crate::sink;
use std::io::Write;

/// Renders `[HH:MM:SS] [name/LEVEL] message` with magic tags stripped and
/// metadata as an indented block.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainOutput;

impl PlainOutput {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Exposed separately from `write` so a fixed-timestamp record renders to
    /// a comparable string.
    #[must_use]
    pub fn format(&self, record: &LogRecord) -> String {
        format(record)
    }
}

/// One self-contained output unit per record; shared with the file strategy.
#[must_use]
pub fn format(record: &LogRecord) -> String {
    let resolver = StripResolver;
    let header = format!(
        "[{}] [{}/{}]",
        record.time_str(),
        record.name,
        record.level.as_str().to_uppercase()
    );

    match &record.message {
        Message::Data(value) => {
            let block = meta::serialize(&record.data_with_meta(value), &resolver);
            format!("{header}\n{block}")
        }
        Message::Text(text) => {
            let msg = markup::substitute(text, &resolver);
            record.present_meta().map_or_else(
                || format!("{header} {msg}"),
                |fields| {
                    let block = meta::serialize(&fields.to_value(), &resolver);
                    format!("{header} {msg}\n{block}")
                },
            )
        }
    }
}

impl Output for PlainOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        sink::console_write(&format(record));
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        std::io::stdout().flush()?;
        Ok(())
    }
}
