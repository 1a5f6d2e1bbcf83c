//! Output strategies. The built-in four (plain text, styled text, structured
//! event, file) can't cover every destination — the `Output` trait lets users
//! add their own without modifying plume itself.

mod event;
mod file;
mod plain;
mod styled;

pub use event::{EventBackend, EventOutput};
pub use file::{DEFAULT_FILE, FILE_ENV_VAR, FileOutput};
pub use plain::PlainOutput;
pub use styled::StyledOutput;

use crate::level::Level;
use crate::meta::{Meta, MetaValue};
use chrono::{DateTime, Local};

/// A log message: plain text (possibly carrying magic tags) or an arbitrary
/// structured value.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Text(String),
    Data(MetaValue),
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<MetaValue> for Message {
    fn from(v: MetaValue) -> Self {
        Self::Data(v)
    }
}

/// Carries all data a strategy needs to render one log call — constructed per
/// call, consumed synchronously, never retained.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub name: String,
    pub level: Level,
    pub message: Message,
    pub meta: Option<Meta>,
}

impl LogRecord {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        level: Level,
        message: impl Into<Message>,
        meta: Option<Meta>,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            name: name.into(),
            level,
            message: message.into(),
            meta,
        }
    }

    /// Zero-padded 24-hour clock, the only timestamp component the text header carries.
    #[must_use]
    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    /// Metadata counts as present only when it has fields; an empty bag
    /// renders like no metadata at all.
    #[must_use]
    pub fn present_meta(&self) -> Option<&Meta> {
        self.meta.as_ref().filter(|m| !m.is_empty())
    }

    /// Non-text messages fold into the metadata block under a synthetic `msg`
    /// key, with caller fields following it.
    #[must_use]
    pub fn data_with_meta(&self, value: &MetaValue) -> MetaValue {
        let mut entries = vec![("msg".to_string(), value.clone())];
        if let Some(meta) = self.present_meta() {
            entries.extend(meta.iter().cloned());
        }
        MetaValue::Map(entries)
    }
}

/// `Send + Sync` bounds enable concurrent logging from multiple threads
/// without locks on the trait object.
pub trait Output: Send + Sync {
    /// Each strategy renders the record according to its own format (plain,
    /// ANSI, JSON event) and hands the result to its family's write function.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error>;

    /// Unbuffered strategies are no-ops; console-backed ones flush the stream.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}
