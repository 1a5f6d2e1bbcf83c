//! Structured-event rendering for serverless execution. Markup passes through
//! untouched here — the consuming backend owns presentation.

use super::{LogRecord, Message, Output};
use crate::internal;
use crate::sink;
use serde::Serialize;
use std::sync::{Arc, Once};

/// External structured-log collaborator. When absent, a fallback emits the
/// event as one JSON line on the console family.
pub trait EventBackend: Send + Sync {
    fn submit(&self, event: &serde_json::Value);
}

static MISSING_BACKEND_WARNING: Once = Once::new();

/// Flat shape optimized for line-oriented consumers — level and logger tags up
/// front, metadata fields inline at the top level.
#[derive(Debug, Serialize)]
struct Event {
    #[serde(rename = "_logLevel")]
    level: String,
    /// The logger name rides along as the only tag.
    #[serde(rename = "_tags")]
    tags: Vec<String>,
    /// Absent when the message value had no JSON representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    msg: Option<serde_json::Value>,
    /// Caller metadata, flattened — a caller `msg` field shadows the synthetic one.
    #[serde(flatten)]
    meta: serde_json::Map<String, serde_json::Value>,
}

/// Renders records as `{_logLevel, _tags:[name], msg?, ...metadata}` events.
#[derive(Clone, Default)]
pub struct EventOutput {
    backend: Option<Arc<dyn EventBackend>>,
}

impl EventOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend(mut self, backend: Arc<dyn EventBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// The event for one record. Text messages land under `msg` verbatim
    /// (tags intact); structured messages fold into the metadata fields the
    /// same way. Caller metadata comes after the synthetic key, so a caller
    /// `msg` field wins.
    #[must_use]
    pub fn event(&self, record: &LogRecord) -> serde_json::Value {
        let msg = match &record.message {
            Message::Text(text) => Some(serde_json::Value::from(text.clone())),
            Message::Data(value) => value.to_json(),
        };

        let mut meta = serde_json::Map::new();
        if let Some(fields) = record.present_meta() {
            for (key, value) in fields {
                if let Some(v) = value.to_json() {
                    meta.insert(key.clone(), v);
                }
                // Unrepresentable values are dropped, never an error.
            }
        }

        let event = Event {
            level: record.level.as_str().to_string(),
            tags: vec![record.name.clone()],
            msg,
            meta,
        };

        serde_json::to_value(&event).unwrap_or_default()
    }
}

impl std::fmt::Debug for EventOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventOutput")
            .field("backend", &self.backend.is_some())
            .finish()
    }
}

impl Output for EventOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let event = self.event(record);

        if let Some(backend) = &self.backend {
            backend.submit(&event);
            return Ok(());
        }

        // The fallback must be transparent: same event, one line of JSON,
        // and a single warning for the whole process lifetime.
        MISSING_BACKEND_WARNING.call_once(|| {
            internal::warn(
                "EVENT",
                "no structured-log backend configured, falling back to console JSON",
            );
        });
        sink::console_write(&serde_json::to_string(&event)?);
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
