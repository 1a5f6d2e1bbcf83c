//! The logger: severity gate in front, fan-out to configured outputs behind.
//! Factories cover the common single-strategy cases; the builder composes
//! arbitrary multiplexed combinations.

mod builder;

pub use builder::LoggerBuilder;

use crate::env::{self, Environment};
use crate::level::{Level, should_emit};
use crate::meta::Meta;
use crate::output::{
    EventOutput, FileOutput, LogRecord, Message, Output, PlainOutput, StyledOutput,
};

/// Immutable after construction — name, threshold, and output list are fixed
/// for the logger's lifetime.
pub struct Logger {
    name: String,
    min_level: Level,
    outputs: Vec<Box<dyn Output>>,
}

impl Logger {
    /// Composes arbitrary output combinations behind a stepwise API.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    /// Auto-detected strategy: serverless marker → structured events, color
    /// capability → styled, otherwise plain; a file-path override or `file`
    /// mode token adds a file destination alongside.
    #[must_use]
    pub fn detect(name: impl Into<String>) -> Self {
        let environment = Environment::detect();
        Self {
            name: name.into(),
            min_level: environment.min_level(),
            outputs: env::build_outputs(env::select(&environment)),
        }
    }

    /// Markup-stripped console output, regardless of environment.
    #[must_use]
    pub fn plain(name: impl Into<String>) -> Self {
        Self::with_output(name, Box::new(PlainOutput::new()))
    }

    /// ANSI-styled console output, regardless of environment.
    #[must_use]
    pub fn styled(name: impl Into<String>) -> Self {
        Self::with_output(name, Box::new(StyledOutput::new()))
    }

    /// Structured-event output, regardless of environment.
    #[must_use]
    pub fn structured(name: impl Into<String>) -> Self {
        Self::with_output(name, Box::new(EventOutput::new()))
    }

    /// File-append output, regardless of environment.
    #[must_use]
    pub fn file(name: impl Into<String>) -> Self {
        Self::with_output(name, Box::new(FileOutput::new()))
    }

    fn with_output(name: impl Into<String>, output: Box<dyn Output>) -> Self {
        Self {
            name: name.into(),
            min_level: Environment::detect().min_level(),
            outputs: vec![output],
        }
    }

    /// Core dispatch. A call below the threshold is a complete no-op — no
    /// record is built and no serialization happens, which matters because
    /// metadata rendering can be expensive. Above it, every output receives
    /// the same record in configured order, and one output's failure never
    /// blocks the next.
    pub fn log(&self, level: Level, msg: impl Into<Message>, meta: Option<Meta>) {
        if !should_emit(level, self.min_level) {
            return;
        }

        let record = LogRecord::new(&self.name, level, msg, meta);
        for output in &self.outputs {
            let _ = output.write(&record);
        }
    }

    /// Unrecoverable failures — I/O errors, invalid state, broken invariants.
    pub fn error(&self, msg: impl Into<Message>) {
        self.log(Level::Error, msg, None);
    }

    /// Non-fatal anomalies — missing optional config, deprecated features, retries.
    pub fn warn(&self, msg: impl Into<Message>) {
        self.log(Level::Warn, msg, None);
    }

    /// Normal operational milestones — startup, connection established, etc.
    pub fn info(&self, msg: impl Into<Message>) {
        self.log(Level::Info, msg, None);
    }

    /// Development-time diagnostics too noisy for normal operation.
    pub fn debug(&self, msg: impl Into<Message>) {
        self.log(Level::Debug, msg, None);
    }

    pub fn error_with(&self, msg: impl Into<Message>, meta: Meta) {
        self.log(Level::Error, msg, Some(meta));
    }

    pub fn warn_with(&self, msg: impl Into<Message>, meta: Meta) {
        self.log(Level::Warn, msg, Some(meta));
    }

    pub fn info_with(&self, msg: impl Into<Message>, meta: Meta) {
        self.log(Level::Info, msg, Some(meta));
    }

    pub fn debug_with(&self, msg: impl Into<Message>, meta: Meta) {
        self.log(Level::Debug, msg, Some(meta));
    }

    /// Console-backed outputs may hold buffered stream data on abrupt exit.
    ///
    /// # Errors
    /// Returns the first I/O error encountered across all outputs.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for output in &self.outputs {
            output.flush()?;
        }
        Ok(())
    }

    /// The identity embedded in every rendered prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tests and diagnostics need to verify which severity threshold is active.
    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    /// Tests verify the builder wired up the expected number of destinations.
    #[must_use]
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }
}
