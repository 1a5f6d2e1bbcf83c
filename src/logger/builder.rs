//! Builder for multiplexed loggers: any combination of strategies, in caller
//! order, each destination independent of the others.

use super::Logger;
use crate::env::Environment;
use crate::level::Level;
use crate::output::{EventBackend, EventOutput, FileOutput, Output, PlainOutput, StyledOutput};
use std::path::PathBuf;
use std::sync::Arc;

pub struct LoggerBuilder {
    name: String,
    min_level: Option<Level>,
    outputs: Vec<Box<dyn Output>>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_level: None,
            outputs: Vec::new(),
        }
    }

    /// An explicit threshold overrides the environment's; without one, the
    /// environment value is read once at `build`.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = Some(level);
        self
    }

    /// Markup-stripped console destination.
    #[must_use]
    pub fn plain(mut self) -> Self {
        self.outputs.push(Box::new(PlainOutput::new()));
        self
    }

    /// ANSI-styled console destination.
    #[must_use]
    pub fn styled(mut self) -> Self {
        self.outputs.push(Box::new(StyledOutput::new()));
        self
    }

    /// Structured-event destination using the fallback console emitter.
    #[must_use]
    pub fn structured(mut self) -> Self {
        self.outputs.push(Box::new(EventOutput::new()));
        self
    }

    /// Structured-event destination wired to a concrete backend.
    #[must_use]
    pub fn structured_backend(mut self, backend: Arc<dyn EventBackend>) -> Self {
        self.outputs.push(Box::new(EventOutput::new().backend(backend)));
        self
    }

    /// File destination resolving its path from the environment per call.
    #[must_use]
    pub fn file(mut self) -> Self {
        self.outputs.push(Box::new(FileOutput::new()));
        self
    }

    /// File destination pinned to an explicit path.
    #[must_use]
    pub fn file_at(mut self, path: impl Into<PathBuf>) -> Self {
        self.outputs.push(Box::new(FileOutput::new().path(path)));
        self
    }

    /// The built-in strategies can't cover every destination.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.outputs.push(Box::new(output));
        self
    }

    /// Immutability after build keeps concurrent logging lock-free.
    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            name: self.name,
            min_level: self
                .min_level
                .unwrap_or_else(|| Environment::detect().min_level()),
            outputs: self.outputs,
        }
    }
}
