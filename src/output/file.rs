//! File output. Writes the plain text shape (markup stripped) and appends one
//! newline-terminated unit per call through the shared file entry point.

use super::{LogRecord, Output, plain};
use crate::sink;
use std::path::PathBuf;

/// Environment override for the destination path.
pub const FILE_ENV_VAR: &str = "PLUME_FILE";

/// Fixed relative fallback when no override is supplied.
pub const DEFAULT_FILE: &str = "plume.log";

/// Append-only text destination.
#[derive(Debug, Clone, Default)]
pub struct FileOutput {
    /// Explicit path wins over the environment override.
    path: Option<PathBuf>,
}

impl FileOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Resolved fresh on every write — never cached — so late environment
    /// changes take effect. `~` in the override expands to the home directory.
    #[must_use]
    pub fn resolve_path(&self) -> PathBuf {
        if let Some(path) = &self.path {
            return path.clone();
        }
        std::env::var(FILE_ENV_VAR).map_or_else(
            |_| PathBuf::from(DEFAULT_FILE),
            |raw| PathBuf::from(shellexpand::tilde(&raw).as_ref()),
        )
    }
}

impl Output for FileOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let path = self.resolve_path();
        sink::file_write(&path, &plain::format(record))?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
