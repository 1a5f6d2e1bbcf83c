//! Severity levels that gate which messages reach which outputs.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the logger can compare a message's level against the
/// configured threshold. Lower discriminant means higher priority: an output
/// admitting `Warn` admits everything at `Warn` priority or above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Unrecoverable failures that prevent the operation from completing.
    Error = 0,
    /// Non-fatal anomalies that may need attention (deprecated features, retries).
    Warn = 1,
    /// Normal operational milestones — startup, connection established, etc.
    #[default]
    Info = 2,
    /// Development-time diagnostics too noisy for normal operation.
    Debug = 3,
}

impl Level {
    /// Lowercase because environment variables and config strings use lowercase level names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Fixed priority table: error(0) < warn(1) < info(2) < debug(3).
    #[must_use]
    pub const fn priority(self) -> u8 {
        self as u8
    }

    /// Convenience for iteration — used by selection code and tests.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Error, Self::Warn, Self::Info, Self::Debug]
    }

    /// Threshold vocabulary is collaborator-owned and may carry typos or be
    /// absent entirely; anything unrecognized falls back to `Info` rather than
    /// failing logger construction.
    #[must_use]
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse().ok()).unwrap_or_default()
    }
}

/// A message passes the gate iff its priority is at or above the threshold's:
/// `threshold = warn` admits error and warn, rejects info and debug.
#[must_use]
pub const fn should_emit(level: Level, threshold: Level) -> bool {
    level.priority() <= threshold.priority()
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
