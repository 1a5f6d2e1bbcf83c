//! Environment signals and strategy selection.
//!
//! The signals themselves (variables, tty state, serverless markers) are
//! collaborator-owned: `Environment` is just a resolved snapshot, so tests
//! construct one directly and selection logic stays pure.

use crate::level::Level;
use crate::output::{EventOutput, FILE_ENV_VAR, FileOutput, Output, PlainOutput, StyledOutput};
use std::io::IsTerminal;

/// Operating-mode override variable; comma-separated tokens.
pub const MODE_ENV_VAR: &str = "PLUME_MODE";

/// Minimum-severity override variable.
pub const LEVEL_ENV_VAR: &str = "PLUME_LEVEL";

/// Marker whose presence signals serverless execution.
pub const SERVERLESS_ENV_VAR: &str = "AWS_LAMBDA_FUNCTION_NAME";

/// Resolved environment signals feeding strategy selection.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Raw operating-mode override, untokenized.
    pub mode: Option<String>,
    pub serverless: bool,
    pub color: bool,
    pub file_path: Option<String>,
    /// Raw minimum-severity string; parsed permissively at logger construction.
    pub level: Option<String>,
}

impl Environment {
    /// Snapshots the process environment. Color capability means an
    /// interactive stdout with `NO_COLOR` unset.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            mode: std::env::var(MODE_ENV_VAR).ok(),
            serverless: std::env::var_os(SERVERLESS_ENV_VAR).is_some(),
            color: std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
            file_path: std::env::var(FILE_ENV_VAR).ok(),
            level: std::env::var(LEVEL_ENV_VAR).ok(),
        }
    }

    /// Unrecognized or absent level strings fall back to `Info`, silently.
    #[must_use]
    pub fn min_level(&self) -> Level {
        Level::parse_or_default(self.level.as_deref())
    }
}

/// The console strategy a selection resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Plain,
    Styled,
    Event,
}

/// One console strategy, plus optionally a file destination alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub strategy: Strategy,
    pub file: bool,
}

/// Resolves the environment to a selection. Mode tokens are comma-separated,
/// trimmed, case-insensitive; unknown tokens are ignored. Without any
/// strategy token: serverless wins, then color capability, then plain.
#[must_use]
pub fn select(env: &Environment) -> Selection {
    let tokens: Vec<String> = env
        .mode
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    let has = |names: &[&str]| tokens.iter().any(|t| names.contains(&t.as_str()));

    let strategy = if has(&["lambda", "aws", "cloudwatch"]) {
        Strategy::Event
    } else if has(&["colorful", "color"]) {
        Strategy::Styled
    } else if has(&["plain", "text", "plaintext"]) {
        Strategy::Plain
    } else if has(&["cli", "console"]) {
        if env.color {
            Strategy::Styled
        } else {
            Strategy::Plain
        }
    } else if env.serverless {
        Strategy::Event
    } else if env.color {
        Strategy::Styled
    } else {
        Strategy::Plain
    };

    Selection {
        strategy,
        file: has(&["file"]) || env.file_path.is_some(),
    }
}

/// Materializes a selection into concrete outputs, console strategy first.
#[must_use]
pub fn build_outputs(selection: Selection) -> Vec<Box<dyn Output>> {
    let mut outputs: Vec<Box<dyn Output>> = Vec::new();
    match selection.strategy {
        Strategy::Plain => outputs.push(Box::new(PlainOutput::new())),
        Strategy::Styled => outputs.push(Box::new(StyledOutput::new())),
        Strategy::Event => outputs.push(Box::new(EventOutput::new())),
    }
    if selection.file {
        outputs.push(Box::new(FileOutput::new()));
    }
    outputs
}
