//! Plume's own diagnostic channel — non-fatal problems inside the rendering
//! pipeline (unknown style segments, a missing event backend) are reported
//! here instead of surfacing to the caller, since a log call must never fail.
//!
//! The writer is process-wide and swappable so tests can capture diagnostics;
//! the default goes to stderr.

use std::sync::{Arc, LazyLock, RwLock};

/// Diagnostic sink signature — receives one complete line, no trailing newline.
pub type DiagFn = Arc<dyn Fn(&str) + Send + Sync>;

static DIAG_WRITER: LazyLock<RwLock<DiagFn>> =
    LazyLock::new(|| RwLock::new(Arc::new(|line: &str| eprintln!("{line}")) as DiagFn));

/// Replaces the diagnostic writer for the whole process.
pub fn set_writer(writer: DiagFn) {
    if let Ok(mut guard) = DIAG_WRITER.write() {
        *guard = writer;
    }
}

/// Restores the default stderr writer.
pub fn reset_writer() {
    set_writer(Arc::new(|line: &str| eprintln!("{line}")));
}

/// Non-fatal anomalies — an unresolvable style segment, a missing backend.
/// A poisoned writer lock drops the line rather than panicking.
pub fn warn(scope: &str, msg: &str) {
    if let Ok(writer) = DIAG_WRITER.read() {
        writer(&format!("plume[warn] {scope}: {msg}"));
    }
}
