//! Injectable write functions, one per output family.
//!
//! Each family (console, file) has a single process-wide write function,
//! defaulted at startup and swappable only through an explicit setter. All
//! output instances of a family share it, so two loggers pointed at the same
//! destination never hold independent handles, and tests can capture output
//! without touching real sinks.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, LazyLock, Mutex, RwLock};

/// Console sink signature — one complete output unit, no trailing newline.
pub type WriteFn = Arc<dyn Fn(&str) + Send + Sync>;

/// File sink signature — one line appended to the resolved path.
pub type FileWriteFn = Arc<dyn Fn(&Path, &str) -> std::io::Result<()> + Send + Sync>;

static CONSOLE_WRITER: LazyLock<RwLock<WriteFn>> =
    LazyLock::new(|| RwLock::new(default_console_writer()));

static FILE_WRITER: LazyLock<RwLock<FileWriteFn>> =
    LazyLock::new(|| RwLock::new(default_file_writer()));

/// Append ordering guard: every file write in the process goes through this
/// lock, which is what makes the shared-entry-point guarantee hold even when
/// two logger instances resolve the same path.
static FILE_APPEND_LOCK: Mutex<()> = Mutex::new(());

fn default_console_writer() -> WriteFn {
    Arc::new(|unit: &str| println!("{unit}"))
}

fn default_file_writer() -> FileWriteFn {
    Arc::new(|path: &Path, line: &str| {
        let _guard = FILE_APPEND_LOCK.lock();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{line}")?;
        Ok(())
    })
}

/// Replaces the console write function for the whole process.
pub fn set_console_writer(writer: WriteFn) {
    if let Ok(mut guard) = CONSOLE_WRITER.write() {
        *guard = writer;
    }
}

/// Restores the default stdout console writer.
pub fn reset_console_writer() {
    set_console_writer(default_console_writer());
}

/// Writes one output unit through the active console function.
pub fn console_write(unit: &str) {
    if let Ok(writer) = CONSOLE_WRITER.read() {
        writer(unit);
    }
}

/// Replaces the file write function for the whole process.
pub fn set_file_writer(writer: FileWriteFn) {
    if let Ok(mut guard) = FILE_WRITER.write() {
        *guard = writer;
    }
}

/// Restores the default append-to-path file writer.
pub fn reset_file_writer() {
    set_file_writer(default_file_writer());
}

/// Appends one line through the active file function.
///
/// # Errors
/// I/O errors from the underlying append.
pub fn file_write(path: &Path, line: &str) -> std::io::Result<()> {
    let writer = FILE_WRITER
        .read()
        .map_err(|_| std::io::Error::other("file writer lock poisoned"))?;
    writer(path, line)
}
