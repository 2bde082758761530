//! FILENAME: app/src/logging.rs
// PURPOSE: Unified logging system for the application.
// CONTEXT: Installed as the `log` facade backend, so records from the engine and
// persistence crates land in the same `seq|level|category|message` stream.

use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;

use crate::AppError;

// ============================================================================
// UNIFIED LOGGING SYSTEM
// ============================================================================

/// Global sequence counter
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

/// Global log file handle. None means lines go to stderr.
pub static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Path of the open log file, if any
static LOG_PATH: Lazy<Mutex<Option<PathBuf>>> = Lazy::new(|| Mutex::new(None));

/// Get next sequence number
pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

pub fn get_log_path() -> Option<PathBuf> {
    LOG_PATH.lock().ok().and_then(|guard| guard.clone())
}

/// Create (or truncate) the log file and route all further lines to it.
pub fn init_log_file(path: &Path) -> Result<PathBuf, AppError> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    if let Ok(mut log_file) = LOG_FILE.lock() {
        *log_file = Some(file);
    }
    if let Ok(mut log_path) = LOG_PATH.lock() {
        *log_path = Some(path.to_path_buf());
    }

    Ok(path.to_path_buf())
}

/// Single-letter level code used in the second field of a line.
pub fn level_code(level: Level) -> &'static str {
    match level {
        Level::Trace => "T",
        Level::Debug => "D",
        Level::Info => "I",
        Level::Warn => "W",
        Level::Error => "E",
    }
}

pub fn format_line(seq: u64, level: &str, category: &str, message: &str) -> String {
    format!("{}|{}|{}|{}", seq, level, category, message)
}

/// Write a log line in unified format
pub fn write_log(level: &str, category: &str, message: &str) {
    let line = format_line(next_seq(), level, category, message);

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            if let Err(e) = writeln!(file, "{}", line) {
                eprintln!("[LOG_ERROR] Failed to write: {}", e);
            }
            let _ = file.flush();
            return;
        }
    }

    eprintln!("{}", line);
}

// ============================================================================
// LOG FACADE BACKEND
// ============================================================================

/// Forwards `log` records to `write_log`, using the record target as category.
pub struct UnifiedLogger;

static LOGGER: UnifiedLogger = UnifiedLogger;

impl Log for UnifiedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            write_log(level_code(record.level()), record.target(), &record.args().to_string());
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(ref mut file) = *guard {
                let _ = file.flush();
            }
        }
    }
}

/// Install the unified logger. Info and above by default, debug when verbose.
pub fn init_logging(log_file: Option<&Path>, verbose: bool) -> Result<(), AppError> {
    if let Some(path) = log_file {
        init_log_file(path)?;
    }

    // A logger may already be installed (tests); keep it.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    Ok(())
}

// ============================================================================
// MACRO DEFINITIONS & EXPORTS
// ============================================================================

#[macro_export]
macro_rules! log_info {
    ($cat:expr, $($arg:tt)*) => {
        ::log::info!(target: $cat, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($cat:expr, $($arg:tt)*) => {
        ::log::warn!(target: $cat, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($cat:expr, $($arg:tt)*) => {
        ::log::error!(target: $cat, $($arg)*)
    };
}

// ENTER/EXIT macros for function tracing

#[macro_export]
macro_rules! log_enter {
    ($cat:expr, $func:expr) => {
        ::log::debug!(target: $cat, "ENTER {}", $func)
    };
    ($cat:expr, $func:expr, $($arg:tt)*) => {
        ::log::debug!(target: $cat, "ENTER {} {}", $func, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_exit {
    ($cat:expr, $func:expr) => {
        ::log::debug!(target: $cat, "EXIT {}", $func)
    };
    ($cat:expr, $func:expr, $($arg:tt)*) => {
        ::log::debug!(target: $cat, "EXIT {} {}", $func, format!($($arg)*))
    };
}

// Re-export the macros so they can be imported via `use crate::logging::log_info;`
pub use crate::log_enter;
pub use crate::log_error;
pub use crate::log_exit;
pub use crate::log_info;
pub use crate::log_warn;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(format_line(7, "I", "SESSION", "loaded"), "7|I|SESSION|loaded");
        assert_eq!(level_code(Level::Warn), "W");
        assert_eq!(level_code(Level::Trace), "T");
    }

    #[test]
    fn test_sequence_increases() {
        let first = next_seq();
        let second = next_seq();
        assert!(second > first);
    }

    #[test]
    fn test_write_log_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.log");
        init_log_file(&path).unwrap();
        assert_eq!(get_log_path(), Some(path.clone()));

        write_log("I", "TEST", "hello ledger");

        let content = std::fs::read_to_string(&path).unwrap();
        let line = content
            .lines()
            .find(|line| line.ends_with("|I|TEST|hello ledger"))
            .unwrap();
        let seq: u64 = line.split('|').next().unwrap().parse().unwrap();
        assert!(seq > 0);
    }
}
