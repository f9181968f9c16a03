//! Structured JSONL logging plus human-readable stderr output.
//!
//! This module provides dual-output logging:
//! - **JSONL to file** (~/.keyfocus/logs/keyfocus.jsonl) - structured for tooling
//! - **Pretty to stderr** - human-readable for developers
//!
//! # Usage
//!
//! ```rust,ignore
//! use keyfocus::logging;
//!
//! // Initialize logging - MUST keep guard alive for duration of program
//! let _guard = logging::init();
//!
//! // Use tracing macros directly
//! tracing::info!(event_type = "app_start", "Application started");
//! ```
//!
//! # JSONL Output Format
//!
//! Each line is a valid JSON object:
//! ```json
//! {"timestamp":"2026-10-17T10:30:45.123Z","level":"DEBUG","target":"keyfocus::logging","fields":{"event_type":"key_route","kind":"Down","logical":"a","result":"Handled","reason":"insert","message":"Key Down a -> Handled (insert)"}}
//! ```

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::keys::{KeyEvent, KeyEventResult};

const LOG_FILE_NAME: &str = "keyfocus.jsonl";

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the dual-output logging system.
///
/// Returns a guard that MUST be kept alive for the duration of the program.
/// If the log file cannot be opened, file output is discarded and stderr
/// logging still works.
pub fn init() -> LoggingGuard {
    let log_path = log_path();
    let file_writer: Box<dyn io::Write + Send> = match open_log_file(&log_path) {
        Ok(file) => Box::new(file),
        Err(e) => {
            eprintln!("[LOGGING] Failed to open log file {}: {}", log_path.display(), e);
            Box::new(io::sink())
        }
    };

    // Non-blocking writer so logging never stalls the UI thread
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_writer);

    // Environment filter - default to info, allow override via RUST_LOG
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NONE);

    let pretty_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    // try_init: a host that already installed a subscriber keeps it
    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .try_init()
        .is_ok();

    tracing::info!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %log_path.display(),
        subscriber_installed = installed,
        "Logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Get the log directory path (~/.keyfocus/logs/)
fn get_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".keyfocus").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("keyfocus-logs"))
}

/// Get the path to the JSONL log file
pub fn log_path() -> PathBuf {
    get_log_dir().join(LOG_FILE_NAME)
}

/// Log one routing decision with structured fields.
///
/// `verbose` promotes the record from trace to debug so it shows up with
/// `RUST_LOG=keyfocus=debug` without enabling every trace in the crate.
pub fn log_key_decision(
    event: &KeyEvent,
    result: KeyEventResult,
    reason: &'static str,
    verbose: bool,
) {
    if verbose {
        tracing::debug!(
            event_type = "key_route",
            kind = ?event.kind,
            physical_key = %event.physical,
            logical = %event.logical,
            modifiers = %event.modifiers,
            result = ?result,
            reason = reason,
            "Key {:?} {} -> {:?} ({})", event.kind, event.logical, result, reason
        );
    } else {
        tracing::trace!(
            event_type = "key_route",
            kind = ?event.kind,
            physical_key = %event.physical,
            logical = %event.logical,
            modifiers = %event.modifiers,
            result = ?result,
            reason = reason,
            "Key {:?} {} -> {:?} ({})", event.kind, event.logical, result, reason
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_points_at_jsonl_file() {
        let path = log_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(LOG_FILE_NAME));
        assert!(path.parent().is_some_and(|p| p.ends_with("logs")));
    }
}
