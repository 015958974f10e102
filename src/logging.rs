//! Structured JSONL logging plus human-readable stderr output.
//!
//! Dual output, same shape as the rest of our tooling expects:
//! - **JSONL to file** (`~/.commit-kit/logs/commit-kit.jsonl`) for log tooling
//! - **Compact to stderr** for developers
//!
//! ```rust,ignore
//! let _guard = commit_kit::logging::init();
//! tracing::info!(event_type = "filter_applied", filter_id = "author:alice", "Filter applied");
//! ```

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard flushes and closes the log file.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the dual-output logging system.
///
/// Returns a guard that must be kept alive for the duration of the
/// program. Safe to call more than once; later calls keep the first
/// subscriber and only waste a file handle.
pub fn init() -> LoggingGuard {
    let log_dir = log_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
    }

    let path = log_path();
    let writer: Box<dyn std::io::Write + Send> = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    {
        Ok(file) => Box::new(file),
        Err(e) => {
            eprintln!("[LOGGING] Failed to open log file {}: {}", path.display(), e);
            Box::new(std::io::sink())
        }
    };

    // Non-blocking writer keeps file IO off the UI thread
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(writer);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // JSONL layer for file output
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

    // Compact layer for stderr
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(stderr_layer)
        .try_init();

    tracing::info!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %path.display(),
        "Logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// Log directory (`~/.commit-kit/logs/`), with a temp-dir fallback when
/// the home directory cannot be resolved.
fn log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".commit-kit").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("commit-kit-logs"))
}

/// Path to the JSONL log file.
pub fn log_path() -> PathBuf {
    log_dir().join("commit-kit.jsonl")
}
