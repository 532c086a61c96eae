//! Logging infrastructure for terralayer.
//!
//! Provides structured logging with file output and console output:
//! - Writes to `logs/terralayer.log` (cleared on session start)
//! - Also prints to stdout for CLI tailing
//! - Configurable via RUST_LOG environment variable

use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the logging system.
///
/// Creates the logs directory if needed, clears the previous log file,
/// and sets up dual output to both file and stdout.
///
/// # Arguments
///
/// * `log_dir` - Directory for log files (e.g., "logs")
/// * `log_file` - Log filename (e.g., "terralayer.log")
///
/// # Returns
///
/// LoggingGuard that must be kept alive for logging to work
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or the log
/// file cannot be cleared
pub fn init_logging(log_dir: &str, log_file: &str) -> Result<LoggingGuard, io::Error> {
    fs::create_dir_all(log_dir)?;

    // Clear the previous session's log
    let log_path = Path::new(log_dir).join(log_file);
    fs::write(&log_path, "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let timer = LocalTime::rfc_3339();

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_timer(timer.clone())
        .with_span_events(FmtSpan::CLOSE)
        .pretty();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_ansi(true)
        .with_timer(timer)
        .with_span_events(FmtSpan::CLOSE)
        .pretty();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Get the default log directory path.
pub fn default_log_dir() -> &'static str {
    "logs"
}

/// Get the default log file name.
pub fn default_log_file() -> &'static str {
    "terralayer.log"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_locations() {
        assert_eq!(default_log_dir(), "logs");
        assert_eq!(default_log_file(), "terralayer.log");
    }

    #[test]
    fn test_log_file_cleared_on_init_prep() {
        // Exercise the directory/file preparation that init_logging
        // performs, without installing a global subscriber.
        let temp_dir = tempfile::TempDir::new().unwrap();
        let dir = temp_dir.path().join("logs");
        let path = dir.join("terralayer.log");

        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, "stale content").unwrap();
        fs::write(&path, "").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
