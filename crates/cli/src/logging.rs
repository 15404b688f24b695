//! Logging setup for the one-shot commands and the TUI.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Directory for docdex state (log files).
pub fn data_dir() -> PathBuf {
  dirs::data_dir().unwrap_or_else(std::env::temp_dir).join("docdex")
}

/// Console logging for one-shot commands (RUST_LOG respected).
pub fn init_cli_logging() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
    .init();
}

/// File logging while the TUI owns the terminal.
///
/// Returns the guard that must stay alive for the duration of the program.
pub fn init_tui_logging() -> Option<WorkerGuard> {
  let log_dir = data_dir();
  if std::fs::create_dir_all(&log_dir).is_err() {
    // Fall back to console-only logging.
    init_cli_logging();
    return None;
  }

  let file_appender = tracing_appender::rolling::daily(&log_dir, "docdex.log");
  let (writer, guard) = tracing_appender::non_blocking(file_appender);

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
    .with_ansi(false)
    .with_writer(writer)
    .init();

  Some(guard)
}
