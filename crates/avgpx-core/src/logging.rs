//! Logging initialization using the `tracing` ecosystem.
//!
//! Provides:
//! - Console output (human-readable, or JSON lines)
//! - File output (daily rotation via `tracing-appender`, non-blocking writer)
//! - Configurable log level via env var `RUST_LOG` or explicit parameter

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// Should be called once at program start. The returned guard flushes the
/// file writer on drop, so hold it until the process exits.
///
/// # Parameters
///
/// - `log_level`: default level if `RUST_LOG` env var is not set (e.g. `"info"`)
/// - `log_dir`: optional directory for daily-rotating log files
/// - `module_name`: used as the log file prefix (e.g. `"avgpx"`)
/// - `json`: emit JSON lines instead of human-readable console output
pub fn init_logging(log_level: &str, log_dir: Option<&str>, module_name: &str, json: bool) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    let console = fmt::layer().with_target(true);
    if json {
        layers.push(console.json().boxed());
    } else {
        layers.push(console.with_ansi(true).boxed());
    }

    let guard = log_dir.map(|dir| {
        let file_appender = tracing_appender::rolling::daily(dir, module_name);
        let (writer, guard) = tracing_appender::non_blocking(file_appender);
        layers.push(fmt::layer().with_writer(writer).with_ansi(false).with_target(true).boxed());
        guard
    });

    tracing_subscriber::registry().with(layers).with(env_filter).init();
    if let Some(dir) = log_dir {
        tracing::info!("[logging] writing {module_name}.<date> files to {dir}");
    }
    guard
}
