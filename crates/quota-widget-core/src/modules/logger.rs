//! Logging setup.
//!
//! `watch` redraws the terminal, so it logs to a daily-rolling file only;
//! one-shot commands log to stderr.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "quota-widget.log";

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    /// Daily-rolling file inside this directory
    File(&'a Path),
}

/// Install the global subscriber. `level` is an `EnvFilter` directive and is
/// overridden by `RUST_LOG` when set.
///
/// The returned guard must be held for the life of the process when logging
/// to a file, or buffered lines are lost.
pub fn init_logger(level: &str, target: LogTarget<'_>) -> Option<WorkerGuard> {
    let env_filter =
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match target {
        LogTarget::Stderr => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(env_filter());
            let _ = tracing_subscriber::registry().with(layer).try_init();
            None
        },
        LogTarget::File(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(env_filter());
            let _ = tracing_subscriber::registry().with(layer).try_init();
            Some(guard)
        },
    }
}
