//! Logging Setup
//!
//! Library code logs through the `log` facade. The binary calls [`init`]
//! once to route those records into a `tracing` subscriber with:
//! - a human-readable stderr layer
//! - an optional JSON file layer with daily rotation
//! - an `EnvFilter` driven by `RUST_LOG`

use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;

/// Base name of the rolling log file.
pub const LOG_FILE_NAME: &str = "aetheria.log";

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(config: &LoggingConfig, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else if config.level.trim().is_empty() {
        "info".to_string()
    } else {
        config.level.clone()
    }
}

/// Initialize the logging system.
///
/// When `log_dir` is given, JSON logs are also written there. Returns the
/// appender's `WorkerGuard`, which must be kept alive so buffered lines
/// are flushed on shutdown.
pub fn init(config: &LoggingConfig, log_dir: Option<&Path>, verbose: bool) -> Option<WorkerGuard> {
    let make_filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter(config, verbose)))
    };

    let mut guard = None;
    let file_layer = log_dir.and_then(|dir| {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Failed to create logs directory {}: {}", dir.display(), e);
            return None;
        }
        let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
        let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(worker_guard);

        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .json()
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_filter(make_filter()),
        )
    });

    // stdout carries generated names; diagnostics go to stderr
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(make_filter());

    if let Err(e) = tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
    {
        eprintln!("Failed to initialize tracing subscriber: {}", e);
        return guard;
    }

    // Redirect standard `log` macros to `tracing`
    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to initialize LogTracer: {}", e);
    }

    if let Some(dir) = log_dir {
        log::debug!("File logging enabled in {}", dir.join(LOG_FILE_NAME).display());
    }

    guard
}
