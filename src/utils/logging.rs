//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the SportsBuddy application.

use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{ErrorSeverity, SportsBuddyError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file appender when dropped, so the caller
/// must hold it for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let console_layer = if config.json {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stderr).boxed()
    };

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(Path::new(dir), "sportsbuddy.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| SportsBuddyError::Logging(e.to_string()))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log session transitions with structured data
pub fn log_session_action(user_id: Option<&str>, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "Session action performed"
    );
}

/// Log rejected session operations at the error's severity
pub fn log_session_failure(action: &str, err: &SportsBuddyError) {
    let recoverable = err.is_recoverable();
    let severity = err.severity();
    match severity {
        ErrorSeverity::Info => info!(action, recoverable, reason = %err, "Session action rejected"),
        ErrorSeverity::Warning => warn!(action, recoverable, reason = %err, "Session action rejected"),
        ErrorSeverity::Error | ErrorSeverity::Critical => {
            error!(action, recoverable, severity = %severity, reason = %err, "Session action failed")
        }
    }
}

/// Log event participation changes
pub fn log_event_action(event_id: &str, action: &str, user_id: &str, details: Option<&str>) {
    info!(
        event_id = event_id,
        action = action,
        user_id = user_id,
        details = details,
        "Event action performed"
    );
}

/// Log filter evaluations
pub fn log_filter_run(target: &str, criteria: usize, input: usize, output: usize) {
    debug!(
        target_kind = target,
        criteria = criteria,
        input = input,
        output = output,
        "Filter applied"
    );
}
