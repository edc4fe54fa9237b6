//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the StarPass application.

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::config::LoggingConfig;
use crate::utils::errors::{StarPassError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| StarPassError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let (file_layer, guard) = match config.file_path.as_deref() {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "starpass.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            (Some(fmt::layer().with_ansi(false).with_writer(non_blocking)), Some(guard))
        }
        None => (None, None),
    };

    let json_layer = config.json.then(|| fmt::layer().json().with_writer(std::io::stdout));
    let plain_layer = (!config.json).then(|| fmt::layer().with_writer(std::io::stdout));

    tracing_subscriber::registry()
        .with(filter)
        .with(plain_layer)
        .with(json_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| StarPassError::Config(format!("Failed to install logger: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log the outcome of a single membership revocation
pub fn log_revocation(user_id: i64, error: Option<&StarPassError>) {
    match error {
        None => info!(user_id = user_id, "User removed from channel after access expired"),
        Some(e) if e.is_recoverable() => warn!(
            user_id = user_id,
            error = %e,
            "Failed to remove expired user, will retry next sweep"
        ),
        Some(e) => error!(
            user_id = user_id,
            error = %e,
            severity = %e.severity(),
            "Failed to remove expired user"
        ),
    }
}

/// Log the totals of one sweep cycle
pub fn log_sweep_summary(expired: usize, revoked: usize, failed: usize) {
    if expired == 0 {
        debug!("Expiry sweep found no lapsed grants");
    } else {
        info!(
            expired = expired,
            revoked = revoked,
            failed = failed,
            "Expiry sweep completed"
        );
    }
}
