//! Error handling for StarPass
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for StarPass application
#[derive(Error, Debug)]
pub enum StarPassError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings loading error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for StarPass operations
pub type Result<T> = std::result::Result<T, StarPassError>;

impl StarPassError {
    /// Check if the error is recoverable
    ///
    /// Recoverable errors are worth retrying on the next sweep or update.
    pub fn is_recoverable(&self) -> bool {
        match self {
            StarPassError::Database(_) => true,
            StarPassError::Migration(_) => false,
            StarPassError::Telegram(_) => true,
            StarPassError::Config(_) => false,
            StarPassError::Settings(_) => false,
            StarPassError::Translation(_) => false,
            StarPassError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StarPassError::Database(_) => ErrorSeverity::Critical,
            StarPassError::Migration(_) => ErrorSeverity::Critical,
            StarPassError::Config(_) => ErrorSeverity::Critical,
            StarPassError::Settings(_) => ErrorSeverity::Critical,
            StarPassError::Translation(_) => ErrorSeverity::Critical,
            StarPassError::Telegram(_) => ErrorSeverity::Warning,
            StarPassError::InvalidInput(_) => ErrorSeverity::Info,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
