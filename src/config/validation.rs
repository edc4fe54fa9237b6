//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::i18n::Language;
use crate::utils::errors::{StarPassError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_channel_config(&settings.channel)?;
    validate_database_config(&settings.database)?;
    validate_sweeper_config(&settings.sweeper)?;
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(StarPassError::Config(
            "Bot token is required".to_string()
        ));
    }

    if let Some(ref api_url) = config.api_url {
        url::Url::parse(api_url).map_err(|e| StarPassError::Config(
            format!("Invalid Bot API URL '{}': {}", api_url, e)
        ))?;
    }

    Ok(())
}

/// Validate channel configuration
fn validate_channel_config(config: &super::ChannelConfig) -> Result<()> {
    let id = config.id.trim();

    if id.is_empty() {
        return Err(StarPassError::Config(
            "Channel ID is required".to_string()
        ));
    }

    if !id.starts_with('@') && id.parse::<i64>().is_err() {
        return Err(StarPassError::Config(
            format!("Channel ID must be a numeric chat id or an @username, got: {}", id)
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(StarPassError::Config(
            "Database URL is required".to_string()
        ));
    }

    if config.max_connections == 0 {
        return Err(StarPassError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(StarPassError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    Ok(())
}

/// Validate sweeper configuration
fn validate_sweeper_config(config: &super::SweeperConfig) -> Result<()> {
    if config.interval_seconds == 0 {
        return Err(StarPassError::Config(
            "Sweep interval must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if Language::from_code(&config.default_language).is_none() {
        return Err(StarPassError::Config(
            format!(
                "Default language must be one of {:?}, got: {}",
                Language::ALL.map(|l| l.code()),
                config.default_language
            )
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(StarPassError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(StarPassError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
