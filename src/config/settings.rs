//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};
use teloxide::types::{ChatId, Recipient};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub channel: ChannelConfig,
    pub database: DatabaseConfig,
    pub sweeper: SweeperConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    /// Custom Bot API server, e.g. a self-hosted `telegram-bot-api`
    pub api_url: Option<String>,
}

/// Paid channel the bot manages
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChannelConfig {
    /// Numeric chat id (`-100...`) or public `@username`
    pub id: String,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Expiry sweeper configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SweeperConfig {
    pub interval_seconds: u64,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub default_language: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file; stdout only when unset
    pub file_path: Option<String>,
    pub json: bool,
}

impl ChannelConfig {
    /// Resolve the configured id into a Bot API recipient
    pub fn recipient(&self) -> Recipient {
        match self.id.trim().parse::<i64>() {
            Ok(id) => Recipient::Id(ChatId(id)),
            Err(_) => Recipient::ChannelUsername(self.id.trim().to_string()),
        }
    }
}

impl Settings {
    /// Load settings from configuration file and environment variables
    ///
    /// `BOT_TOKEN`, `CHANNEL_ID` and `DATABASE_URL` take precedence over
    /// everything else so the bot runs on plain PaaS environments.
    pub fn new() -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();

        let settings = config::Config::builder()
            .set_default("bot.token", defaults.bot.token)?
            .set_default("channel.id", defaults.channel.id)?
            .set_default("database.url", defaults.database.url)?
            .set_default("database.max_connections", i64::from(defaults.database.max_connections))?
            .set_default("database.min_connections", i64::from(defaults.database.min_connections))?
            .set_default("sweeper.interval_seconds", defaults.sweeper.interval_seconds as i64)?
            .set_default("i18n.default_language", defaults.i18n.default_language)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.json", defaults.logging.json)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("STARPASS").separator("__"))
            .set_override_option("bot.token", std::env::var("BOT_TOKEN").ok())?
            .set_override_option("channel.id", std::env::var("CHANNEL_ID").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::StarPassError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                api_url: None,
            },
            channel: ChannelConfig {
                id: String::new(),
            },
            database: DatabaseConfig {
                url: "postgresql://localhost/starpass".to_string(),
                max_connections: 10,
                min_connections: 1,
            },
            sweeper: SweeperConfig {
                interval_seconds: 60 * 60,
            },
            i18n: I18nConfig {
                default_language: "en".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
                json: false,
            },
        }
    }
}
