//! StarPass Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use std::time::Duration;
use anyhow::Context;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};

use StarPass::{
    config::Settings,
    utils::logging,
    database::{UserRepository, connection::{create_pool, run_migrations, DatabaseConfig}},
    services::{ServiceFactory, ExpirySweeper, TelegramChannelMembership},
    handlers::{self, Command},
    i18n::{Catalog, Language},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load settings")?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", StarPass::info());

    let default_language = Language::from_code(&settings.i18n.default_language).unwrap_or_default();

    // Initialize database connection
    info!("Connecting to database...");
    let db_pool = create_pool(&DatabaseConfig::from(&settings.database)).await?;
    run_migrations(&db_pool).await?;

    let repository = UserRepository::new(db_pool, default_language);
    info!(users = repository.count().await?, "User store ready");

    info!("Loading translations...");
    let catalog = Catalog::load(default_language)?;

    // Initialize bot
    let mut bot = Bot::new(&settings.bot.token);
    if let Some(api_url) = &settings.bot.api_url {
        bot = bot.set_api_url(url::Url::parse(api_url)?);
    }

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    let store = Arc::new(repository);
    let services = ServiceFactory::new(store.clone(), catalog);

    // Start the expiry sweeper on its own task
    let membership = TelegramChannelMembership::new(bot.clone(), settings.channel.recipient());
    let sweeper = ExpirySweeper::new(
        store,
        Arc::new(membership),
        Duration::from_secs(settings.sweeper.interval_seconds),
    )
    .start();

    let mut dispatcher = Dispatcher::builder(bot, handlers::schema())
        .dependencies(dptree::deps![services])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("StarPass bot is ready, starting polling...");
    dispatcher.dispatch().await;

    if tokio::time::timeout(Duration::from_secs(10), sweeper.shutdown()).await.is_err() {
        warn!("Expiry sweeper did not stop in time, aborting it");
    }

    info!("StarPass bot has been shut down.");
    Ok(())
}
