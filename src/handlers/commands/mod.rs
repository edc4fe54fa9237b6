//! Command handlers module
//!
//! This module contains handlers for all bot commands like /start, /help, etc.

pub mod start;
pub mod help;
pub mod access;

use teloxide::{Bot, types::Message, utils::command::BotCommands};
use crate::utils::errors::{StarPassError, Result};
use crate::services::ServiceFactory;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "StarPass commands:")]
pub enum Command {
    #[command(description = "Choose your language")]
    Start,
    #[command(description = "Buy the 30-day Direct Pass")]
    DirectPass,
    #[command(description = "Pick a subscription plan")]
    Subscribe,
    #[command(description = "Show help information")]
    Help,
}

/// Main command dispatcher
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: ServiceFactory,
) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        StarPassError::InvalidInput("No user in message".to_string())
    })?;
    let user_id = user.id.0 as i64;
    let chat_id = msg.chat.id;

    match cmd {
        Command::Start => start::handle_start(bot, chat_id, user_id).await,
        Command::DirectPass => access::handle_direct_pass(bot, chat_id, user_id, services).await,
        Command::Subscribe => access::handle_subscribe(bot, chat_id, user_id, services).await,
        Command::Help => help::handle_help(bot, chat_id, user_id, services).await,
    }
}
