//! Help command handler

use teloxide::{Bot, types::ChatId, prelude::*};
use crate::utils::errors::Result;
use crate::services::ServiceFactory;

/// Handle /help command
pub async fn handle_help(bot: Bot, chat_id: ChatId, user_id: i64, services: ServiceFactory) -> Result<()> {
    let (_, messages) = services.messages_for(user_id).await?;
    bot.send_message(chat_id, messages.help.as_str()).await?;
    Ok(())
}
