//! Start command handler
//!
//! Handles the /start command and the language selection that follows it

use teloxide::{Bot, types::{InlineKeyboardMarkup, InlineKeyboardButton, ChatId}, prelude::*};
use teloxide::payloads::SendMessageSetters;
use tracing::info;
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;
use crate::services::ServiceFactory;
use crate::i18n::{Language, LANGUAGE_PROMPT};

/// Handle /start command - shows the language menu, touches no state
pub async fn handle_start(bot: Bot, chat_id: ChatId, user_id: i64) -> Result<()> {
    bot.send_message(chat_id, LANGUAGE_PROMPT)
        .reply_markup(language_keyboard())
        .await?;

    info!(user_id = user_id, "User started the bot");
    Ok(())
}

/// One language per row, in menu order
pub fn language_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(
        Language::ALL
            .into_iter()
            .map(|lang| vec![InlineKeyboardButton::callback(lang.label(), lang.callback_data())])
    )
}

/// Handle language selection callback
pub async fn handle_language_callback(
    bot: Bot,
    chat_id: ChatId,
    user_id: i64,
    language: Language,
    services: ServiceFactory,
) -> Result<()> {
    services.store.set_language(user_id, language).await?;

    let text = &services.catalog.messages(language).language_set;
    bot.send_message(chat_id, text.as_str()).await?;

    log_user_action(user_id, "language_selected", Some(language.code()));
    Ok(())
}
