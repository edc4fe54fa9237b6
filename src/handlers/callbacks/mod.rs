//! Callback query handlers module
//!
//! This module contains handlers for all inline keyboard button callbacks

use teloxide::{Bot, types::{CallbackQuery, ChatId}, prelude::*};
use tracing::{debug, warn};
use crate::utils::errors::Result;
use crate::services::ServiceFactory;
use crate::handlers::commands::{access, start};
use crate::i18n::Language;
use crate::models::Plan;

/// Parsed inline button token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    SetLanguage(Language),
    ChoosePlan(Plan),
}

impl CallbackAction {
    pub fn parse(data: &str) -> Option<Self> {
        Language::from_callback_data(data)
            .map(CallbackAction::SetLanguage)
            .or_else(|| Plan::from_callback_data(data).map(CallbackAction::ChoosePlan))
    }
}

/// Main callback query dispatcher
pub async fn handle_callback_query(
    bot: Bot,
    query: CallbackQuery,
    services: ServiceFactory,
) -> Result<()> {
    let user_id = query.from.id.0 as i64;
    let chat_id = query
        .message
        .as_ref()
        .map(|m| m.chat().id)
        .unwrap_or(ChatId(user_id));

    // Answer the callback query first to remove loading state
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        warn!(error = %e, user_id = user_id, "Failed to answer callback query");
    }

    match query.data.as_deref() {
        Some(data) => handle_callback_data(bot, chat_id, user_id, data, services).await,
        None => {
            debug!(user_id = user_id, "Callback query without data");
            Ok(())
        }
    }
}

/// Route a callback token to its handler; unknown tokens are ignored
pub async fn handle_callback_data(
    bot: Bot,
    chat_id: ChatId,
    user_id: i64,
    data: &str,
    services: ServiceFactory,
) -> Result<()> {
    match CallbackAction::parse(data) {
        Some(CallbackAction::SetLanguage(language)) => {
            start::handle_language_callback(bot, chat_id, user_id, language, services).await
        }
        Some(CallbackAction::ChoosePlan(plan)) => {
            access::handle_plan_callback(bot, chat_id, user_id, plan, services).await
        }
        None => {
            warn!(user_id = user_id, data = %data, "Unknown callback data");
            Ok(())
        }
    }
}
