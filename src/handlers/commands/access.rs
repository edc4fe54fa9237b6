//! Purchase handlers: /directpass, /subscribe and the plan buttons
//!
//! Access is granted as soon as the user asks for it. The price text only
//! asks for a proof of payment, which is reviewed by hand outside the bot.

use teloxide::{Bot, types::{InlineKeyboardMarkup, InlineKeyboardButton, ChatId}, prelude::*};
use teloxide::payloads::SendMessageSetters;
use tracing::info;
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;
use crate::services::ServiceFactory;
use crate::i18n::MessagePack;
use crate::models::{AccessGrant, Plan};

/// Handle /directpass command
pub async fn handle_direct_pass(
    bot: Bot,
    chat_id: ChatId,
    user_id: i64,
    services: ServiceFactory,
) -> Result<()> {
    let (language, messages) = services.messages_for(user_id).await?;
    bot.send_message(chat_id, messages.direct_pass.as_str()).await?;

    let grant = AccessGrant::DirectPass;
    let record = services
        .store
        .grant_access(user_id, language, grant.duration_days(), grant.join_method())
        .await?;

    bot.send_message(chat_id, messages.direct_pass_confirm.as_str()).await?;

    info!(user_id = user_id, expires_at = ?record.access_expires_at, "Direct pass granted");
    log_user_action(user_id, "direct_pass", Some(language.code()));
    Ok(())
}

/// Handle /subscribe command - shows the plan keyboard
pub async fn handle_subscribe(
    bot: Bot,
    chat_id: ChatId,
    user_id: i64,
    services: ServiceFactory,
) -> Result<()> {
    let (_, messages) = services.messages_for(user_id).await?;

    bot.send_message(chat_id, messages.choose_plan.as_str())
        .reply_markup(plan_keyboard(messages))
        .await?;

    log_user_action(user_id, "subscription_plans_opened", None);
    Ok(())
}

/// Both plans side by side on one row
pub fn plan_keyboard(messages: &MessagePack) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        messages
            .plans
            .iter()
            .map(|option| InlineKeyboardButton::callback(option.label.clone(), option.token.callback_data()))
            .collect::<Vec<_>>(),
    ])
}

/// Handle SUB_15 / SUB_30 callbacks
pub async fn handle_plan_callback(
    bot: Bot,
    chat_id: ChatId,
    user_id: i64,
    plan: Plan,
    services: ServiceFactory,
) -> Result<()> {
    let (language, messages) = services.messages_for(user_id).await?;

    let grant = AccessGrant::Subscription(plan);
    let record = services
        .store
        .grant_access(user_id, language, grant.duration_days(), grant.join_method())
        .await?;

    bot.send_message(chat_id, messages.plan_confirmation(plan)).await?;

    info!(
        user_id = user_id,
        plan = plan.callback_data(),
        expires_at = ?record.access_expires_at,
        "Subscription granted"
    );
    log_user_action(user_id, "subscription", Some(plan.callback_data()));
    Ok(())
}
