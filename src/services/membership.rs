//! Channel membership transport
//!
//! Removes users from the paid channel once their access lapses.

use async_trait::async_trait;
use teloxide::{Bot, prelude::*, types::{Recipient, UserId}};
use teloxide::payloads::UnbanChatMemberSetters;
use tracing::debug;
use crate::utils::errors::Result;

/// Outbound membership calls used by the expiry sweeper
#[async_trait]
pub trait ChannelMembership: Send + Sync {
    /// Remove the user from the managed channel
    async fn revoke(&self, telegram_id: i64) -> Result<()>;
}

/// Telegram implementation backed by the bot's admin rights in the channel
#[derive(Clone)]
pub struct TelegramChannelMembership {
    bot: Bot,
    channel: Recipient,
}

impl TelegramChannelMembership {
    pub fn new(bot: Bot, channel: Recipient) -> Self {
        Self { bot, channel }
    }
}

#[async_trait]
impl ChannelMembership for TelegramChannelMembership {
    /// Ban, then lift the ban, so the user leaves the channel but can rejoin
    /// after buying again.
    async fn revoke(&self, telegram_id: i64) -> Result<()> {
        let user_id = UserId(telegram_id as u64);

        self.bot
            .ban_chat_member(self.channel.clone(), user_id)
            .await?;
        self.bot
            .unban_chat_member(self.channel.clone(), user_id)
            .only_if_banned(true)
            .await?;

        debug!(telegram_id = telegram_id, channel = ?self.channel, "Revoked channel membership");
        Ok(())
    }
}
