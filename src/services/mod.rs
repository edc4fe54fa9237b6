//! Services module
//!
//! This module contains the channel membership transport, the expiry sweeper
//! and the dependency bundle injected into every handler.

pub mod membership;
pub mod sweeper;

// Re-export commonly used services
pub use membership::{ChannelMembership, TelegramChannelMembership};
pub use sweeper::{ExpirySweeper, SweepReport, SweeperHandle};

use std::sync::Arc;
use crate::database::SharedUserStore;
use crate::i18n::{Catalog, Language, MessagePack};
use crate::utils::errors::Result;

/// Dependencies shared by all update handlers
#[derive(Clone)]
pub struct ServiceFactory {
    pub store: SharedUserStore,
    pub catalog: Arc<Catalog>,
}

impl ServiceFactory {
    pub fn new(store: SharedUserStore, catalog: Catalog) -> Self {
        Self {
            store,
            catalog: Arc::new(catalog),
        }
    }

    /// The user's stored language and its message pack
    pub async fn messages_for(&self, telegram_id: i64) -> Result<(Language, &MessagePack)> {
        let language = self.store.get_language(telegram_id).await?;
        Ok((language, self.catalog.messages(language)))
    }
}
