//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Callback handlers for inline keyboard interactions
//!
//! and the update schema that routes incoming updates to them.

pub mod commands;
pub mod callbacks;

use teloxide::{Bot, dptree, types::{CallbackQuery, Message, Update}};
use teloxide::dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler};
use tracing::error;
use crate::services::ServiceFactory;

pub use commands::{Command, handle_command};
pub use callbacks::{CallbackAction, handle_callback_query, handle_callback_data};

pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = Result<(), HandlerError>;

/// Create the main update handler
pub fn schema() -> UpdateHandler<HandlerError> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handle_commands)
        )
        .branch(
            Update::filter_callback_query()
                .endpoint(handle_callbacks)
        )
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: ServiceFactory,
) -> HandlerResult {
    let user_id = msg.from.as_ref().map(|u| u.id.0);

    if let Err(e) = handle_command(bot, msg, cmd.clone(), services).await {
        error!(user_id = ?user_id, command = ?cmd, error = %e, severity = %e.severity(), "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle callback queries
async fn handle_callbacks(
    bot: Bot,
    query: CallbackQuery,
    services: ServiceFactory,
) -> HandlerResult {
    let user_id = query.from.id.0;
    let data = query.data.clone();

    if let Err(e) = handle_callback_query(bot, query, services).await {
        error!(user_id = user_id, callback_data = ?data, error = %e, severity = %e.severity(), "Error handling callback query");
        return Err(e.into());
    }

    Ok(())
}
