//! Telegram glue: dispatcher setup, command menu and reply delivery

use crate::error::BotResult;
use crate::reply::{fit_message, reply_keyboard};
use owrt_commands::{Request, Router};
use owrt_config::Config;
use std::sync::Arc;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::types::{BotCommand, ChatId, Me};
use tracing::{debug, error, info, warn};

/// Main bot structure
pub struct OwrtBot {
    config: Arc<Config>,
    router: Arc<Router>,
}

impl OwrtBot {
    /// Creates a new bot instance
    pub fn new(config: Arc<Config>, router: Router) -> Self {
        Self {
            config,
            router: Arc::new(router),
        }
    }

    /// Connects to Telegram and processes updates until Ctrl-C
    pub async fn start(&self) -> BotResult<()> {
        let bot = Bot::new(self.config.telegram.token.expose());

        // Fails fast on a revoked or mistyped token.
        let me = bot.get_me().await?;
        info!(username = %me.username(), "Connected to Telegram");

        self.register_commands(&bot).await;

        // Edits and channel posts are answered like fresh messages.
        let handler = dptree::entry()
            .branch(Update::filter_message().endpoint(handle_message))
            .branch(Update::filter_edited_message().endpoint(handle_message))
            .branch(Update::filter_channel_post().endpoint(handle_message));

        info!("Starting long polling");
        Dispatcher::builder(bot, handler)
            .dependencies(dptree::deps![Arc::clone(&self.router), me])
            .default_handler(|upd| async move {
                debug!("Ignoring update: {:?}", upd.kind);
            })
            .error_handler(LoggingErrorHandler::with_custom_text(
                "Error in message handler",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        info!("Dispatcher stopped");
        Ok(())
    }

    /// Publishes the command table as the bot's command menu
    async fn register_commands(&self, bot: &Bot) {
        let commands = self
            .router
            .commands()
            .iter()
            .map(|entry| BotCommand::new(entry.name, entry.description));

        match bot.set_my_commands(commands).await {
            Ok(_) => info!(count = self.router.commands().len(), "Bot commands registered"),
            Err(e) => warn!(error = %e, "Failed to register bot commands"),
        }
    }
}

/// Endpoint for every incoming message, edit and channel post
async fn handle_message(
    bot: Bot,
    msg: Message,
    me: Me,
    router: Arc<Router>,
) -> ResponseResult<()> {
    let chat_id = owrt_common::ChatId(msg.chat.id.0);
    let request = Request::parse(chat_id, msg.text(), me.username());

    let reply = router.dispatch(&request).await;
    send_reply(&bot, msg.chat.id, &reply).await;

    Ok(())
}

/// Sends reply text with the command keyboard. Failures are logged, not retried
async fn send_reply(bot: &Bot, chat_id: ChatId, text: &str) {
    let result = bot
        .send_message(chat_id, fit_message(text))
        .reply_markup(reply_keyboard())
        .await;

    if let Err(e) = result {
        error!(chat_id = chat_id.0, error = %e, "Failed to send reply");
    }
}
