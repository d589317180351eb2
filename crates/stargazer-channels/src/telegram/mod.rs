//! Telegram Bot API channel.
//!
//! Uses long polling via `getUpdates`; replies go out through `sendMessage`,
//! `sendPhoto`, and `sendChatAction`.
//! Docs: <https://core.telegram.org/bots/api>

mod polling;
pub(crate) mod send;
pub(crate) mod types;


use stargazer_core::config::TelegramConfig;
use std::sync::{Arc, OnceLock};
use tokio::sync::Mutex;

/// Maximum `sendMessage` text length in bytes.
pub const MAX_MESSAGE_LEN: usize = 4096;
/// Maximum `sendPhoto` caption length in characters.
pub const MAX_CAPTION_CHARS: usize = 1024;

/// A command shown in the client's autocomplete menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotCommand {
    pub command: String,
    pub description: String,
}

/// Telegram channel using the Bot API with long polling.
pub struct TelegramChannel {
    config: TelegramConfig,
    client: reqwest::Client,
    base_url: String,
    /// Commands registered with `setMyCommands` when polling starts.
    commands: Vec<BotCommand>,
    /// Tracks the last update_id to avoid reprocessing.
    last_update_id: Arc<Mutex<Option<i64>>>,
    /// The bot's own @username, resolved by `getMe` on start.
    bot_username: OnceLock<String>,
}

impl TelegramChannel {
    /// Create a new Telegram channel from config.
    pub fn new(config: TelegramConfig) -> Self {
        let base_url = format!("https://api.telegram.org/bot{}", config.bot_token);
        Self {
            config,
            client: reqwest::Client::new(),
            base_url,
            commands: Vec::new(),
            last_update_id: Arc::new(Mutex::new(None)),
            bot_username: OnceLock::new(),
        }
    }

    /// Set the command menu to register on start.
    pub fn with_commands(mut self, commands: Vec<BotCommand>) -> Self {
        self.commands = commands;
        self
    }
}
