//! Bot API calls: sending text, photos and chat actions, command
//! registration, and `getMe`.

use super::types::{TgResponse, TgUser};
use super::{BotCommand, TelegramChannel, MAX_CAPTION_CHARS, MAX_MESSAGE_LEN};
use crate::utils::{split_message, truncate_chars};
use stargazer_core::error::StargazerError;
use tracing::{info, warn};

impl TelegramChannel {
    /// Send a text message to a specific chat.
    pub(crate) async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), StargazerError> {
        for chunk in split_message(text, MAX_MESSAGE_LEN) {
            let body = serde_json::json!({
                "chat_id": chat_id,
                "text": chunk,
            });
            self.post("sendMessage", &body).await?;
        }
        Ok(())
    }

    /// Send a photo by URL; Telegram fetches the image itself.
    pub(crate) async fn send_photo_url(
        &self,
        chat_id: i64,
        url: &str,
        caption: &str,
    ) -> Result<(), StargazerError> {
        let body = serde_json::json!({
            "chat_id": chat_id,
            "photo": url,
            "caption": truncate_chars(caption, MAX_CAPTION_CHARS),
        });
        self.post("sendPhoto", &body).await
    }

    /// Send a chat action (e.g. "typing") to a chat.
    pub(crate) async fn post_chat_action(
        &self,
        chat_id: i64,
        action: &str,
    ) -> Result<(), StargazerError> {
        let body = serde_json::json!({
            "chat_id": chat_id,
            "action": action,
        });
        self.post("sendChatAction", &body).await
    }

    /// Register bot commands with Telegram so users see an autocomplete menu.
    /// Best-effort: logs failures but does not propagate errors.
    pub(crate) async fn register_commands(&self) {
        if self.commands.is_empty() {
            return;
        }

        match self.post("setMyCommands", &commands_body(&self.commands)).await {
            Ok(()) => info!("registered {} Telegram bot commands", self.commands.len()),
            Err(e) => warn!("failed to register Telegram bot commands: {e}"),
        }
    }

    /// Ask Telegram who we are; the username is needed to tell our
    /// `/cmd@name` mentions apart from other bots' in group chats.
    pub(crate) async fn get_me(&self) -> Result<String, StargazerError> {
        let url = format!("{}/getMe", self.base_url);
        let body: TgResponse<TgUser> = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| {
                StargazerError::Channel(format!("telegram getMe failed: {}", e.without_url()))
            })?
            .json()
            .await
            .map_err(|e| {
                StargazerError::Channel(format!("telegram getMe parse failed: {}", e.without_url()))
            })?;

        parse_get_me(body)
    }

    /// POST a JSON body to a Bot API method, mapping non-2xx to an error.
    async fn post(&self, method: &str, body: &serde_json::Value) -> Result<(), StargazerError> {
        let url = format!("{}/{method}", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                StargazerError::Channel(format!("telegram {method} failed: {}", e.without_url()))
            })?;

        let status = resp.status();
        if !status.is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            return Err(StargazerError::Channel(format!(
                "telegram {method} failed ({status}): {error_text}"
            )));
        }

        Ok(())
    }
}

pub(crate) fn commands_body(commands: &[BotCommand]) -> serde_json::Value {
    let list: Vec<serde_json::Value> = commands
        .iter()
        .map(|c| {
            serde_json::json!({
                "command": c.command,
                "description": c.description,
            })
        })
        .collect();
    serde_json::json!({ "commands": list })
}

pub(crate) fn parse_get_me(resp: TgResponse<TgUser>) -> Result<String, StargazerError> {
    if !resp.ok {
        return Err(StargazerError::Channel(format!(
            "telegram getMe failed: {}",
            resp.description.unwrap_or_default()
        )));
    }
    resp.result
        .and_then(|user| user.username)
        .ok_or_else(|| StargazerError::Channel("telegram getMe returned no username".into()))
}
