//! Long-polling update loop and Channel trait implementation.

use super::types::{TgMessage, TgResponse, TgUpdate};
use super::TelegramChannel;
use async_trait::async_trait;
use stargazer_core::{
    error::StargazerError,
    message::{ChatAction, IncomingMessage, OutgoingMessage},
    traits::Channel,
};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

const INITIAL_BACKOFF_SECS: u64 = 1;
const MAX_BACKOFF_SECS: u64 = 60;

/// Exponential retry delay for failed polls, capped at one minute.
#[derive(Debug)]
pub(crate) struct Backoff {
    secs: u64,
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            secs: INITIAL_BACKOFF_SECS,
        }
    }
}

impl Backoff {
    /// Delay to wait after a failure; doubles the next one.
    pub(crate) fn fail(&mut self) -> Duration {
        let delay = Duration::from_secs(self.secs);
        self.secs = (self.secs * 2).min(MAX_BACKOFF_SECS);
        delay
    }

    /// Back to the initial delay after a successful poll.
    pub(crate) fn reset(&mut self) {
        self.secs = INITIAL_BACKOFF_SECS;
    }
}

/// `getUpdates` URL. Passing `last_update_id + 1` as the offset confirms
/// every earlier update so the server never redelivers it.
pub(crate) fn poll_url(base_url: &str, timeout_secs: u64, last_update_id: Option<i64>) -> String {
    let mut url = format!("{base_url}/getUpdates?timeout={timeout_secs}");
    if let Some(id) = last_update_id {
        url.push_str(&format!("&offset={}", id + 1));
    }
    url
}

/// Highest update id seen so far, keeping `previous` for an empty batch.
pub(crate) fn latest_update_id(updates: &[TgUpdate], previous: Option<i64>) -> Option<i64> {
    updates
        .iter()
        .map(|u| u.update_id)
        .max()
        .max(previous)
}

#[async_trait]
impl Channel for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn start(&self) -> Result<mpsc::Receiver<IncomingMessage>, StargazerError> {
        self.register_commands().await;

        match self.get_me().await {
            Ok(name) => {
                info!("telegram: running as @{name}");
                let _ = self.bot_username.set(name);
            }
            Err(e) => warn!("could not resolve bot username, accepting any @mention: {e}"),
        }

        let (tx, rx) = mpsc::channel(64);
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let poll_timeout = self.config.poll_timeout_secs;
        let last_update_id = self.last_update_id.clone();

        info!("Telegram channel starting long polling...");

        tokio::spawn(async move {
            let mut backoff = Backoff::default();

            loop {
                let last = *last_update_id.lock().await;
                let url = poll_url(&base_url, poll_timeout, last);

                let resp = match client
                    .get(&url)
                    .timeout(Duration::from_secs(poll_timeout + 5))
                    .send()
                    .await
                {
                    Ok(r) => r,
                    Err(e) => {
                        let delay = backoff.fail();
                        // reqwest includes the URL (and so the token) in its Display.
                        error!(
                            "telegram poll error (retry in {}s): {}",
                            delay.as_secs(),
                            e.without_url()
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                };

                let body: TgResponse<Vec<TgUpdate>> = match resp.json().await {
                    Ok(b) => b,
                    Err(e) => {
                        let delay = backoff.fail();
                        error!(
                            "telegram parse error (retry in {}s): {}",
                            delay.as_secs(),
                            e.without_url()
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                };

                if !body.ok {
                    let delay = backoff.fail();
                    error!(
                        "telegram API error (retry in {}s): {}",
                        delay.as_secs(),
                        body.description.unwrap_or_default()
                    );
                    tokio::time::sleep(delay).await;
                    continue;
                }

                backoff.reset();

                let updates = body.result.unwrap_or_default();
                *last_update_id.lock().await = latest_update_id(&updates, last);

                for update in updates {
                    let Some(incoming) = update.message.and_then(to_incoming) else {
                        continue;
                    };

                    if tx.send(incoming).await.is_err() {
                        info!("telegram channel receiver dropped, stopping poll");
                        return;
                    }
                }
            }
        });

        Ok(rx)
    }

    fn bot_username(&self) -> Option<String> {
        self.bot_username.get().cloned()
    }

    async fn send(&self, message: OutgoingMessage) -> Result<(), StargazerError> {
        let chat_id_str = message
            .reply_target
            .as_deref()
            .ok_or_else(|| StargazerError::Channel("no reply_target on outgoing message".into()))?;

        let chat_id = parse_chat_id(chat_id_str)?;
        self.send_text(chat_id, &message.text).await
    }

    async fn send_chat_action(
        &self,
        target: &str,
        action: ChatAction,
    ) -> Result<(), StargazerError> {
        let chat_id = parse_chat_id(target)?;
        self.post_chat_action(chat_id, action.as_str()).await
    }

    async fn send_photo(
        &self,
        target: &str,
        url: &str,
        caption: &str,
    ) -> Result<(), StargazerError> {
        let chat_id = parse_chat_id(target)?;
        self.send_photo_url(chat_id, url, caption).await
    }

    async fn stop(&self) -> Result<(), StargazerError> {
        info!("Telegram channel stopped");
        Ok(())
    }
}

pub(crate) fn parse_chat_id(target: &str) -> Result<i64, StargazerError> {
    target
        .parse()
        .map_err(|e| StargazerError::Channel(format!("invalid telegram chat_id '{target}': {e}")))
}

/// Turn a raw message into an [`IncomingMessage`].
///
/// Only text messages with a known sender are kept; the bot has nothing to
/// say about stickers, photos, or anonymous channel posts.
pub(crate) fn to_incoming(msg: TgMessage) -> Option<IncomingMessage> {
    let text = msg.text?;
    let Some(user) = msg.from else {
        debug!("telegram: skipping message without sender in chat {}", msg.chat.id);
        return None;
    };
    debug!(
        "telegram: {} message from {} in chat {}",
        msg.chat.chat_type, user.id, msg.chat.id
    );

    Some(IncomingMessage {
        id: Uuid::new_v4(),
        channel: "telegram".to_string(),
        sender_id: user.id.to_string(),
        sender_name: Some(user.first_name),
        text,
        timestamp: chrono::Utc::now(),
        reply_target: Some(msg.chat.id.to_string()),
    })
}
