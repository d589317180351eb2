//! Gateway: the event loop connecting the channel to the command handlers.
//!
//! Each incoming command runs as its own task in a `JoinSet`; on shutdown
//! the set is aborted, cancelling any fetch still in flight.


use crate::commands::{self, Command, CommandContext};
use rand::rngs::StdRng;
use rand::SeedableRng;
use stargazer_core::{
    error::StargazerError,
    message::{IncomingMessage, OutgoingMessage, Reply},
    traits::{Channel, SpaceApi, Translator},
};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// The central gateway that routes commands from the channel to handlers.
pub struct Gateway {
    channel: Arc<dyn Channel>,
    space: Arc<dyn SpaceApi>,
    translator: Arc<dyn Translator>,
    lang: String,
}

impl Gateway {
    /// Create a new gateway.
    pub fn new(
        channel: Arc<dyn Channel>,
        space: Arc<dyn SpaceApi>,
        translator: Arc<dyn Translator>,
        lang: String,
    ) -> Self {
        Self {
            channel,
            space,
            translator,
            lang,
        }
    }

    /// Run the main event loop until Ctrl-C or the channel closes.
    pub async fn run(self: Arc<Self>) -> anyhow::Result<()> {
        info!(
            "Stargazer gateway running | channel: {} | translator: {} | language: {}",
            self.channel.name(),
            self.translator.name(),
            self.lang,
        );

        let mut rx = self
            .channel
            .start()
            .await
            .map_err(|e| anyhow::anyhow!("failed to start channel {}: {e}", self.channel.name()))?;

        let mut tasks = JoinSet::new();

        loop {
            tokio::select! {
                msg = rx.recv() => match msg {
                    Some(incoming) => {
                        let gw = self.clone();
                        tasks.spawn(async move { gw.dispatch(incoming).await });
                    }
                    None => {
                        info!("channel closed, stopping gateway");
                        break;
                    }
                },
                Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                    if let Err(e) = joined {
                        if e.is_panic() {
                            error!("command task panicked: {e}");
                        }
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        // Graceful shutdown.
        if !tasks.is_empty() {
            info!("cancelling {} in-flight command(s)", tasks.len());
        }
        tasks.shutdown().await;
        if let Err(e) = self.channel.stop().await {
            warn!("failed to stop channel: {e}");
        }
        info!("Stargazer stopped");
        Ok(())
    }

    /// Handle one message, logging failures instead of returning them.
    async fn dispatch(&self, incoming: IncomingMessage) {
        if let Err(e) = self.handle_message(&incoming).await {
            error!(
                "dropping update {} from {}: {e}",
                incoming.id, incoming.sender_id
            );
        }
    }

    /// receive → presence → fetch → (translate) → format → send.
    pub(crate) async fn handle_message(
        &self,
        incoming: &IncomingMessage,
    ) -> Result<(), StargazerError> {
        let me = self.channel.bot_username();
        let Some(cmd) = Command::parse(&incoming.text, me.as_deref()) else {
            debug!("ignoring non-command text from {}", incoming.sender_id);
            return Ok(());
        };

        let target = incoming
            .reply_target
            .as_deref()
            .ok_or_else(|| StargazerError::Channel("no reply_target on incoming message".into()))?;

        info!(
            "/{} from {} (update {})",
            cmd.name(),
            incoming.sender_id,
            incoming.id
        );

        if let Some(action) = cmd.presence() {
            if let Err(e) = self.channel.send_chat_action(target, action).await {
                warn!("failed to send {} indicator: {e}", action.as_str());
            }
        }

        let ctx = CommandContext {
            space: self.space.as_ref(),
            translator: self.translator.as_ref(),
            lang: &self.lang,
            sender_name: incoming.sender_name.as_deref(),
            today: chrono::Utc::now().date_naive(),
        };
        let mut rng = StdRng::from_entropy();
        let reply = commands::handle(cmd, &ctx, &mut rng).await?;

        self.send_reply(target, reply).await
    }

    async fn send_reply(&self, target: &str, reply: Reply) -> Result<(), StargazerError> {
        match reply {
            Reply::Text(text) => {
                self.channel
                    .send(OutgoingMessage {
                        text,
                        reply_target: Some(target.to_string()),
                    })
                    .await
            }
            Reply::Photo { url, caption } => {
                self.channel.send_photo(target, &url, &caption).await
            }
        }
    }
}
