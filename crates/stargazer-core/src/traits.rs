use crate::{
    error::{FetchError, StargazerError},
    message::{ChatAction, IncomingMessage, OutgoingMessage},
    space::{Apod, MarsPhotos, NeoFeed},
};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Messaging Channel trait.
///
/// Every messaging platform implements this trait to receive commands
/// and send replies.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Start listening for incoming messages.
    /// Returns a receiver that yields incoming messages.
    async fn start(&self) -> Result<tokio::sync::mpsc::Receiver<IncomingMessage>, StargazerError>;

    /// The bot's own handle on this platform, once known.
    ///
    /// Commands addressed to a different handle are ignored.
    fn bot_username(&self) -> Option<String> {
        None
    }

    /// Send a text reply back through this channel.
    async fn send(&self, message: OutgoingMessage) -> Result<(), StargazerError>;

    /// Show a presence indicator ("typing", "uploading photo") in the chat.
    async fn send_chat_action(
        &self,
        _target: &str,
        _action: ChatAction,
    ) -> Result<(), StargazerError> {
        Ok(())
    }

    /// Send a photo referenced by URL with a caption.
    async fn send_photo(
        &self,
        target: &str,
        url: &str,
        caption: &str,
    ) -> Result<(), StargazerError>;

    /// Graceful shutdown.
    async fn stop(&self) -> Result<(), StargazerError>;
}

/// Source of space data.
///
/// All three endpoints share one failure contract: any non-200 status,
/// transport error, or malformed body comes back as a [`FetchError`].
#[async_trait]
pub trait SpaceApi: Send + Sync {
    /// Astronomy Picture of the Day for a given date.
    async fn apod(&self, date: NaiveDate) -> Result<Apod, FetchError>;

    /// Near-Earth objects approaching over the coming week.
    async fn neo_feed(&self) -> Result<NeoFeed, FetchError>;

    /// Rover photos for the configured sol.
    async fn mars_photos(&self) -> Result<MarsPhotos, FetchError>;
}

/// Machine translation backend.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Translate `text` into `target_lang` (ISO 639-1 code, e.g. "ru").
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, StargazerError>;
}

/// Translator that returns its input unchanged.
///
/// Used when translation is disabled or the target is the source language.
pub struct Passthrough;

#[async_trait]
impl Translator for Passthrough {
    fn name(&self) -> &str {
        "passthrough"
    }

    async fn translate(&self, text: &str, _target_lang: &str) -> Result<String, StargazerError> {
        Ok(text.to_string())
    }
}
