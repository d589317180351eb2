//! Bot commands: parsing, presence hints, and dispatch to the handlers.

mod apod;
mod asteroids;
mod mars;
mod start;


use chrono::NaiveDate;
use rand::Rng;
use stargazer_channels::telegram::BotCommand;
use stargazer_core::{
    error::StargazerError,
    message::{ChatAction, Reply},
    traits::{SpaceApi, Translator},
};

use crate::i18n::t;

/// Collaborators and request data a handler may use.
pub struct CommandContext<'a> {
    pub space: &'a dyn SpaceApi,
    pub translator: &'a dyn Translator,
    /// Reply and translation language (ISO 639-1).
    pub lang: &'a str,
    /// First name of whoever sent the command.
    pub sender_name: Option<&'a str>,
    /// Today's date, the upper bound for the random APOD date.
    pub today: NaiveDate,
}

/// Known bot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Apod,
    Asteroids,
    Mars,
}

impl Command {
    pub const ALL: [Command; 4] = [Self::Start, Self::Apod, Self::Asteroids, Self::Mars];

    /// Parse a command from message text. Returns `None` for plain text,
    /// unknown commands, and commands addressed to another bot
    /// (`/apod@other_bot`). When `bot_username` is unknown any mention is
    /// accepted.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        let (cmd, mention) = match first.split_once('@') {
            Some((cmd, mention)) => (cmd, Some(mention)),
            None => (first, None),
        };
        if let (Some(mention), Some(me)) = (mention, bot_username) {
            if !mention.eq_ignore_ascii_case(me) {
                return None;
            }
        }
        match cmd {
            "/start" => Some(Self::Start),
            "/apod" => Some(Self::Apod),
            "/asteroids" => Some(Self::Asteroids),
            "/mars" => Some(Self::Mars),
            _ => None,
        }
    }

    /// Command keyword without the slash.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Apod => "apod",
            Self::Asteroids => "asteroids",
            Self::Mars => "mars",
        }
    }

    /// Presence indicator to show before the handler does network work.
    pub fn presence(&self) -> Option<ChatAction> {
        match self {
            Self::Start => None,
            Self::Apod | Self::Mars => Some(ChatAction::UploadPhoto),
            Self::Asteroids => Some(ChatAction::Typing),
        }
    }

    fn description(&self, lang: &str) -> &'static str {
        match self {
            Self::Start => t("cmd_start", lang),
            Self::Apod => t("cmd_apod", lang),
            Self::Asteroids => t("cmd_asteroids", lang),
            Self::Mars => t("cmd_mars", lang),
        }
    }
}

/// Localized command menu for the Telegram client.
pub fn bot_commands(lang: &str) -> Vec<BotCommand> {
    Command::ALL
        .iter()
        .map(|c| BotCommand {
            command: c.name().to_string(),
            description: c.description(lang).to_string(),
        })
        .collect()
}

/// Handle a command and return the reply to send.
///
/// Upstream fetch failures become fallback text; only translation errors
/// propagate.
pub async fn handle<R>(
    cmd: Command,
    ctx: &CommandContext<'_>,
    rng: &mut R,
) -> Result<Reply, StargazerError>
where
    R: Rng + Send,
{
    match cmd {
        Command::Start => Ok(start::handle_start(ctx)),
        Command::Apod => apod::handle_apod(ctx, rng).await,
        Command::Asteroids => Ok(asteroids::handle_asteroids(ctx, rng).await),
        Command::Mars => Ok(mars::handle_mars(ctx, rng).await),
    }
}
