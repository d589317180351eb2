mod commands;
mod gateway;
mod i18n;
#[cfg(test)]
mod mocks;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{Command, CommandContext};
use rand::rngs::StdRng;
use rand::SeedableRng;
use stargazer_channels::telegram::TelegramChannel;
use stargazer_core::{
    config::{self, Config, ENV_BOT_TOKEN},
    message::Reply,
    traits::{Passthrough, SpaceApi, Translator},
};
use stargazer_providers::{nasa::NasaClient, translate::GoogleTranslator};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "stargazer",
    version,
    about = "Stargazer — NASA open data in your Telegram chat"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, env = "STARGAZER_CONFIG", default_value = "config.toml", global = true)]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Telegram bot.
    Start,
    /// Show which settings are configured.
    Status,
    /// Run one command locally and print the reply.
    Fetch {
        /// Which command to run.
        #[arg(value_enum)]
        what: FetchTarget,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FetchTarget {
    Start,
    Apod,
    Asteroids,
    Mars,
}

impl From<FetchTarget> for Command {
    fn from(target: FetchTarget) -> Self {
        match target {
            FetchTarget::Start => Command::Start,
            FetchTarget::Apod => Command::Apod,
            FetchTarget::Asteroids => Command::Asteroids,
            FetchTarget::Mars => Command::Mars,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = config::load(&cli.config)?;
    let found = loaded.is_some();
    let mut cfg = loaded.unwrap_or_default();
    cfg.apply_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.stargazer.log_level)),
        )
        .init();

    if !found {
        info!("Config file not found at {}, using defaults", cli.config);
    }

    match cli.command {
        Commands::Start => {
            if cfg.telegram.bot_token.is_empty() {
                anyhow::bail!(
                    "Telegram bot_token is empty. \
                     Set it in {} or the {ENV_BOT_TOKEN} env var.",
                    cli.config
                );
            }

            let (space, translator) = build_services(&cfg)?;
            let channel = TelegramChannel::new(cfg.telegram.clone())
                .with_commands(commands::bot_commands(&cfg.stargazer.language));

            println!("Stargazer — Starting bot...");
            let gw = Arc::new(gateway::Gateway::new(
                Arc::new(channel),
                space,
                translator,
                cfg.stargazer.language.clone(),
            ));
            gw.run().await?;
        }
        Commands::Status => {
            println!("Stargazer — Status Check\n");
            println!("Config: {}", cli.config);
            println!("Language: {}", cfg.stargazer.language);
            println!();
            println!(
                "  telegram: {}",
                if cfg.telegram.bot_token.is_empty() {
                    "missing bot_token"
                } else {
                    "configured"
                }
            );
            println!(
                "  nasa: {} ({})",
                if cfg.nasa.api_key == "DEMO_KEY" {
                    "DEMO_KEY, rate limited"
                } else {
                    "api key set"
                },
                cfg.nasa.base_url
            );
            println!(
                "  translate: {}",
                if cfg.needs_translation() {
                    "google"
                } else {
                    "off"
                }
            );
        }
        Commands::Fetch { what } => {
            let (space, translator) = build_services(&cfg)?;
            let ctx = CommandContext {
                space: space.as_ref(),
                translator: translator.as_ref(),
                lang: &cfg.stargazer.language,
                sender_name: None,
                today: chrono::Utc::now().date_naive(),
            };
            let mut rng = StdRng::from_entropy();
            let reply = commands::handle(what.into(), &ctx, &mut rng).await?;
            if let Reply::Photo { url, .. } = &reply {
                println!("{url}\n");
            }
            println!("{}", reply.text());
        }
    }

    Ok(())
}

/// Build the upstream clients shared by every handler.
fn build_services(cfg: &Config) -> anyhow::Result<(Arc<dyn SpaceApi>, Arc<dyn Translator>)> {
    let space: Arc<dyn SpaceApi> = Arc::new(NasaClient::from_config(&cfg.nasa)?);

    let translator: Arc<dyn Translator> = if cfg.needs_translation() {
        Arc::new(GoogleTranslator::from_config(&cfg.translate)?)
    } else {
        Arc::new(Passthrough)
    };

    info!(
        "services ready | nasa: {} | translator: {}",
        cfg.nasa.base_url,
        translator.name()
    );
    Ok((space, translator))
}
