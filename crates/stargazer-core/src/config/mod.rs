mod channels;
mod defaults;
mod providers;

#[cfg(test)]
mod tests;

pub use channels::*;
pub use providers::*;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::StargazerError;
use defaults::*;

/// Environment variable that overrides `telegram.bot_token`.
pub const ENV_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
/// Environment variable that overrides `nasa.api_key`.
pub const ENV_NASA_API_KEY: &str = "NASA_API_KEY";

/// Top-level Stargazer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub stargazer: StargazerConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub nasa: NasaConfig,
    #[serde(default)]
    pub translate: TranslateConfig,
}

/// General bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StargazerConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Reply language and translation target (ISO 639-1 code).
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for StargazerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            language: default_language(),
        }
    }
}

impl Config {
    /// Overlay secrets from the environment onto the loaded file.
    ///
    /// Empty variables are ignored so a blank export does not wipe a value
    /// set in the file.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Same as [`Config::apply_env`] with an explicit lookup function.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(token) = lookup(ENV_BOT_TOKEN).filter(|v| !v.is_empty()) {
            self.telegram.bot_token = token;
        }
        if let Some(key) = lookup(ENV_NASA_API_KEY).filter(|v| !v.is_empty()) {
            self.nasa.api_key = key;
        }
    }

    /// Whether the explanation needs a translation call at all.
    ///
    /// NASA publishes in English, so an English target is a no-op.
    pub fn needs_translation(&self) -> bool {
        self.translate.enabled && !self.stargazer.language.eq_ignore_ascii_case("en")
    }
}

/// Load configuration from a TOML file.
///
/// Returns `Ok(None)` if the file does not exist; the caller decides
/// whether defaults are acceptable and reports it once logging is up.
pub fn load(path: &str) -> Result<Option<Config>, StargazerError> {
    let path = Path::new(path);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        StargazerError::Config(format!("failed to read {}: {}", path.display(), e))
    })?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| StargazerError::Config(format!("failed to parse config: {}", e)))?;

    Ok(Some(config))
}
