use serde::{Deserialize, Serialize};

use super::defaults::*;

/// NASA open data API config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NasaConfig {
    /// API key from api.nasa.gov. `DEMO_KEY` works with tight rate limits.
    #[serde(default = "default_nasa_api_key")]
    pub api_key: String,
    #[serde(default = "default_nasa_base_url")]
    pub base_url: String,
    /// Mars rover whose photos `/mars` draws from.
    #[serde(default = "default_rover")]
    pub rover: String,
    /// Martian day the rover photos are taken from.
    #[serde(default = "default_sol")]
    pub sol: u32,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for NasaConfig {
    fn default() -> Self {
        Self {
            api_key: default_nasa_api_key(),
            base_url: default_nasa_base_url(),
            rover: default_rover(),
            sol: default_sol(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Machine translation config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_translate_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_translate_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}
