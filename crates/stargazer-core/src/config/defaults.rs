//! Default value functions used by serde for config deserialization.

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_language() -> String {
    "ru".to_string()
}

pub fn default_true() -> bool {
    true
}

pub fn default_poll_timeout() -> u64 {
    30
}

pub fn default_nasa_api_key() -> String {
    "DEMO_KEY".to_string()
}

pub fn default_nasa_base_url() -> String {
    "https://api.nasa.gov".to_string()
}

pub fn default_rover() -> String {
    "curiosity".to_string()
}

pub fn default_sol() -> u32 {
    1000
}

pub fn default_timeout() -> u64 {
    30
}

pub fn default_translate_base_url() -> String {
    "https://translate.googleapis.com".to_string()
}
