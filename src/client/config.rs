use std::env;

pub const DEFAULT_BASE_URL: &str = "https://android-kotlin-fun-mastery.appspot.com/";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source; missing or unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            base_url: lookup("AMPHIBIANS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            window_title: lookup("AMPHIBIANS_WINDOW_TITLE").unwrap_or_else(|| "Amphibians".to_string()),
            window_width: lookup("AMPHIBIANS_WINDOW_WIDTH").and_then(|v| v.parse().ok()).unwrap_or(420.0),
            window_height: lookup("AMPHIBIANS_WINDOW_HEIGHT").and_then(|v| v.parse().ok()).unwrap_or(760.0),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        }
    }
}
