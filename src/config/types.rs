use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote country-data service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL including the API version path (e.g., "https://restcountries.com/v3.1").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Browsing behaviour of the interactive screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Rows appended per "load more" (default: 10).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Quiet period before a search query is applied (default: 300).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Event loop tick in milliseconds (default: 50).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Forces the UI language ("en" or "es"), ignoring the stored choice.
    #[serde(default)]
    pub locale: Option<String>,
}

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_page_size() -> usize {
    10
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_tick_ms() -> u64 {
    50
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
            tick_ms: default_tick_ms(),
            locale: None,
        }
    }
}
