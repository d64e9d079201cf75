use std::time::Duration;

use serde::Deserialize;

/// Client configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Recommendation service base URL (no trailing slash needed)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Initial value of the top-k field
    #[serde(default = "default_top_k")]
    pub default_top_k: i64,

    /// Request timeout in seconds; unset means the transport default
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_base_url() -> String {
    "https://shl-recommendation-system-qfgu.onrender.com".to_string()
}

fn default_top_k() -> i64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            default_top_k: default_top_k(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Override the base URL, e.g. from a command-line flag
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Base URL without any trailing slash, so paths can be appended directly
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
