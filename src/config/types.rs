use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub suspense: SuspenseSettings,
    #[serde(default)]
    pub fetcher: FetcherConfig,
}

/// Resource cache settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// How long a cached resource stays valid, in milliseconds (default: 5000).
    #[serde(default = "default_cache_time_ms")]
    pub cache_time_ms: u64,
}

impl CacheConfig {
    pub fn cache_time(&self) -> Duration {
        Duration::from_millis(self.cache_time_ms)
    }
}

/// Timing of the pending indicator shown during transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspenseSettings {
    /// Give up keeping the old content and show the fallback after this
    /// long, in milliseconds (default: 4000).
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Wait this long before showing the pending indicator (default: 300).
    #[serde(default = "default_busy_delay_ms")]
    pub busy_delay_ms: u64,
    /// Once shown, keep the indicator at least this long (default: 700).
    #[serde(default = "default_busy_min_duration_ms")]
    pub busy_min_duration_ms: u64,
}

/// Which fetcher backs the cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetcherMode {
    /// Query the GraphQL pokemon API over HTTP.
    #[default]
    Graphql,
    /// Serve the built-in roster without network access.
    Offline,
}

/// Fetcher settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetcherConfig {
    #[serde(default)]
    pub mode: FetcherMode,
    /// GraphQL endpoint (graphql mode only).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Artificial latency added to every fetch, in milliseconds (default: 1500).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

fn default_cache_time_ms() -> u64 {
    5000
}

fn default_timeout_ms() -> u64 {
    4000
}

fn default_busy_delay_ms() -> u64 {
    300
}

fn default_busy_min_duration_ms() -> u64 {
    700
}

fn default_endpoint() -> String {
    "https://graphql-pokemon2.vercel.app/".to_string()
}

fn default_delay_ms() -> u64 {
    1500
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    5
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_time_ms: default_cache_time_ms(),
        }
    }
}

impl Default for SuspenseSettings {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            busy_delay_ms: default_busy_delay_ms(),
            busy_min_duration_ms: default_busy_min_duration_ms(),
        }
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            mode: FetcherMode::default(),
            endpoint: default_endpoint(),
            delay_ms: default_delay_ms(),
            request_timeout_seconds: default_request_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}
