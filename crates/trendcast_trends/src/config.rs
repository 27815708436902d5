//! Trends client settings.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use trendcast_rate_limit::RetryPolicy;

/// Query parameters and retry schedule for the Google Trends client.
///
/// ```toml
/// [trends]
/// base_url = "https://trends.google.com"
/// hl = "en-US"
/// tz = 360
/// timeframe = "today 5-y"
/// geo = ""
/// category = 0
/// max_attempts = 3
/// base_delay_ms = 1000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TrendsConfig {
    /// Service root, without a trailing slash
    #[serde(default = "default_base_url")]
    base_url: String,
    /// Interface language
    #[serde(default = "default_hl")]
    hl: String,
    /// Timezone offset in minutes
    #[serde(default = "default_tz")]
    tz: i32,
    /// Time window of the explore query
    #[serde(default = "default_timeframe")]
    timeframe: String,
    /// Region code; empty means worldwide
    #[serde(default)]
    geo: String,
    /// Category filter; 0 means all categories
    #[serde(default)]
    category: u32,
    /// Attempts before giving up on a rate limited lookup
    #[serde(default = "default_max_attempts")]
    max_attempts: u32,
    /// First backoff delay in milliseconds
    #[serde(default = "default_base_delay_ms")]
    base_delay_ms: u64,
}

fn default_base_url() -> String {
    "https://trends.google.com".to_string()
}

fn default_hl() -> String {
    "en-US".to_string()
}

fn default_tz() -> i32 {
    360
}

fn default_timeframe() -> String {
    "today 5-y".to_string()
}

fn default_max_attempts() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    1000
}

impl Default for TrendsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            hl: default_hl(),
            tz: default_tz(),
            timeframe: default_timeframe(),
            geo: String::new(),
            category: 0,
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
        }
    }
}

impl TrendsConfig {
    /// Default settings pointed at another service root.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Backoff schedule built from `max_attempts` and `base_delay_ms`.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.max_attempts,
            Duration::from_millis(self.base_delay_ms),
        )
    }
}
