//! Layered service configuration and startup credentials.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (`trendcast.toml` shipped with the crate)
//! 2. `~/.config/trendcast/trendcast.toml`
//! 3. `./trendcast.toml`
//! 4. An explicit file, usually from `--config`
//! 5. `TRENDCAST__<SECTION>__<KEY>` environment variables

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use trendcast_error::{ConfigError, ConfigErrorKind};
use trendcast_models::DEFAULT_MODEL;
use trendcast_social::{AyrshareConfig, UnsplashConfig};
use trendcast_trends::TrendsConfig;

const DEFAULT_CONFIG: &str = include_str!("../trendcast.toml");

/// Listener and log format settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
    /// Emit JSON log lines instead of human-readable ones
    #[serde(default)]
    pub json_logs: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            json_logs: false,
        }
    }
}

impl ServerSettings {
    /// `host:port` for the listener.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Text model selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiSettings {
    /// Gemini model name
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
        }
    }
}

/// Generation workflow switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Feed trend keywords into the keyword prompt
    #[serde(default)]
    pub use_trend_context: bool,
}

/// Complete service configuration.
///
/// # Example
///
/// ```no_run
/// use trendcast_server::TrendcastConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = TrendcastConfig::load(None)?;
/// println!("listening on {}", config.server.address());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendcastConfig {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerSettings,
    /// Text model
    #[serde(default)]
    pub gemini: GeminiSettings,
    /// Google Trends client and retry schedule
    #[serde(default)]
    pub trends: TrendsConfig,
    /// Image search
    #[serde(default)]
    pub unsplash: UnsplashConfig,
    /// Publishing
    #[serde(default)]
    pub ayrshare: AyrshareConfig,
    /// Workflow switches
    #[serde(default)]
    pub generation: GenerationSettings,
}

impl TrendcastConfig {
    /// Load configuration from a single file, without defaults or overrides.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        Config::builder()
            .add_source(File::from(path))
            .build()
            .map_err(|e| {
                ConfigError::new(ConfigErrorKind::Load(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))
    }

    /// Merge every configuration source, with `explicit` above the files and
    /// below the environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/trendcast/trendcast.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("trendcast").required(false));

        if let Some(path) = explicit {
            debug!(path = %path.display(), "Adding explicit configuration file");
            builder = builder.add_source(File::from(path));
        }

        builder
            .add_source(
                Environment::with_prefix("TRENDCAST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Load(e.to_string())))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))
    }
}

/// API keys read once at startup.
#[derive(Clone)]
pub struct Credentials {
    /// Gemini API key
    pub gemini_api_key: String,
    /// Unsplash access key
    pub unsplash_access_key: String,
    /// Ayrshare API key
    pub ayrshare_api_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("gemini_api_key", &"<redacted>")
            .field("unsplash_access_key", &"<redacted>")
            .field("ayrshare_api_key", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Environment variable holding the Gemini key.
    pub const GEMINI_API_KEY: &'static str = "GEMINI_API_KEY";
    /// Environment variable holding the Unsplash key.
    pub const UNSPLASH_ACCESS_KEY: &'static str = "UNSPLASH_ACCESS_KEY";
    /// Environment variable holding the Ayrshare key.
    pub const AYRSHARE_API_KEY: &'static str = "AYRSHARE_API_KEY";

    /// Read all keys from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read all keys through `lookup`. Empty values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| {
                    ConfigError::new(ConfigErrorKind::MissingCredential(name.to_string()))
                })
        };

        Ok(Self {
            gemini_api_key: require(Self::GEMINI_API_KEY)?,
            unsplash_access_key: require(Self::UNSPLASH_ACCESS_KEY)?,
            ayrshare_api_key: require(Self::AYRSHARE_API_KEY)?,
        })
    }
}
