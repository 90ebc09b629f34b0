use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use marquee_core::MovieId;

/// Configuration for marquee.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (MARQUEE_* prefix)
/// 3. Config file (~/.config/marquee/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Scheme and host of the catalog service, without port.
    ///
    /// Can be set via:
    /// - CLI: --base-url http://catalog.local
    /// - ENV: MARQUEE_BASE_URL
    /// - Config: base_url = "..."
    /// - Default: http://localhost
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Port of the catalog service.
    ///
    /// Can be set via:
    /// - CLI: --port 3900
    /// - ENV: MARQUEE_PORT
    /// - Config: port = 3900
    #[serde(default = "default_port", deserialize_with = "number_or_text")]
    pub port: u16,

    /// Path of the movies collection (default: /api/movies).
    #[serde(default = "default_movies_url")]
    pub movies_url: String,

    /// Path of the genres collection (default: /api/genres).
    #[serde(default = "default_genres_url")]
    pub genres_url: String,

    /// Pause between a successful save and navigating back to the list.
    #[serde(default = "default_save_delay_ms", deserialize_with = "number_or_text")]
    pub save_delay_ms: u64,

    /// Per-request HTTP timeout.
    #[serde(
        default = "default_request_timeout_secs",
        deserialize_with = "number_or_text"
    )]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            port: default_port(),
            movies_url: default_movies_url(),
            genres_url: default_genres_url(),
            save_delay_ms: default_save_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from the default config file and environment
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from `config_path` (if it exists) and environment
    /// variables with the MARQUEE_ prefix.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("marquee");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;
        log::debug!("Loaded configuration: {:?}", config);

        Ok(config)
    }

    /// Apply CLI overrides on top of the loaded configuration.
    #[must_use]
    pub fn with_overrides(mut self, base_url: Option<String>, port: Option<u16>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// `{base_url}:{port}`, the root every endpoint hangs off.
    #[must_use]
    pub fn origin(&self) -> String {
        format!("{}:{}", self.base_url.trim_end_matches('/'), self.port)
    }

    #[must_use]
    pub fn genres_endpoint(&self) -> String {
        format!("{}{}", self.origin(), self.genres_url)
    }

    #[must_use]
    pub fn movies_endpoint(&self) -> String {
        format!("{}{}", self.origin(), self.movies_url)
    }

    #[must_use]
    pub fn movie_endpoint(&self, id: &MovieId) -> String {
        format!("{}/{}", self.movies_endpoint(), id)
    }

    #[must_use]
    pub fn save_delay(&self) -> Duration {
        Duration::from_millis(self.save_delay_ms)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Environment variables reach the config as TOML strings (`port = '4100'`),
/// so numeric keys accept either form.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u64),
    Text(String),
}

fn number_or_text<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64> + FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => {
            T::try_from(n).map_err(|_| de::Error::custom(format!("number out of range: {n}")))
        }
        NumberOrText::Text(text) => text
            .trim()
            .parse()
            .map_err(|e| de::Error::custom(format!("invalid number {text:?}: {e}"))),
    }
}

fn default_base_url() -> String {
    "http://localhost".to_string()
}

fn default_port() -> u16 {
    3900
}

fn default_movies_url() -> String {
    "/api/movies".to_string()
}

fn default_genres_url() -> String {
    "/api/genres".to_string()
}

fn default_save_delay_ms() -> u64 {
    1000
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/marquee/config.toml
/// - macOS: ~/Library/Application Support/marquee/config.toml
/// - Windows: %APPDATA%\marquee\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("marquee")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Marquee Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (MARQUEE_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Catalog service location. Endpoints are built as
# {base_url}:{port}{movies_url} and {base_url}:{port}{genres_url}.
#
# Can also be set via:
# - CLI: marquee --base-url http://catalog.local --port 3900 movies
# - Environment: MARQUEE_BASE_URL, MARQUEE_PORT
base_url = "http://localhost"
port = 3900

movies_url = "/api/movies"
genres_url = "/api/genres"

# Milliseconds to wait after a successful save before returning to /movies
save_delay_ms = 1000

# Seconds before an HTTP request to the catalog service is abandoned
request_timeout_secs = 30
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    ensure_config_file_at(&config_file_path())
}

/// Create the example config at `config_path` if nothing is there yet.
pub fn ensure_config_file_at(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(config_path, example_config()).context("Failed to write config file")?;
    log::info!("Created config file {}", config_path.display());

    Ok(true)
}
