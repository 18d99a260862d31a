use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

static DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

/// Client configuration at ~/.config/eventsync/config.toml
///
/// Every key is optional. A missing file means defaults.
#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Account used to log in before any event request
    pub email: Option<String>,

    /// Prompted for when `email` is set and this is not
    pub password: Option<String>,

    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_url: default_server_url(),
            email: None,
            password: None,
            timeout_secs: None,
        }
    }
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("eventsync");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        toml::from_str(&contents).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn server_url(&self) -> Result<Url> {
        Url::parse(&self.server_url)
            .with_context(|| format!("Invalid server_url '{}'", self.server_url))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
