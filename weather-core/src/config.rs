use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

pub const DEFAULT_FORECAST_URL: &str = "https://api.pirateweather.net/forecast";
pub const DEFAULT_IP_LOOKUP_URL: &str = "http://ip-api.com/json";
pub const DEFAULT_GEOCODE_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Base URLs of the remote services.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Any Dark Sky-compatible forecast API.
    pub forecast: String,
    pub ip_lookup: String,
    pub geocode: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            forecast: DEFAULT_FORECAST_URL.to_string(),
            ip_lookup: DEFAULT_IP_LOOKUP_URL.to_string(),
            geocode: DEFAULT_GEOCODE_URL.to_string(),
        }
    }
}

/// Optional settings file. Command-line flags take precedence.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// address = "Lyon, France"
///
/// [endpoints]
/// forecast = "https://api.pirateweather.net/forecast"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub address: Option<String>,
    pub language: Option<String>,
    pub timeout_secs: Option<u64>,
    pub endpoints: Endpoints,
}

impl Config {
    /// Load config from the default location, or return an empty default if it doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::config_file_path()?)
    }

    /// Load config from `path`, or return an empty default if it doesn't exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load config from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(cfg)
    }

    /// Path to the default config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "i3blocks-weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
