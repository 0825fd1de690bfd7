//! Configuration loading and resolution
//!
//! Every setting resolves through the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5730";
const DEFAULT_PROVIDER_BASE_URL: &str = "https://api.sportradar.us/nba/trial/v5/en";

/// Resolved service configuration, constructed once at process start
/// and passed explicitly to everything that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Path to the SQLite database file
    pub database_path: PathBuf,
    /// Base URL of the external schedule provider
    pub provider_base_url: String,
    /// API key sent on every provider request
    pub provider_api_key: String,
}

/// Per-field overrides from the command line (highest priority)
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind_addr: Option<String>,
    pub database_path: Option<PathBuf>,
    pub provider_base_url: Option<String>,
    pub provider_api_key: Option<String>,
}

/// Shape of the optional TOML config file
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    bind_addr: Option<String>,
    database_path: Option<PathBuf>,
    provider_base_url: Option<String>,
    provider_api_key: Option<String>,
}

impl Config {
    /// Resolve the full configuration from CLI overrides, environment,
    /// config file, and defaults.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Config> {
        let file = match find_config_file() {
            Some(path) => {
                let text = std::fs::read_to_string(&path)?;
                let parsed = parse_config_file(&text)?;
                tracing::info!("Loaded config file: {}", path.display());
                parsed
            }
            None => ConfigFile::default(),
        };

        Ok(Self::merge(overrides, env_overrides(), file))
    }

    fn merge(cli: ConfigOverrides, env: ConfigOverrides, file: ConfigFile) -> Config {
        Config {
            bind_addr: cli
                .bind_addr
                .or(env.bind_addr)
                .or(file.bind_addr)
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            database_path: cli
                .database_path
                .or(env.database_path)
                .or(file.database_path)
                .unwrap_or_else(default_database_path),
            provider_base_url: cli
                .provider_base_url
                .or(env.provider_base_url)
                .or(file.provider_base_url)
                .unwrap_or_else(|| DEFAULT_PROVIDER_BASE_URL.to_string()),
            provider_api_key: cli
                .provider_api_key
                .or(env.provider_api_key)
                .or(file.provider_api_key)
                .unwrap_or_default(),
        }
    }
}

fn parse_config_file(text: &str) -> Result<ConfigFile> {
    toml::from_str(text).map_err(|e| Error::Config(format!("Invalid config file: {}", e)))
}

fn env_overrides() -> ConfigOverrides {
    ConfigOverrides {
        bind_addr: std::env::var("COURTSIDE_BIND_ADDR").ok(),
        database_path: std::env::var("COURTSIDE_DATABASE_PATH").ok().map(PathBuf::from),
        provider_base_url: std::env::var("COURTSIDE_PROVIDER_BASE_URL").ok(),
        provider_api_key: std::env::var("COURTSIDE_PROVIDER_API_KEY").ok(),
    }
}

/// Locate the config file for the platform, if one exists
fn find_config_file() -> Option<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/courtside/config.toml first, then /etc/courtside/config.toml
        if let Some(path) = dirs::config_dir().map(|d| d.join("courtside").join("config.toml")) {
            if path.exists() {
                return Some(path);
            }
        }
        let system_config = PathBuf::from("/etc/courtside/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
        None
    } else {
        dirs::config_dir()
            .map(|d| d.join("courtside").join("config.toml"))
            .filter(|p| p.exists())
    }
}

/// OS-dependent default database location
fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("courtside"))
        .unwrap_or_else(|| PathBuf::from("./courtside_data"))
        .join("courtside.db")
}
