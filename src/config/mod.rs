use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Which [`EntryStore`](crate::store::EntryStore) implementation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Sqlite,
    Local,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: Backend,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_local_store")]
    pub local_store: String,
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub insight: InsightConfig,
}

fn default_true() -> bool {
    true
}
fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}
fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}
fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_local_store() -> String {
    Config::config_dir().join("local").to_string_lossy().to_string()
}
fn default_busy_timeout_ms() -> u64 {
    5000
}
fn default_currency() -> String {
    "$".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            endpoint: default_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            database: default_database(),
            local_store: default_local_store(),
            busy_timeout_ms: default_busy_timeout_ms(),
            currency: default_currency(),
            log_level: default_log_level(),
            insight: InsightConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("worklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".worklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worklog.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("worklog.sqlite")
    }

    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    pub fn local_store_path(&self) -> PathBuf {
        expand_tilde(&self.local_store)
    }

    /// Location of the active backend's storage.
    pub fn storage_location(&self) -> PathBuf {
        match self.backend {
            Backend::Sqlite => self.database_path(),
            Backend::Local => self.local_store_path(),
        }
    }

    /// Point the active backend at `location`.
    pub fn override_location(&mut self, location: &str) {
        match self.backend {
            Backend::Sqlite => self.database = location.to_string(),
            Backend::Local => self.local_store = location.to_string(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write this configuration to the config file, creating its directory.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        fs::write(Self::config_file(), self.to_yaml()?)?;
        success(format!("Config file: {}", Self::config_file().display()));
        Ok(())
    }
}
