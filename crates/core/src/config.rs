//! Dashboard configuration
//!
//! Read from `config.toml` in the platform config directory. A missing file
//! means defaults; a malformed one is an error.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::schema::ContestSchema;
use crate::seed::Seed;

const CONFIG_FILE: &str = "config.toml";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Could not determine config directory")]
    NoConfigDir,
    #[error("toast_seconds must be at least 1")]
    InvalidToastDuration,
}

impl From<ConfigError> for crate::Error {
    fn from(err: ConfigError) -> Self {
        crate::Error::Config(err.to_string())
    }
}

/// Operator settings for the contest dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// TOML seed replacing the built-in mock data
    pub seed_path: Option<PathBuf>,
    /// Reject contests whose two teams are the same
    pub reject_same_team: bool,
    /// How long the shell keeps a toast on screen
    pub toast_seconds: u64,
    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            reject_same_team: false,
            toast_seconds: 4,
            log_filter: None,
        }
    }
}

impl DashboardConfig {
    /// Platform config directory for the dashboard
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let dirs = ProjectDirs::from("com", "cryptog", "cryptog-admin")
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().to_path_buf())
    }

    /// Load from the platform config directory
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_from_dir(&Self::config_dir()?)
    }

    /// Load `config.toml` from a directory, falling back to defaults
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration from TOML content
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        if config.toast_seconds == 0 {
            return Err(ConfigError::InvalidToastDuration);
        }
        Ok(config)
    }

    /// Form schema matching these settings
    pub fn schema(&self) -> ContestSchema {
        ContestSchema::new().with_distinct_teams(self.reject_same_team)
    }

    /// Seed from the configured file, or the built-in mock data
    pub fn seed(&self) -> crate::Result<Seed> {
        match &self.seed_path {
            Some(path) => Seed::load(path),
            None => Ok(Seed::mock()),
        }
    }
}
