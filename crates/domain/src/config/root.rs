use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::neighbors::NeighborsConfig;

/// Upper bound for the refresh interval and the command timeout (one day).
pub const MAX_DURATION_SECS: u64 = 86_400;

/// Main configuration structure for Ferrous Neighbors
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Neighbor table discovery
    #[serde(default)]
    pub neighbors: NeighborsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-neighbors.toml in current directory
    /// 3. /etc/ferrous-neighbors/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(secs) = overrides.refresh_interval_secs {
            self.neighbors.refresh_interval_secs = secs;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.neighbors.refresh_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Neighbor refresh interval cannot be 0".to_string(),
            ));
        }

        if self.neighbors.refresh_interval_secs > MAX_DURATION_SECS {
            return Err(ConfigError::Validation(format!(
                "Neighbor refresh interval cannot exceed {} seconds, got {}",
                MAX_DURATION_SECS, self.neighbors.refresh_interval_secs
            )));
        }

        if self.neighbors.command_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Neighbor command timeout cannot be 0".to_string(),
            ));
        }

        if self.neighbors.command_timeout_secs > MAX_DURATION_SECS {
            return Err(ConfigError::Validation(format!(
                "Neighbor command timeout cannot exceed {} seconds, got {}",
                MAX_DURATION_SECS, self.neighbors.command_timeout_secs
            )));
        }

        if self.neighbors.arp_file.is_empty() || self.neighbors.arp_file.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "arp_file must be a path relative to fs_root, got '{}'",
                self.neighbors.arp_file
            )));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("ferrous-neighbors.toml").exists() {
            Some("ferrous-neighbors.toml".to_string())
        } else if std::path::Path::new("/etc/ferrous-neighbors/config.toml").exists() {
            Some("/etc/ferrous-neighbors/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub refresh_interval_secs: Option<u64>,
}
