//! core::config
//!
//! Global configuration schema and loading.
//!
//! # Locations
//!
//! Searched in order:
//! 1. `$CANISTRY_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/canistry/config.toml`
//! 3. `~/.canistry/config.toml` (canonical write location)
//!
//! Missing files are not an error; defaults apply. Files that exist but
//! fail to parse are.
//!
//! # Example
//!
//! ```toml
//! chain = "icp"
//! command_timeout_secs = 5
//! dfx_bin = "dfx"
//! interactive = true
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::chain::Chain;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "CANISTRY_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("unknown config key: {0}")]
    UnknownKey(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Global configuration (user scope).
///
/// All fields are optional; accessors on [`Config`] apply defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default chain backend (e.g. "icp")
    pub chain: Option<String>,

    /// Per-command ceiling for dispatched batches, in seconds
    pub command_timeout_secs: Option<u64>,

    /// Chain tool binary to invoke (e.g. "dfx" or an absolute path)
    pub dfx_bin: Option<String>,

    /// Default interactive mode
    pub interactive: Option<bool>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(chain) = &self.chain {
            if chain != "icp" {
                return Err(ConfigError::InvalidValue(format!(
                    "unknown chain '{}', must be one of: icp",
                    chain
                )));
            }
        }
        if let Some(secs) = self.command_timeout_secs {
            if secs == 0 {
                return Err(ConfigError::InvalidValue(
                    "command_timeout_secs must be at least 1".into(),
                ));
            }
        }
        if let Some(bin) = &self.dfx_bin {
            if bin.is_empty() {
                return Err(ConfigError::InvalidValue("dfx_bin cannot be empty".into()));
            }
        }
        Ok(())
    }
}

/// Loaded configuration with accessor defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Raw values as parsed.
    pub global: GlobalConfig,
    /// File the values came from, if any.
    loaded_from: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// fails validation. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let (global, loaded_from) = Self::load_global()?;
        global.validate()?;
        Ok(Self {
            global,
            loaded_from,
        })
    }

    fn load_global() -> Result<(GlobalConfig, Option<PathBuf>), ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Ok((Self::read_file(&path)?, Some(path)));
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("canistry/config.toml");
            if path.exists() {
                return Ok((Self::read_file(&path)?, Some(path)));
            }
        }

        if let Some(home) = dirs::home_dir() {
            let path = home.join(".canistry/config.toml");
            if path.exists() {
                return Ok((Self::read_file(&path)?, Some(path)));
            }
        }

        Ok((GlobalConfig::default(), None))
    }

    fn read_file(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Canonical write location: `~/.canistry/config.toml`, unless
    /// `$CANISTRY_CONFIG` points elsewhere.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".canistry/config.toml"))
    }

    /// Write the global config atomically (temp file + rename), creating
    /// parent directories as needed.
    pub fn write(config: &GlobalConfig) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.clone(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;
        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;
        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, &path).map_err(|e| ConfigError::WriteError {
            path: path.clone(),
            source: e,
        })?;

        Ok(path)
    }

    // =========================================================================
    // Accessors with defaults
    // =========================================================================

    /// Default chain backend. Defaults to ICP.
    pub fn chain(&self) -> Chain {
        match self.global.chain.as_deref() {
            Some("icp") | None => Chain::Icp,
            // validate() rejects anything else at load time
            Some(_) => Chain::Icp,
        }
    }

    /// Per-command ceiling for dispatched batches. Defaults to 5 seconds.
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.global.command_timeout_secs.unwrap_or(5))
    }

    /// Chain tool binary. Defaults to "dfx".
    pub fn dfx_bin(&self) -> &str {
        self.global.dfx_bin.as_deref().unwrap_or("dfx")
    }

    /// Default interactive mode. Defaults to `true`.
    pub fn interactive(&self) -> bool {
        self.global.interactive.unwrap_or(true)
    }

    /// File the config was loaded from, if any.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.loaded_from.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::default();
        assert_eq!(config.chain(), Chain::Icp);
        assert_eq!(config.command_timeout(), Duration::from_secs(5));
        assert_eq!(config.dfx_bin(), "dfx");
        assert!(config.interactive());
    }

    #[test]
    fn parses_full_config() {
        let global: GlobalConfig = toml::from_str(
            r#"
            chain = "icp"
            command_timeout_secs = 12
            dfx_bin = "/opt/dfx/bin/dfx"
            interactive = false
            "#,
        )
        .unwrap();
        global.validate().unwrap();

        let config = Config {
            global,
            loaded_from: None,
        };
        assert_eq!(config.command_timeout(), Duration::from_secs(12));
        assert_eq!(config.dfx_bin(), "/opt/dfx/bin/dfx");
        assert!(!config.interactive());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<GlobalConfig, _> = toml::from_str("no_such_key = true");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_chain_fails_validation() {
        let global = GlobalConfig {
            chain: Some("solana".into()),
            ..Default::default()
        };
        assert!(global.validate().is_err());
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let global = GlobalConfig {
            command_timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(global.validate().is_err());
    }

    #[test]
    fn round_trips_through_toml() {
        let global = GlobalConfig {
            chain: Some("icp".into()),
            command_timeout_secs: Some(7),
            dfx_bin: None,
            interactive: Some(true),
        };
        let text = toml::to_string_pretty(&global).unwrap();
        let back: GlobalConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, global);
    }
}
