//! Configuration file support for measure.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/measure/config.toml`.

use crate::math_context::{MathContext, Rounding};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub decimal: DecimalConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Decimal conversion configuration
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DecimalConfig {
    /// Significant digits kept by decimal conversion, 0 for unlimited
    #[serde(default = "default_precision")]
    pub precision: u32,

    #[serde(default)]
    pub rounding: Rounding,
}

impl Default for DecimalConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            rounding: Rounding::default(),
        }
    }
}

impl DecimalConfig {
    pub fn math_context(&self) -> MathContext {
        MathContext::new(self.precision, self.rounding)
    }
}

/// Logging configuration
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default filter level; `RUST_LOG` takes precedence
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

// Default value functions
fn default_precision() -> u32 {
    MathContext::DECIMAL128.precision
}

fn default_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("measure").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(Error::Config("logging.level must not be empty".into()));
        }
        Ok(())
    }
}
