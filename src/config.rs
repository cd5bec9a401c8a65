//! Configuration file handling.
//!
//! The config lives at `<config dir>/ticket-kb/config.toml`. Every field has a
//! default, so a missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::batch::BatchConfig;
use crate::extractor::{CleanerConfig, CleanerError, ExtractionConfig, TicketPipeline};

/// Directory name under the platform config dir.
const APP_DIR: &str = "ticket-kb";

/// Config file name.
const CONFIG_FILE: &str = "config.toml";

/// Errors reading, writing or validating the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error(transparent)]
    Cleaner(#[from] CleanerError),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub cleaner: CleanerConfig,
    pub batch: BatchConfig,
}

impl Config {
    /// Default location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, falling back to defaults when the file is missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_error = |source| ConfigError::WriteError {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(path, self.to_toml()?).map_err(write_error)
    }

    /// Reject settings that would make every run produce nothing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extraction.kb_types.iter().all(|t| t.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "extraction.kb_types must name at least one activity type".to_string(),
            ));
        }
        if self.cleaner.max_consecutive_newlines == 0 {
            return Err(ConfigError::Invalid(
                "cleaner.max_consecutive_newlines must be at least 1".to_string(),
            ));
        }
        if self.batch.extensions.is_empty() {
            return Err(ConfigError::Invalid(
                "batch.extensions must list at least one extension".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the extraction pipeline described by this config.
    pub fn pipeline(&self) -> Result<TicketPipeline, ConfigError> {
        Ok(TicketPipeline::new(&self.extraction, &self.cleaner)?)
    }
}
