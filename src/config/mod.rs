//! Settings for the invisink CLI.
//!
//! Settings are read from `~/.invisink/config.toml`. A missing file means
//! defaults; every field may be omitted.
//!
//! ```toml
//! log_level = "warn"
//!
//! [encode]
//! cover_policy = "reject"
//!
//! [decode]
//! utf8 = "strict"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::decoder::{DecoderConfig, Utf8Policy};
use crate::encoder::{CoverPolicy, EncoderConfig};

/// Errors that can occur when loading or saving settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config directory not found. Unable to determine home directory.")]
    NoConfigDir,

    #[error("IO error accessing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// Encoding defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeSettings {
    #[serde(default)]
    pub cover_policy: CoverPolicy,
}

/// Decoding defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeSettings {
    #[serde(default)]
    pub utf8: Utf8Policy,
}

/// The settings file, as stored in TOML.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub encode: EncodeSettings,

    #[serde(default)]
    pub decode: DecodeSettings,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            encode: EncodeSettings::default(),
            decode: DecodeSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the default location.
    ///
    /// Without a home directory there is no default location, so the
    /// defaults are used.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(ConfigError::NoConfigDir) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Load settings from `path`, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Save settings to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)
    }

    /// Get the path to the settings file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    pub fn encoder_config(&self) -> EncoderConfig {
        EncoderConfig {
            cover_policy: self.encode.cover_policy,
        }
    }

    pub fn decoder_config(&self) -> DecoderConfig {
        DecoderConfig {
            utf8: self.decode.utf8,
        }
    }
}

/// Get the invisink config directory (`~/.invisink`).
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".invisink"))
        .ok_or(ConfigError::NoConfigDir)
}
