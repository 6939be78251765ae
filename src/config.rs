//! User configuration, persisted as TOML.
//!
//! The default location is `$XDG_CONFIG_HOME/digit-mirror/config.toml`, falling
//! back to `$HOME/.config/digit-mirror/config.toml`. Every key has a default,
//! so partial files load and a missing default file means "all defaults".

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::Mirror;

/// Errors from loading, saving or validating configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("cannot determine config directory")]
    #[diagnostic(
        code(mirror::config::no_home),
        help("Set HOME or XDG_CONFIG_HOME, or pass --config explicitly.")
    )]
    NoHome,

    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(mirror::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {path}")]
    #[diagnostic(
        code(mirror::config::parse),
        help("Check the TOML syntax. {message}")
    )]
    Parse { path: String, message: String },

    #[error("failed to write config: {path}")]
    #[diagnostic(
        code(mirror::config::write),
        help("Ensure you have write permissions to the config directory.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {message}")]
    #[diagnostic(code(mirror::config::invalid), help("{message}"))]
    Invalid { message: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Settings for input handling and output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Longest number accepted as input.
    #[serde(default = "default_max_digits")]
    pub max_digits: usize,
    /// Shorter inputs are left-padded with zeros to this many digits.
    #[serde(default = "default_pad_width")]
    pub pad_width: usize,
    /// Color bars with ANSI codes.
    #[serde(default)]
    pub color: bool,
    /// Mirrors drawn automatically by `render`.
    #[serde(default)]
    pub mirrors: Vec<Mirror>,
}

fn default_max_digits() -> usize {
    4
}
fn default_pad_width() -> usize {
    4
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            max_digits: default_max_digits(),
            pad_width: default_pad_width(),
            color: false,
            mirrors: Vec::new(),
        }
    }
}

impl MirrorConfig {
    /// Reject settings that cannot produce a valid number.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_digits == 0 {
            return Err(ConfigError::Invalid {
                message: "max_digits must be at least 1".into(),
            });
        }
        if self.pad_width > self.max_digits {
            return Err(ConfigError::Invalid {
                message: format!(
                    "pad_width ({}) must not exceed max_digits ({})",
                    self.pad_width, self.max_digits
                ),
            });
        }
        Ok(())
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load from the default location, or return defaults if no file exists.
    pub fn load_default() -> ConfigResult<Self> {
        let path = default_config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Save to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.display().to_string(),
            source: e,
        })
    }
}

/// `$XDG_CONFIG_HOME/digit-mirror/config.toml` with the usual `$HOME` fallback.
pub fn default_config_path() -> ConfigResult<PathBuf> {
    let base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => std::env::var("HOME")
            .map(|home| PathBuf::from(home).join(".config"))
            .map_err(|_| ConfigError::NoHome)?,
    };
    Ok(base.join("digit-mirror").join("config.toml"))
}
