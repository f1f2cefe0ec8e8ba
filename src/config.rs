//! Configuration loading.
//!
//! The only configurable part of the stylesheet is the base palette. Every
//! entry is optional and overrides the built-in ocean palette:
//!
//! ```toml
//! [theme.colors]
//! black = "#1d1f21"
//!
//! [theme.bright]
//! red = "#ff6666"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::color::{Color, ColorSet, Palette};
use crate::style::{Stylesheet, Theme};

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Per-identifier color overrides; absent entries keep the built-in color.
pub type ColorOverrides = ColorSet<Option<Color>>;

/// Theme section of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Normal colors
    pub colors: ColorOverrides,
    /// Bright colors
    pub bright: ColorOverrides,
}

impl ThemeConfig {
    /// The built-in palette with every override applied.
    pub fn palette(&self) -> Palette {
        let mut palette = Palette::default();
        self.colors.apply_to(&mut palette.normal);
        self.bright.apply_to(&mut palette.bright);
        palette
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub theme: ThemeConfig,
}

impl Config {
    /// Default config file location: `<config_dir>/panestyle/config.toml`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("panestyle").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location; a missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "loading config");
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Theme derived from the configured palette.
    pub fn theme(&self) -> Theme {
        Theme::new(self.theme.palette())
    }

    /// Stylesheet for the configured theme.
    pub fn stylesheet(&self) -> Stylesheet {
        Stylesheet::new(self.theme())
    }
}
