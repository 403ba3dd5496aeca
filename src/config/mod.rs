use crate::utils::coerce_integer;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_PLAYER_WIDTH: u32 = 516;
pub const DEFAULT_PLAYER_HEIGHT: u32 = 344;

pub const WIDTH_ENV: &str = "VIDEO_PLAYER_WIDTH";
pub const HEIGHT_ENV: &str = "VIDEO_PLAYER_HEIGHT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Player size in pixels. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerDimensions {
    pub width: u32,
    pub height: u32,
}

impl Default for PlayerDimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_PLAYER_WIDTH,
            height: DEFAULT_PLAYER_HEIGHT,
        }
    }
}

impl PlayerDimensions {
    /// Zero falls back to the default for that axis.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: if width > 0 { width } else { DEFAULT_PLAYER_WIDTH },
            height: if height > 0 { height } else { DEFAULT_PLAYER_HEIGHT },
        }
    }

    /// Resolve raw setting values; unset, non-numeric, zero or negative
    /// values fall back to the defaults independently.
    pub fn resolve(width: Option<&str>, height: Option<&str>) -> Self {
        Self {
            width: positive_or(width, DEFAULT_PLAYER_WIDTH),
            height: positive_or(height, DEFAULT_PLAYER_HEIGHT),
        }
    }
}

fn positive_or(raw: Option<&str>, default: u32) -> u32 {
    raw.map(coerce_integer)
        .and_then(|value| u32::try_from(value).ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

/// A setting that may be written as a TOML integer or string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSetting {
    Integer(i64),
    Text(String),
}

impl RawSetting {
    fn into_text(self) -> String {
        match self {
            RawSetting::Integer(value) => value.to_string(),
            RawSetting::Text(text) => text,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerSettings {
    pub width: Option<RawSetting>,
    pub height: Option<RawSetting>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub player: PlayerSettings,
}

impl Config {
    /// Load from a TOML file, or start empty when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Layer `VIDEO_PLAYER_WIDTH` / `VIDEO_PLAYER_HEIGHT` over file values.
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Same as `with_env`, reading variables through `lookup`.
    pub fn with_env_from<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        self.with_overrides(lookup(WIDTH_ENV), lookup(HEIGHT_ENV))
    }

    /// Replace any setting for which an override is present.
    pub fn with_overrides(mut self, width: Option<String>, height: Option<String>) -> Self {
        if let Some(width) = width {
            self.player.width = Some(RawSetting::Text(width));
        }
        if let Some(height) = height {
            self.player.height = Some(RawSetting::Text(height));
        }
        self
    }

    pub fn dimensions(&self) -> PlayerDimensions {
        let width = self.player.width.clone().map(RawSetting::into_text);
        let height = self.player.height.clone().map(RawSetting::into_text);
        PlayerDimensions::resolve(width.as_deref(), height.as_deref())
    }
}
