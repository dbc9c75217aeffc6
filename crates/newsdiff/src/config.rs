//! Persisted user preferences
//!
//! Language and theme are loaded once at startup and written back whenever
//! the user toggles either, the same init-from-storage / persist-on-change
//! lifecycle the web client used for its preference store.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::i18n::Language;
use crate::theme::ThemeMode;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine a config directory")]
    NoConfigDir,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub theme: ThemeMode,
}

impl Settings {
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("newsdiff").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        let settings = toml::from_str(&raw)?;
        info!(?path, "loaded config");
        Ok(settings)
    }

    /// Falls back to defaults on any load failure; a broken config file
    /// must not keep the client from starting
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(settings) => settings,
            Err(err) => {
                warn!(%err, "could not load config, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, toml::to_string_pretty(self)?)?;
        info!(?path, "saved config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.language, Language::Sv);
        assert_eq!(settings.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_toml_round_trip() {
        let settings = Settings {
            language: Language::En,
            theme: ThemeMode::Light,
        };
        let raw = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&raw).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: Settings = toml::from_str("language = \"en\"").unwrap();
        assert_eq!(parsed.language, Language::En);
        assert_eq!(parsed.theme, ThemeMode::Dark);
    }
}
