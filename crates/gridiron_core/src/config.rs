//! Tracker settings
//!
//! Loaded from a JSON file. The path comes from the caller or from
//! `GRIDIRON_CONFIG_PATH`; an unset or blank variable means defaults.

use std::{env, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::field::Direction;

pub const CONFIG_PATH_ENV: &str = "GRIDIRON_CONFIG_PATH";

pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub version: u32,
    /// Direction a fresh session starts with.
    pub default_direction: Direction,
    /// Append a record to the play log for each resolved play.
    pub log_plays: bool,
    /// Allow New Play to carry the last spot forward as the next start.
    pub carry_forward_new_play: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            default_direction: Direction::LeftToRight,
            log_plays: true,
            carry_forward_new_play: true,
        }
    }
}

impl TrackerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::Invalid(format!(
                "unsupported config version {} (expected {})",
                self.version, CONFIG_VERSION
            )));
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        config.validate()?;
        log::debug!("Loaded tracker config from {:?}", path);
        Ok(config)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        Self::load(Path::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.default_direction, Direction::LeftToRight);
        assert!(config.log_plays);
        assert!(config.carry_forward_new_play);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = TrackerConfig::from_json(r#"{"default_direction":"rtl"}"#).unwrap();
        assert_eq!(config.default_direction, Direction::RightToLeft);
        assert!(config.log_plays);
    }

    #[test]
    fn test_bad_version_rejected() {
        let config = TrackerConfig::from_json(r#"{"version":7}"#).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tracker.json");
        fs::write(&path, r#"{"log_plays":false,"carry_forward_new_play":false}"#).unwrap();

        let config = TrackerConfig::load(&path).unwrap();
        assert!(!config.log_plays);
        assert!(!config.carry_forward_new_play);
    }

    #[test]
    fn test_load_errors() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.json");
        assert!(matches!(TrackerConfig::load(&missing), Err(ConfigError::Io(_))));

        let broken = temp_dir.path().join("broken.json");
        fs::write(&broken, "{not json").unwrap();
        assert!(matches!(TrackerConfig::load(&broken), Err(ConfigError::Parse(_))));
    }
}
