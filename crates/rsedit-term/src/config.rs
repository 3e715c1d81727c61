//! Editor configuration
//!
//! Read from `~/.config/rsedit/config.yaml`; every field is optional.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seconds a status message stays on screen.
    pub status_timeout_secs: u64,
    /// Screen size to assume when the terminal cannot report one.
    pub fallback_width: usize,
    pub fallback_height: usize,
    /// How long to wait for a key before redrawing.
    pub tick_millis: u64,
    /// Log filter used when `RSEDIT_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            status_timeout_secs: 5,
            fallback_width: 80,
            fallback_height: 24,
            tick_millis: 100,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load config from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn status_timeout(&self) -> TimeDelta {
        i64::try_from(self.status_timeout_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    pub fn fallback_size(&self) -> (usize, usize) {
        (self.fallback_width, self.fallback_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.status_timeout(), TimeDelta::seconds(5));
        assert_eq!(config.fallback_size(), (80, 24));
        assert_eq!(config.tick(), Duration::from_millis(100));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = Config::from_yaml("status_timeout_secs: 2\nlog_level: debug\n").unwrap();
        assert_eq!(config.status_timeout_secs, 2);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.fallback_width, 80);
        assert_eq!(config.tick_millis, 100);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(Config::from_yaml("tick_millis: [1, 2").is_err());
        assert!(Config::from_yaml("tick_millis: soon").is_err());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "fallback_width: 100\nfallback_height: 30\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.fallback_size(), (100, 30));
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "tick_millis: soon\n").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config at"));
    }
}
