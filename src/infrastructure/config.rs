//! Configuration management

use crate::error::{AssistError, Result};
use crate::infrastructure::workspace::MARKER_DIR;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILE: &str = "config.toml";

fn current_dir_setting() -> String {
    ".".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the JSON stores, relative to the workspace root
    #[serde(default = "current_dir_setting")]
    pub data_dir: String,
    /// Directory receiving CSV exports and reports, relative to the workspace root
    #[serde(default = "current_dir_setting")]
    pub export_dir: String,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            data_dir: current_dir_setting(),
            export_dir: current_dir_setting(),
            created: Utc::now(),
        }
    }

    /// Load config from .assistant/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(MARKER_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AssistError::NotAssistantDirectory(path.to_path_buf())
            } else {
                AssistError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| AssistError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .assistant/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let marker = path.join(MARKER_DIR);
        let config_path = marker.join(CONFIG_FILE);

        if !marker.exists() {
            fs::create_dir(&marker)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| AssistError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_uses_root() {
        let config = Config::new();
        assert_eq!(config.data_dir, ".");
        assert_eq!(config.export_dir, ".");
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.data_dir = "stores".to_string();

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".assistant/config.toml").exists());
        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.data_dir, "stores");
        assert_eq!(loaded.export_dir, config.export_dir);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_missing_keys_default_to_root() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".assistant")).unwrap();
        fs::write(
            temp.path().join(".assistant/config.toml"),
            "created = \"2024-01-01T00:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.data_dir, ".");
        assert_eq!(loaded.export_dir, ".");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        match Config::load_from_dir(temp.path()) {
            Err(AssistError::NotAssistantDirectory(_)) => {}
            other => panic!("Expected NotAssistantDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".assistant")).unwrap();
        fs::write(temp.path().join(".assistant/config.toml"), "data_dir = [").unwrap();

        match Config::load_from_dir(temp.path()) {
            Err(AssistError::Config(msg)) => assert!(msg.contains("config.toml")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
