//! Config management use case

use crate::error::{AssistError, Result};
use crate::infrastructure::{Config, Workspace};

/// Service for managing workspace configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.config();

        match key {
            "data_dir" => Ok(config.data_dir.clone()),
            "export_dir" => Ok(config.export_dir.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(AssistError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: data_dir, export_dir, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.config().clone();

        if value.trim().is_empty() {
            return Err(AssistError::Config(format!(
                "Config key '{}' cannot be empty",
                key
            )));
        }

        match key {
            "data_dir" => config.data_dir = value.to_string(),
            "export_dir" => config.export_dir = value.to_string(),
            "created" => {
                return Err(AssistError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(AssistError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: data_dir, export_dir",
                    key
                )));
            }
        }

        self.workspace.save_config(config)
    }

    /// List all config values
    pub fn list(&self) -> &Config {
        self.workspace.config()
    }
}
