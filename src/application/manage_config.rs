//! Config management use case

use crate::domain::IdStrategy;
use crate::error::{Result, WordypondError};
use crate::infrastructure::{Config, PondRepository, Workspace};
use std::str::FromStr;

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
        let config = self.workspace.load_config()?;

        match key {
            "id_strategy" => Ok(config.id_strategy.as_str().to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(WordypondError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: id_strategy, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "id_strategy" => {
                config.id_strategy =
                    IdStrategy::from_str(value).map_err(WordypondError::Config)?;
            }
            "created" => {
                return Err(WordypondError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(WordypondError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: id_strategy",
                    key
                )));
            }
        }

        self.workspace.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}
