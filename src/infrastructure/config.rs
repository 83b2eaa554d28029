//! Configuration management

use crate::domain::IdStrategy;
use crate::error::{Result, WordypondError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the per-workspace directory
pub const WORKSPACE_DIR: &str = ".wordypond";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub id_strategy: IdStrategy,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(id_strategy: IdStrategy) -> Self {
        Config {
            id_strategy,
            created: Utc::now(),
        }
    }

    /// Load config from .wordypond/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKSPACE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                WordypondError::NotWordypondDirectory(path.to_path_buf())
            } else {
                WordypondError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| WordypondError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .wordypond/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let workspace_dir = path.join(WORKSPACE_DIR);
        let config_path = workspace_dir.join("config.toml");

        if !workspace_dir.exists() {
            fs::create_dir(&workspace_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| WordypondError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new(IdStrategy::Uuid);
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new(IdStrategy::Timestamp);

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".wordypond").exists());
        assert!(temp.path().join(".wordypond/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.id_strategy, config.id_strategy);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_config_toml_format() {
        let temp = TempDir::new().unwrap();
        Config::new(IdStrategy::Uuid)
            .save_to_dir(temp.path())
            .unwrap();

        let content = fs::read_to_string(temp.path().join(".wordypond/config.toml")).unwrap();
        assert!(content.contains("id_strategy = \"uuid\""));
    }

    #[test]
    fn test_missing_id_strategy_defaults_to_timestamp() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".wordypond")).unwrap();
        fs::write(
            temp.path().join(".wordypond/config.toml"),
            "created = \"2025-01-17T10:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.id_strategy, IdStrategy::Timestamp);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            WordypondError::NotWordypondDirectory(_) => {}
            other => panic!("Expected NotWordypondDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".wordypond")).unwrap();
        fs::write(temp.path().join(".wordypond/config.toml"), "id_strategy = 3").unwrap();

        let result = Config::load_from_dir(temp.path());
        assert!(matches!(result, Err(WordypondError::Config(_))));
    }
}
