//! Workspace discovery and layout

use crate::error::{Result, WordypondError};
use crate::infrastructure::config::WORKSPACE_DIR;
use crate::infrastructure::{Config, FileStorage};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a workspace root
pub const ROOT_ENV: &str = "WORDYPOND_ROOT";

/// Abstract repository for workspace-level operations
pub trait PondRepository {
    /// Get the root directory of this workspace
    fn root(&self) -> &Path;

    /// Load configuration from .wordypond/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .wordypond/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .wordypond directory exists
    fn is_initialized(&self) -> bool;

    /// Create .wordypond directory structure
    fn initialize(&self) -> Result<()>;
}

/// A directory holding a `.wordypond/` folder
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Discover workspace root by walking up from current directory
    /// First checks WORDYPOND_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_workspace_dir(&path) {
                return Ok(Workspace::new(path));
            } else {
                return Err(WordypondError::Config(format!(
                    "{} is set to '{}' but no {} directory found. \
                    Run 'wordypond init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    WORKSPACE_DIR,
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_workspace_dir(&current) {
                debug!("found workspace at {}", current.display());
                return Ok(Workspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(WordypondError::NotWordypondDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_workspace_dir(path: &Path) -> bool {
        path.join(WORKSPACE_DIR).is_dir()
    }

    /// Directory where stored values live
    pub fn data_dir(&self) -> PathBuf {
        self.root.join(WORKSPACE_DIR).join("data")
    }

    /// Key-value storage backed by this workspace's data directory
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.data_dir())
    }
}

impl PondRepository for Workspace {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_workspace_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let workspace_dir = self.root.join(WORKSPACE_DIR);

        if workspace_dir.exists() {
            return Err(WordypondError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&workspace_dir)?;
        fs::create_dir(self.data_dir())?;
        Ok(())
    }
}
