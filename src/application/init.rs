//! Initialize workspace use case

use crate::domain::IdStrategy;
use crate::error::Result;
use crate::infrastructure::{Config, PondRepository, Workspace};
use log::info;
use std::fs;
use std::path::Path;

/// Initialize a new word pond at the specified path.
pub fn init(path: &Path, id_strategy: IdStrategy) -> Result<Workspace> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = Workspace::new(path.to_path_buf());
    workspace.initialize()?;
    workspace.save_config(&Config::new(id_strategy))?;

    info!(
        "initialized workspace at {} ({} ids)",
        path.display(),
        id_strategy.as_str()
    );
    Ok(workspace)
}
