//! Error types for wordypond

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wordypond
#[derive(Debug, Error)]
pub enum WordypondError {
    #[error("Not a wordypond directory: {0}")]
    NotWordypondDirectory(PathBuf),

    #[error("Week not found: {0}")]
    WeekNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WordypondError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            WordypondError::NotWordypondDirectory(_) => 2,
            WordypondError::WeekNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            WordypondError::NotWordypondDirectory(path) => {
                format!(
                    "Not a wordypond directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'wordypond init' in this directory to create a new word pond\n\
                    • Navigate to an existing wordypond directory\n\
                    • Set WORDYPOND_ROOT environment variable to your word pond path",
                    path.display()
                )
            }
            WordypondError::WeekNotFound(id) => {
                format!(
                    "No week with id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'wordypond list' to see existing weeks and their ids\n\
                    • Ids are matched exactly",
                    id
                )
            }
            WordypondError::Config(msg) => {
                if msg.contains("Invalid id strategy") {
                    format!(
                        "{}\n\n\
                        Valid id strategies: timestamp, uuid\n\
                        Example: wordypond config id_strategy uuid",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using WordypondError
pub type Result<T> = std::result::Result<T, WordypondError>;
