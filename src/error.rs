//! Error types for assistant

use crate::domain::EntityKind;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for assistant application
#[derive(Debug, Error)]
pub enum AssistError {
    #[error("Not an assistant directory: {0}")]
    NotAssistantDirectory(PathBuf),

    #[error("{} #{id} not found", .kind.singular())]
    NotFound { kind: EntityKind, id: u32 },

    #[error("No {} ids left: the highest id is already {}", .0, u32::MAX)]
    IdsExhausted(EntityKind),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Import file not found: {0}")]
    ImportFileNotFound(PathBuf),

    #[error("Malformed store {}: {source}", .path.display())]
    MalformedStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed CSV {}: {source}", .path.display())]
    MalformedCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Calculation error: {0}")]
    Calculation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AssistError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AssistError::NotAssistantDirectory(_) => 2,
            AssistError::Validation(_) | AssistError::Calculation(_) => 3,
            AssistError::NotFound { .. } => 4,
            AssistError::ImportFileNotFound(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            AssistError::NotAssistantDirectory(path) => {
                format!(
                    "Not an assistant directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'assistant init' in this directory to create a workspace\n\
                    • Navigate to an existing assistant directory\n\
                    • Set ASSISTANT_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            AssistError::NotFound { kind, id } => {
                format!(
                    "{} #{} not found\n\n\
                    Suggestions:\n\
                    • Use 'assistant {} list' to see existing ids",
                    kind.singular(),
                    id,
                    kind.command()
                )
            }
            AssistError::Validation(msg) => {
                if msg.contains("date") {
                    format!(
                        "Invalid input: {}\n\n\
                        Expected format: DD-MM-YYYY\n\
                        Example: assistant finance report 01-01-2024 31-01-2024",
                        msg
                    )
                } else if msg.contains("priority") {
                    format!(
                        "Invalid input: {}\n\n\
                        Valid priorities: high, medium, low",
                        msg
                    )
                } else {
                    self.to_string()
                }
            }
            AssistError::ImportFileNotFound(path) => {
                format!(
                    "Import file not found: {}\n\n\
                    Nothing was imported. Check the path and try again.",
                    path.display()
                )
            }
            AssistError::MalformedStore { path, source } => {
                format!(
                    "Could not parse {}: {}\n\n\
                    The file must contain a JSON array of records.\n\
                    Fix or remove it; a missing store is recreated empty.",
                    path.display(),
                    source
                )
            }
            AssistError::Calculation(msg) => {
                format!(
                    "Calculation error: {}\n\n\
                    Supported syntax: numbers, + - * /, parentheses\n\
                    Example: assistant calc \"(2 + 3) * 4\"",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using AssistError
pub type Result<T> = std::result::Result<T, AssistError>;
