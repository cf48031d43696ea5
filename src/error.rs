//! Error types for project and workflow operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for workflow operations
pub type Result<T> = std::result::Result<T, WorkflowError>;

/// Error types for project and workflow operations
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Invalid project name '{0}': must be a valid folder name")]
    Configuration(String),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Workflow description error: {0}")]
    Description(String),

    #[error("Failed to parse workflow template {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to load project file: {0}")]
    Load(String),

    #[error("Failed to save project file {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid work status: {0}. Valid values: not_started, in_progress, done")]
    InvalidStatus(String),

    #[error("Project has no storage directory")]
    Detached,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
