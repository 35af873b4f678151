use thiserror::Error;

/// Error type that captures core service failures.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Saving goal not found: {0}")]
    GoalNotFound(u32),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error("Save failed: {0}")]
    SaveFailed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
