use std::path::PathBuf;
use thiserror::Error;

/// Rejections raised by the task store
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    /// Task text or subject was blank after trimming. Callers ignore this silently.
    #[error("task text and subject must not be blank")]
    ValidationRejected,
}

/// Failures talking to durable task storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("stored tasks at {path} are corrupt: {source}")]
    LoadCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write tasks to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Settings values outside the accepted range
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{field} must be between 1 and {max} minutes (got {value})")]
    Invalid {
        field: &'static str,
        value: u32,
        max: u32,
    },
}
