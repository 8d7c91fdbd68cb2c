use thiserror::Error;
use crate::enums::backend_error::BackendError;

#[derive(Debug, Error)]
pub enum DocifyError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File operation '{operation}' failed for '{path}': {reason}")]
    FileOperation {
        path: String,
        operation: String,
        reason: String,
    },

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl DocifyError {
    pub fn config_error(message: &str) -> Self {
        Self::Configuration(message.to_string())
    }

    pub fn file_error(path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperation {
            path: path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for docify operations
pub type DocifyResult<T> = Result<T, DocifyError>;
