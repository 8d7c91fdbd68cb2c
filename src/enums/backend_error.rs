use thiserror::Error;

/// Terminal failure classes for a single backend call. No retries are
/// performed; a fresh user action is required to try again.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Authentication failed. Check your API key.")]
    Authentication,

    #[error("Backend error {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("Request timed out. The model might be processing a long response.")]
    Timeout,

    #[error("Connection error. Make sure the base URL is correct and the backend is running.")]
    Connection,

    #[error("Missing required field '{field}'. {hint}")]
    Validation {
        field: &'static str,
        hint: &'static str,
    },

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl BackendError {
    pub fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::Validation { field, hint }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
