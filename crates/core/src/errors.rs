use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinistryError {
    #[error("No backend URL is configured")]
    NotConnected,

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Transport error: {0}")]
    Transport(#[from] eyre::Report),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl MinistryError {
    /// Whether the failure came from talking to the backend (as opposed to a
    /// local configuration or input problem).
    pub fn is_backend_failure(&self) -> bool {
        matches!(self, MinistryError::Backend(_) | MinistryError::Transport(_))
    }
}

pub type MinistryResult<T> = Result<T, MinistryError>;
