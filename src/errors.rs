use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Failed to generate blog content: {0}")]
    Generation(String),

    #[error("Failed to store blog content: {0}")]
    Storage(String),

    #[error("Failed to issue download link: {0}")]
    Link(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl BlogError {
    /// Stable error kind reported to callers alongside the message.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            BlogError::Validation(_) => "ValidationError",
            BlogError::Generation(_) => "GenerationError",
            BlogError::Storage(_) => "StorageError",
            BlogError::Link(_) => "LinkError",
            BlogError::Config(_) => "ConfigError",
        }
    }

    /// Client-caused failures are 4xx, everything downstream is 5xx.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            BlogError::Validation(_) => 400,
            _ => 500,
        }
    }

    /// Message safe to return to the caller. Provider and SDK detail stays in the logs.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            BlogError::Validation(msg) => msg.clone(),
            BlogError::Generation(_) => "Error generating the blog content.".to_string(),
            BlogError::Storage(_) => "Error saving the blog content.".to_string(),
            BlogError::Link(_) => "Error creating the download link.".to_string(),
            BlogError::Config(_) => "Internal server error.".to_string(),
        }
    }
}
