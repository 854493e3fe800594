//! Error types for the assistant services

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("No API key configured")]
    MissingApiKey,
    #[error("API key rejected by provider")]
    ApiKeyRejected,
    #[error("Provider returned HTTP {code}: {message}")]
    Status { code: u16, message: String },
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Failed to decode response: {0}")]
    Decode(#[from] std::io::Error),
    #[error("Image payload is not valid base64: {0}")]
    ImagePayload(#[from] base64::DecodeError),
    #[error("Assistant worker has shut down")]
    WorkerGone,
}

impl AssistantError {
    /// Whether the user should be pointed at key management
    pub fn is_key_problem(&self) -> bool {
        matches!(self, Self::MissingApiKey | Self::ApiKeyRejected)
    }
}

pub type Result<T> = std::result::Result<T, AssistantError>;
