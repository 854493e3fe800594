//! harmonia-services: Generative-AI collaborators (theory chat, image generation)

pub mod assistant;
mod config;
mod error;
pub mod gemini;
pub mod worker;

pub use assistant::{ChatMessage, GeneratedImage, ImageSize, Role, TheoryAssistant};
pub use config::AssistantConfig;
pub use error::{AssistantError, Result};
pub use gemini::GeminiClient;
pub use worker::{AssistantReply, AssistantRequest, AssistantWorker};
