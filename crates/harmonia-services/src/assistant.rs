//! Assistant-facing types and the provider trait

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// System instruction for the theory chat
pub const THEORY_PROFESSOR_INSTRUCTION: &str = "You are an expert music theory professor. \
Explain concepts clearly, use analogies, and focus on both classical and jazz theory. \
Provide concise but helpful answers.";

/// First message shown in a fresh chat
pub const GREETING: &str =
    "Hello! I am your AI Music Theory Assistant. Ask me anything about harmony, melody, or composition!";

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into() }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self { role: Role::Model, text: text.into() }
    }
}

/// Requested output resolution tier for generated images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageSize {
    #[default]
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

impl ImageSize {
    pub const ALL: [ImageSize; 3] = [Self::OneK, Self::TwoK, Self::FourK];

    pub fn label(&self) -> &'static str {
        match self {
            Self::OneK => "1K",
            Self::TwoK => "2K",
            Self::FourK => "4K",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inline image returned by the provider (base64 payload)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub data: String,
}

impl GeneratedImage {
    /// Raw image bytes
    pub fn decode(&self) -> Result<Vec<u8>> {
        Ok(STANDARD.decode(self.data.trim())?)
    }

    /// File extension matching the MIME type
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/webp" => "webp",
            _ => "png",
        }
    }
}

/// A remote model that answers theory questions and renders images
///
/// Calls block; run them off the UI thread (see [`crate::AssistantWorker`]).
pub trait TheoryAssistant {
    /// Answer the last user message given the whole conversation.
    /// `Ok(None)` means the provider returned no text.
    fn ask(&self, history: &[ChatMessage]) -> Result<Option<String>>;

    /// Render an illustration of `prompt`.
    /// `Ok(None)` means the provider answered without an image.
    fn generate_image(&self, prompt: &str, size: ImageSize) -> Result<Option<GeneratedImage>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AssistantError;

    #[test]
    fn test_decode_payload() {
        let image = GeneratedImage { mime_type: "image/png".into(), data: "iVBORw0KGgo=".into() };
        assert_eq!(image.decode().unwrap(), b"\x89PNG\r\n\x1a\n");
        assert_eq!(image.extension(), "png");

        let broken = GeneratedImage { mime_type: "image/jpeg".into(), data: "not base64!".into() };
        assert!(matches!(broken.decode(), Err(AssistantError::ImagePayload(_))));
        assert_eq!(broken.extension(), "jpg");
    }

    #[test]
    fn test_image_size_wire_names() {
        assert_eq!(serde_json::to_string(&ImageSize::FourK).unwrap(), "\"4K\"");
        let size: ImageSize = serde_json::from_str("\"2K\"").unwrap();
        assert_eq!(size, ImageSize::TwoK);
        assert_eq!(ImageSize::default(), ImageSize::OneK);
    }

    #[test]
    fn test_role_wire_names() {
        let msg = ChatMessage::model("hi");
        assert_eq!(serde_json::to_string(&msg).unwrap(), r#"{"role":"model","text":"hi"}"#);
    }
}
