//! Gemini `generateContent` REST client

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::assistant::{
    ChatMessage, GeneratedImage, ImageSize, Role, TheoryAssistant, THEORY_PROFESSOR_INSTRUCTION,
};
use crate::config::AssistantConfig;
use crate::error::{AssistantError, Result};

/// Provider message that signals an unusable API key
const KEY_REJECTED_MARKER: &str = "Requested entity was not found";

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub image_config: ImageConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    pub aspect_ratio: String,
    pub image_size: ImageSize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

impl Content {
    fn text(role: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part { text: Some(text.into()), inline_data: None }],
        }
    }
}

impl GenerateResponse {
    fn first_parts(&self) -> &[Part] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or_default()
    }

    /// Concatenated text of the first candidate, if any
    pub fn text(&self) -> Option<String> {
        let text: String = self
            .first_parts()
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }

    /// First inline image of the first candidate
    pub fn first_image(&self) -> Option<GeneratedImage> {
        self.first_parts()
            .iter()
            .find_map(|p| p.inline_data.as_ref())
            .map(|d| GeneratedImage { mime_type: d.mime_type.clone(), data: d.data.clone() })
    }
}

// ============================================================================
// Request builders
// ============================================================================

/// Multi-turn chat request with the theory-professor instruction
pub fn chat_request(history: &[ChatMessage]) -> GenerateRequest {
    let contents = history
        .iter()
        .map(|m| {
            let role = match m.role {
                Role::User => "user",
                Role::Model => "model",
            };
            Content::text(Some(role), m.text.clone())
        })
        .collect();
    GenerateRequest {
        contents,
        system_instruction: Some(Content::text(None, THEORY_PROFESSOR_INSTRUCTION)),
        generation_config: None,
    }
}

/// Square illustration request for a theory concept
pub fn image_request(prompt: &str, size: ImageSize) -> GenerateRequest {
    let text = format!(
        "Create a beautiful, artistic, high-quality music theory visualization of: {prompt}. \
         Style: minimalist, educational, and visually stunning."
    );
    GenerateRequest {
        contents: vec![Content::text(None, text)],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            image_config: ImageConfig { aspect_ratio: "1:1".to_string(), image_size: size },
        }),
    }
}

/// Map a non-success HTTP response to an error
pub fn classify_status(code: u16, body: &str) -> AssistantError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string());
    if message.contains(KEY_REJECTED_MARKER) {
        return AssistantError::ApiKeyRejected;
    }
    AssistantError::Status { code, message }
}

// ============================================================================
// Client
// ============================================================================

/// Blocking Gemini client
pub struct GeminiClient {
    config: AssistantConfig,
    agent: ureq::Agent,
}

impl GeminiClient {
    pub fn new(config: AssistantConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();
        Self { config, agent }
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    fn generate(&self, model: &str, request: &GenerateRequest) -> Result<GenerateResponse> {
        let key = self.config.api_key().ok_or(AssistantError::MissingApiKey)?;
        let url = self.endpoint(model);
        debug!(model, "Sending generateContent request");

        match self.agent.post(&url).set("x-goog-api-key", key).send_json(request) {
            Ok(response) => Ok(response.into_json::<GenerateResponse>()?),
            Err(ureq::Error::Status(code, response)) => {
                let body = response.into_string().unwrap_or_default();
                let err = classify_status(code, &body);
                warn!(model, code, "generateContent failed: {}", err);
                Err(err)
            }
            Err(e) => {
                warn!(model, "generateContent transport error: {}", e);
                Err(AssistantError::Transport(e.to_string()))
            }
        }
    }
}

impl TheoryAssistant for GeminiClient {
    fn ask(&self, history: &[ChatMessage]) -> Result<Option<String>> {
        let response = self.generate(&self.config.chat_model, &chat_request(history))?;
        let answer = response.text();
        info!(turns = history.len(), answered = answer.is_some(), "Theory chat reply");
        Ok(answer)
    }

    fn generate_image(&self, prompt: &str, size: ImageSize) -> Result<Option<GeneratedImage>> {
        let response = self.generate(&self.config.image_model, &image_request(prompt, size))?;
        let image = response.first_image();
        info!(%size, found = image.is_some(), "Image generation finished");
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_chat_request_shape() {
        let history = vec![ChatMessage::model("Hello"), ChatMessage::user("What is a tritone?")];
        let value = serde_json::to_value(chat_request(&history)).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [
                    { "role": "model", "parts": [{ "text": "Hello" }] },
                    { "role": "user", "parts": [{ "text": "What is a tritone?" }] }
                ],
                "systemInstruction": { "parts": [{ "text": THEORY_PROFESSOR_INSTRUCTION }] }
            })
        );
    }

    #[test]
    fn test_image_request_shape() {
        let value = serde_json::to_value(image_request("the Dorian mode", ImageSize::TwoK)).unwrap();
        assert_eq!(value["generationConfig"], json!({ "imageConfig": { "aspectRatio": "1:1", "imageSize": "2K" } }));
        let text = value["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("Create a beautiful, artistic, high-quality music theory visualization of: the Dorian mode."));
        assert!(value.get("systemInstruction").is_none());
    }

    #[test]
    fn test_parse_text_response() {
        let body = json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": "A tritone " }, { "text": "spans six semitones." }] } }]
        });
        let response: GenerateResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.text().as_deref(), Some("A tritone spans six semitones."));
        assert!(response.first_image().is_none());
    }

    #[test]
    fn test_parse_image_response_takes_first_inline_part() {
        let body = json!({
            "candidates": [{ "content": { "parts": [
                { "text": "Here you go" },
                { "inlineData": { "mimeType": "image/png", "data": "AAAA" } },
                { "inlineData": { "mimeType": "image/jpeg", "data": "BBBB" } }
            ] } }]
        });
        let response: GenerateResponse = serde_json::from_value(body).unwrap();
        let image = response.first_image().unwrap();
        assert_eq!(image, GeneratedImage { mime_type: "image/png".into(), data: "AAAA".into() });
    }

    #[test]
    fn test_empty_response() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
        assert!(response.first_image().is_none());

        let response: GenerateResponse =
            serde_json::from_value(json!({ "candidates": [{}] })).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_classify_status() {
        let body = r#"{"error":{"code":404,"message":"Requested entity was not found.","status":"NOT_FOUND"}}"#;
        assert!(matches!(classify_status(404, body), AssistantError::ApiKeyRejected));

        match classify_status(429, r#"{"error":{"message":"Quota exceeded"}}"#) {
            AssistantError::Status { code, message } => {
                assert_eq!(code, 429);
                assert_eq!(message, "Quota exceeded");
            }
            other => panic!("unexpected: {other:?}"),
        }

        match classify_status(502, "  Bad Gateway \n") {
            AssistantError::Status { message, .. } => assert_eq!(message, "Bad Gateway"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_missing_key_fails_before_io() {
        let client = GeminiClient::new(AssistantConfig {
            api_key: None,
            base_url: "http://127.0.0.1:9".into(),
            ..Default::default()
        });
        let err = client.ask(&[ChatMessage::user("hi")]).unwrap_err();
        assert!(matches!(err, AssistantError::MissingApiKey));
        assert!(err.is_key_problem());
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GeminiClient::new(AssistantConfig {
            base_url: "https://example.test/v1beta/".into(),
            ..Default::default()
        });
        assert_eq!(
            client.endpoint("gemini-3-pro-preview"),
            "https://example.test/v1beta/models/gemini-3-pro-preview:generateContent"
        );
    }
}
