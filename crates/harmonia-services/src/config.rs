//! Assistant configuration

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_CHAT_MODEL: &str = "gemini-3-pro-preview";
const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

/// Environment variables checked for an API key, highest priority first
const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub base_url: String,
    pub chat_model: String,
    pub image_model: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            timeout_secs: 120,
        }
    }
}

impl AssistantConfig {
    /// Override the API key from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_key_lookup(|var| std::env::var(var).ok())
    }

    /// Override the API key from the first non-empty variable `lookup` returns
    pub fn with_key_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let found = API_KEY_VARS
            .iter()
            .filter_map(|var| lookup(var))
            .find(|value| !value.trim().is_empty());
        if let Some(key) = found {
            self.api_key = Some(key.trim().to_string());
        }
        self
    }

    /// Configured key, ignoring blank values
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }
}
