use std::path::{Path, PathBuf};

use harmonia_services::AssistantConfig;

#[derive(serde::Serialize, serde::Deserialize, Default)]
pub(super) struct AppConfig {
    #[serde(default)]
    pub assistant: AssistantConfig,
}

pub(super) fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("harmonia")
        .join("config.toml")
}

pub(super) fn parse_config(s: &str) -> AppConfig {
    toml::from_str(s).unwrap_or_else(|e| {
        tracing::warn!("Ignoring malformed config: {}", e);
        AppConfig::default()
    })
}

pub(super) fn load_config() -> AppConfig {
    let path = config_path();
    std::fs::read_to_string(&path)
        .ok()
        .map(|s| parse_config(&s))
        .unwrap_or_default()
}

pub(super) fn save_config(config: &AppConfig) {
    save_config_to(&config_path(), config);
}

fn save_config_to(path: &Path, config: &AppConfig) {
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!(path = %parent.display(), "Failed to create config directory: {}", e);
        }
    }
    let Ok(s) = toml::to_string_pretty(config) else { return };
    if let Err(e) = std::fs::write(path, s) {
        tracing::warn!(path = %path.display(), "Failed to save config: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config("[assistant]\nchat_model = \"gemini-custom\"\n");
        assert_eq!(config.assistant.chat_model, "gemini-custom");
        assert_eq!(config.assistant.image_model, AssistantConfig::default().image_model);
        assert!(config.assistant.api_key.is_none());
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let config = parse_config("assistant = 3");
        assert_eq!(config.assistant, AssistantConfig::default());
    }

    #[test]
    fn test_round_trip_preserves_key() {
        let mut config = AppConfig::default();
        config.assistant.api_key = Some("secret".into());
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(parse_config(&text).assistant.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harmonia").join("config.toml");
        let mut config = AppConfig::default();
        config.assistant.api_key = Some("secret".into());
        save_config_to(&path, &config);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(parse_config(&text).assistant.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_save_survives_unusable_directory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("harmonia");
        std::fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("config.toml");
        save_config_to(&path, &AppConfig::default());
        assert!(!path.exists());
    }
}
