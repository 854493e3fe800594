use harmonia_services::{AssistantConfig, AssistantError, AssistantRequest};

use super::config::save_config;
use super::{spawn_worker, HarmoniaApp};
use crate::panels::{save_visual, ChatAction, VisualAction};

impl HarmoniaApp {
    pub(super) fn handle_chat_action(&mut self, action: ChatAction) {
        match action {
            ChatAction::Ask(history) => {
                if let Err(e) = self.worker.submit(AssistantRequest::Ask { history }) {
                    self.chat_panel.apply_answer(Err(e));
                }
            }
        }
    }

    pub(super) fn handle_visual_action(&mut self, action: VisualAction) {
        match action {
            VisualAction::Generate { prompt, size } => {
                // Ask for a key up front instead of failing remotely
                if !self.effective_assistant_config().has_api_key() {
                    self.visual_panel.cancel("An API key is required to generate images.");
                    self.open_key_dialog();
                    return;
                }
                if let Err(e) = self.worker.submit(AssistantRequest::GenerateImage { prompt, size }) {
                    self.visual_panel.apply_result(Err(e));
                }
            }
            VisualAction::ManageKeys => self.open_key_dialog(),
            VisualAction::Download { file_name, bytes } => {
                let Some(path) = rfd::FileDialog::new()
                    .set_file_name(&file_name)
                    .save_file()
                else {
                    return;
                };
                match save_visual(&path, &bytes) {
                    Ok(()) => tracing::info!(path = %path.display(), "Saved generated visual"),
                    Err(e) => {
                        tracing::warn!(path = %path.display(), "Failed to save visual: {}", e);
                        self.visual_panel.show_error("Could not save the image.");
                    }
                }
            }
        }
    }

    pub(super) fn open_key_dialog(&mut self) {
        self.key_dialog.open_with(self.config.assistant.api_key.as_deref());
    }

    /// Store a new key (or clear it), persist it, and restart the worker
    pub(super) fn set_api_key(&mut self, key: Option<String>) {
        tracing::info!(cleared = key.is_none(), "API key updated");
        self.config.assistant.api_key = key;
        save_config(&self.config);
        self.restart_worker();
    }

    /// Replace the assistant thread. Replies still in flight on the old one
    /// are lost, so pending panels are released first.
    pub(super) fn restart_worker(&mut self) {
        if self.chat_panel.is_pending() {
            self.chat_panel.apply_answer(Err(AssistantError::WorkerGone));
        }
        if self.visual_panel.is_pending() {
            self.visual_panel.cancel("Generation was interrupted. Please try again.");
        }
        self.worker = spawn_worker(&self.effective_assistant_config());
    }

    /// File config with environment overrides applied
    pub(super) fn effective_assistant_config(&self) -> AssistantConfig {
        self.config.assistant.clone().with_env_overrides()
    }
}
