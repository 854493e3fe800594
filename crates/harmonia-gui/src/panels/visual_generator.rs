//! AI image generation for theory concepts

use std::path::Path;
use std::sync::Arc;

use egui::{Color32, RichText, Ui};
use harmonia_services::{AssistantError, GeneratedImage, ImageSize};

const KEY_ERROR: &str = "API Key error. Please select a valid key from a paid GCP project.";
const NO_IMAGE: &str = "Failed to generate image.";
const FAILED: &str = "Something went wrong during generation.";

const ERROR_TEXT: Color32 = Color32::from_rgb(185, 28, 28);
const MAX_IMAGE_WIDTH: f32 = 512.0;

/// Action returned from the generator panel
#[derive(Debug, Clone, PartialEq)]
pub enum VisualAction {
    Generate { prompt: String, size: ImageSize },
    ManageKeys,
    Download { file_name: String, bytes: Arc<[u8]> },
}

/// A decoded picture ready to paint and save
#[derive(Debug, Clone, PartialEq)]
struct Visual {
    uri: String,
    file_name: String,
    bytes: Arc<[u8]>,
}

pub struct VisualGeneratorPanel {
    prompt: String,
    size: ImageSize,
    pending: bool,
    visual: Option<Visual>,
    error: Option<String>,
    generation: u64,
    // Texture of a replaced visual, released on the next frame
    stale_uri: Option<String>,
}

impl VisualGeneratorPanel {
    pub fn new() -> Self {
        Self {
            prompt: String::new(),
            size: ImageSize::default(),
            pending: false,
            visual: None,
            error: None,
            generation: 0,
            stale_uri: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    fn submit(&mut self) -> Option<VisualAction> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() || self.pending {
            return None;
        }
        self.pending = true;
        self.error = None;
        Some(VisualAction::Generate { prompt: prompt.to_string(), size: self.size })
    }

    /// Abandon a request that never reached the provider
    pub fn cancel(&mut self, reason: &str) {
        self.pending = false;
        self.show_error(reason);
    }

    pub fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn set_image(&mut self, image: &GeneratedImage) -> Result<(), AssistantError> {
        let bytes = image.decode()?;
        self.generation += 1;
        let visual = Visual {
            uri: format!("bytes://music-visual-{}.{}", self.generation, image.extension()),
            file_name: format!("music-visual.{}", image.extension()),
            bytes: bytes.into(),
        };
        if let Some(old) = self.visual.replace(visual) {
            self.stale_uri = Some(old.uri);
        }
        Ok(())
    }

    /// Record the generation result. Returns true when the user should be
    /// sent to key management.
    pub fn apply_result(&mut self, result: Result<Option<GeneratedImage>, AssistantError>) -> bool {
        self.pending = false;
        match result.and_then(|image| image.map(|i| self.set_image(&i)).transpose()) {
            Ok(Some(())) => {
                self.error = None;
                false
            }
            Ok(None) => {
                self.error = Some(NO_IMAGE.to_string());
                false
            }
            Err(e) if e.is_key_problem() => {
                self.error = Some(KEY_ERROR.to_string());
                true
            }
            Err(e) => {
                tracing::warn!("Image generation failed: {}", e);
                self.error = Some(FAILED.to_string());
                false
            }
        }
    }

    pub fn ui(&mut self, ui: &mut Ui) -> Vec<VisualAction> {
        let mut actions = Vec::new();

        if let Some(uri) = self.stale_uri.take() {
            ui.ctx().forget_image(&uri);
        }

        ui.horizontal(|ui| {
            ui.add_enabled(
                !self.pending,
                egui::TextEdit::singleline(&mut self.prompt)
                    .hint_text("e.g. the circle of fifths as a galaxy")
                    .desired_width((ui.available_width() - 200.0).max(120.0)),
            );
            egui::ComboBox::from_id_salt("image_size_combo")
                .selected_text(self.size.label())
                .width(56.0)
                .show_ui(ui, |ui| {
                    for size in ImageSize::ALL {
                        ui.selectable_value(&mut self.size, size, size.label());
                    }
                });
            let can_generate = !self.pending && !self.prompt.trim().is_empty();
            if ui.add_enabled(can_generate, egui::Button::new("Generate")).clicked() {
                actions.extend(self.submit());
            }
        });

        ui.add_space(8.0);

        if self.pending {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Composing your visual...");
            });
        }

        if let Some(error) = &self.error {
            ui.horizontal(|ui| {
                ui.label(RichText::new(error).color(ERROR_TEXT));
                if ui.small_button("Manage Keys").clicked() {
                    actions.push(VisualAction::ManageKeys);
                }
            });
        }

        if let Some(visual) = &self.visual {
            ui.add(
                egui::Image::from_bytes(visual.uri.clone(), visual.bytes.clone())
                    .max_width(MAX_IMAGE_WIDTH.min(ui.available_width())),
            );
            ui.add_space(4.0);
            if ui.button("Download").clicked() {
                actions.push(VisualAction::Download {
                    file_name: visual.file_name.clone(),
                    bytes: visual.bytes.clone(),
                });
            }
        }

        actions
    }
}

/// Write a downloaded visual to `path`
pub fn save_visual(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, bytes)
}
