//! API key management window

use egui::Context;

/// Floating window for entering the generative-AI API key
pub struct ApiKeyDialog {
    pub open: bool,
    draft: String,
}

impl ApiKeyDialog {
    pub fn new() -> Self {
        Self { open: false, draft: String::new() }
    }

    pub fn open_with(&mut self, current: Option<&str>) {
        self.draft = current.unwrap_or_default().to_string();
        self.open = true;
    }

    /// Draw the window. Returns the new key when the user saves it
    /// (`Some(None)` clears the stored key).
    pub fn show(&mut self, ctx: &Context) -> Option<Option<String>> {
        if !self.open {
            return None;
        }

        let mut result = None;
        let mut open = self.open;
        egui::Window::new("API Key")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Gemini API key used for chat and image generation.");
                ui.weak("GEMINI_API_KEY or API_KEY in the environment take precedence.");
                ui.add(
                    egui::TextEdit::singleline(&mut self.draft)
                        .password(true)
                        .desired_width(320.0),
                );
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        let key = self.draft.trim();
                        result = Some((!key.is_empty()).then(|| key.to_string()));
                    }
                    if ui.button("Clear").clicked() {
                        self.draft.clear();
                        result = Some(None);
                    }
                });
            });
        self.open = open && result.is_none();
        result
    }
}
