//! Theory chat sidebar

use egui::{Color32, Key, RichText, Ui};
use harmonia_services::assistant::GREETING;
use harmonia_services::{AssistantError, ChatMessage, Role};

const NO_ANSWER: &str = "I am sorry, I could not process that request.";
const FAILED: &str = "Oops! Something went wrong.";
const MISSING_KEY: &str = "No API key is configured. Use \"Manage Keys\" to add one.";

const USER_BUBBLE: Color32 = Color32::from_rgb(79, 70, 229);
const MODEL_BUBBLE: Color32 = Color32::from_rgb(241, 245, 249);
const MODEL_TEXT: Color32 = Color32::from_rgb(30, 41, 59);

/// Action returned from the chat panel
#[derive(Debug, Clone, PartialEq)]
pub enum ChatAction {
    /// Send this conversation to the assistant
    Ask(Vec<ChatMessage>),
}

pub struct ChatPanel {
    messages: Vec<ChatMessage>,
    input: String,
    pending: bool,
}

impl ChatPanel {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::model(GREETING)],
            input: String::new(),
            pending: false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Move the typed question into the transcript and return the
    /// conversation to send. The greeting is local and never sent.
    fn submit_input(&mut self) -> Option<Vec<ChatMessage>> {
        let question = self.input.trim();
        if question.is_empty() || self.pending {
            return None;
        }
        self.messages.push(ChatMessage::user(question));
        self.input.clear();
        self.pending = true;

        let first_user = self.messages.iter().position(|m| m.role == Role::User)?;
        Some(self.messages[first_user..].to_vec())
    }

    /// Record the assistant's answer (or failure) in the transcript
    pub fn apply_answer(&mut self, answer: Result<Option<String>, AssistantError>) {
        self.pending = false;
        let text = match answer {
            Ok(Some(text)) => text,
            Ok(None) => NO_ANSWER.to_string(),
            Err(AssistantError::MissingApiKey) => MISSING_KEY.to_string(),
            Err(e) => {
                tracing::warn!("Theory chat failed: {}", e);
                FAILED.to_string()
            }
        };
        self.messages.push(ChatMessage::model(text));
    }

    pub fn ui(&mut self, ui: &mut Ui) -> Vec<ChatAction> {
        let mut actions = Vec::new();

        ui.heading("Theory Chat");
        ui.separator();

        let input_height = 64.0;
        egui::ScrollArea::vertical()
            .max_height((ui.available_height() - input_height).max(80.0))
            .stick_to_bottom(true)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for message in self.messages() {
                    draw_message(ui, message);
                    ui.add_space(6.0);
                }
                if self.pending {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.weak("Thinking...");
                    });
                }
            });

        ui.separator();
        ui.horizontal(|ui| {
            let edit = ui.add_enabled(
                !self.pending,
                egui::TextEdit::singleline(&mut self.input)
                    .hint_text("Ask about modes, chords...")
                    .desired_width(ui.available_width() - 56.0),
            );
            let enter = edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            let send = ui
                .add_enabled(!self.pending && !self.input.trim().is_empty(), egui::Button::new("Send"))
                .clicked();
            if enter || send {
                if let Some(history) = self.submit_input() {
                    actions.push(ChatAction::Ask(history));
                }
                edit.request_focus();
            }
        });

        actions
    }
}

fn draw_message(ui: &mut Ui, message: &ChatMessage) {
    let (layout, fill, text_color) = match message.role {
        Role::User => (egui::Layout::right_to_left(egui::Align::TOP), USER_BUBBLE, Color32::WHITE),
        Role::Model => (egui::Layout::left_to_right(egui::Align::TOP), MODEL_BUBBLE, MODEL_TEXT),
    };
    let max_width = ui.available_width() * 0.85;
    ui.with_layout(layout, |ui| {
        egui::Frame::new()
            .fill(fill)
            .corner_radius(10.0)
            .inner_margin(egui::Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.label(RichText::new(&message.text).color(text_color));
            });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_greeting() {
        let panel = ChatPanel::new();
        assert_eq!(panel.messages(), &[ChatMessage::model(GREETING)]);
        assert!(!panel.is_pending());
    }

    #[test]
    fn test_submit_sends_conversation_without_greeting() {
        let mut panel = ChatPanel::new();
        panel.input = "  What is a Neapolitan chord?  ".into();
        let history = panel.submit_input().unwrap();
        assert_eq!(history, vec![ChatMessage::user("What is a Neapolitan chord?")]);
        assert!(panel.input.is_empty());
        assert!(panel.is_pending());

        panel.apply_answer(Ok(Some("A major triad on the lowered second degree.".into())));
        panel.input = "Example in C?".into();
        let history = panel.submit_input().unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].role, Role::Model);
    }

    #[test]
    fn test_blank_or_pending_input_is_ignored() {
        let mut panel = ChatPanel::new();
        panel.input = "   ".into();
        assert!(panel.submit_input().is_none());

        panel.input = "first".into();
        assert!(panel.submit_input().is_some());
        panel.input = "second".into();
        assert!(panel.submit_input().is_none());
        assert_eq!(panel.input, "second");
    }

    #[test]
    fn test_answer_fallbacks() {
        let mut panel = ChatPanel::new();
        panel.apply_answer(Ok(None));
        panel.apply_answer(Err(AssistantError::Transport("timed out".into())));
        panel.apply_answer(Err(AssistantError::MissingApiKey));
        let texts: Vec<&str> = panel.messages()[1..].iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, [NO_ANSWER, FAILED, MISSING_KEY]);
        assert!(!panel.is_pending());
    }
}
