//! Main application state

mod action_handlers;
mod config;
mod types;

use std::time::Duration;

use eframe::CreationContext;
use egui::{Color32, Context, RichText};
use harmonia_services::{AssistantConfig, AssistantReply, AssistantWorker, GeminiClient};

pub use types::{ActiveTab, Selection};
use config::{load_config, AppConfig};

use crate::panels::{visualizer_ui, ApiKeyDialog, ChatPanel, VisualGeneratorPanel};

/// How often to poll the assistant while a request is in flight
const POLL_INTERVAL: Duration = Duration::from_millis(100);

const PAGE_BG: Color32 = Color32::from_rgb(248, 250, 252);

pub struct HarmoniaApp {
    selection: Selection,
    config: AppConfig,
    worker: AssistantWorker,

    // Panels
    chat_panel: ChatPanel,
    visual_panel: VisualGeneratorPanel,
    key_dialog: ApiKeyDialog,
}

impl HarmoniaApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let config = load_config();
        let worker = spawn_worker(&config.assistant.clone().with_env_overrides());

        Self {
            selection: Selection::default(),
            config,
            worker,
            chat_panel: ChatPanel::new(),
            visual_panel: VisualGeneratorPanel::new(),
            key_dialog: ApiKeyDialog::new(),
        }
    }

    fn poll_assistant(&mut self) {
        while let Some(reply) = self.worker.try_recv() {
            match reply {
                Ok(AssistantReply::Answer(answer)) => self.chat_panel.apply_answer(answer),
                Ok(AssistantReply::Image(result)) => {
                    if self.visual_panel.apply_result(result) {
                        self.open_key_dialog();
                    }
                }
                Err(e) => {
                    tracing::error!("Assistant worker lost: {}", e);
                    self.restart_worker();
                    break;
                }
            }
        }
    }

    fn is_waiting(&self) -> bool {
        self.chat_panel.is_pending() || self.visual_panel.is_pending()
    }
}

/// Start an assistant thread for the configured provider
fn spawn_worker(assistant: &AssistantConfig) -> AssistantWorker {
    if !assistant.has_api_key() {
        tracing::warn!("No API key configured; chat and image generation are unavailable");
    }
    AssistantWorker::spawn(GeminiClient::new(assistant.clone()))
}

impl eframe::App for HarmoniaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.poll_assistant();

        egui::SidePanel::left("theory_chat")
            .resizable(true)
            .default_width(320.0)
            .min_width(260.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(RichText::new("Harmonia").size(22.0).strong());
                ui.add_space(8.0);
                let actions = self.chat_panel.ui(ui);
                for action in actions {
                    self.handle_chat_action(action);
                }
            });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.weak("Harmonia Studio \u{2022} Powered by Gemini AI");
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(PAGE_BG))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    visualizer_ui(ui, &mut self.selection);

                    ui.add_space(24.0);
                    ui.separator();
                    ui.heading("Artistic Inspiration");
                    ui.add_space(8.0);
                    let actions = self.visual_panel.ui(ui);
                    for action in actions {
                        self.handle_visual_action(action);
                    }
                });
            });

        if let Some(key) = self.key_dialog.show(ctx) {
            self.set_api_key(key);
        }

        if self.is_waiting() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }
}
