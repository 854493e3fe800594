//! UI panels

mod api_key;
mod chat;
mod circle_of_fifths;
mod keyboard;
mod visual_generator;
mod visualizer;

pub use api_key::ApiKeyDialog;
pub use chat::{ChatAction, ChatPanel};
pub use visual_generator::{save_visual, VisualAction, VisualGeneratorPanel};
pub use visualizer::visualizer_ui;
