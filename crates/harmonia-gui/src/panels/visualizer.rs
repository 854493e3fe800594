//! Theory visualizer: tab switch, root/quality pickers, keyboard and circle

use egui::{Color32, RichText, Ui};
use harmonia_core::{ChordQuality, Note, NoteSet, Quality, ScaleQuality};

use super::circle_of_fifths::circle_of_fifths_ui;
use super::keyboard::keyboard_ui;
use crate::app::{ActiveTab, Selection};

const ACCENT: Color32 = Color32::from_rgb(79, 70, 229);
const CHIP_BG: Color32 = Color32::from_rgb(30, 41, 59);
const CHIP_TEXT: Color32 = Color32::from_rgb(129, 140, 248);
const CARD_BG: Color32 = Color32::from_rgb(238, 242, 255);
const CAPTION: Color32 = Color32::from_rgb(148, 163, 184);

const KEYBOARD_HEIGHT: f32 = 180.0;

/// Draw the visualizer. The note set is recomputed from `selection` each frame.
pub fn visualizer_ui(ui: &mut Ui, selection: &mut Selection) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading("Theory Visualizer");
            ui.weak("Explore intervals and harmonies with interactive tools.");
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Right-to-left, so chords first
            for tab in [ActiveTab::Chord, ActiveTab::Scale] {
                ui.selectable_value(&mut selection.tab, tab, RichText::new(tab.label()).strong());
            }
        });
    });
    ui.add_space(12.0);

    ui.columns(2, |columns| {
        let notes = selection.note_set();
        visuals_column(&mut columns[0], &notes);
        if let Some(root) = controls_column(&mut columns[1], selection, &notes) {
            selection.root = root;
        }
    });
}

fn visuals_column(ui: &mut Ui, notes: &NoteSet) {
    keyboard_ui(ui, notes, KEYBOARD_HEIGHT);
    ui.add_space(8.0);

    ui.horizontal_wrapped(|ui| {
        for (note, interval) in notes.notes.iter().zip(&notes.intervals) {
            egui::Frame::new()
                .fill(CHIP_BG)
                .corner_radius(12.0)
                .inner_margin(egui::Margin::symmetric(10, 4))
                .show(ui, |ui| {
                    ui.label(RichText::new(note.name()).monospace().color(CHIP_TEXT))
                        .on_hover_text(*interval);
                });
        }
    });
    ui.add_space(12.0);

    egui::Frame::new()
        .fill(CARD_BG)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(notes.root.name()).size(28.0).strong().color(ACCENT));
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(notes.title()).strong());
                    let tab = match notes.kind {
                        harmonia_core::QualityKind::Scale => ActiveTab::Scale,
                        harmonia_core::QualityKind::Chord => ActiveTab::Chord,
                    };
                    ui.label(RichText::new(tab.subtitle()).small().color(ACCENT));
                });
            });
        });
}

/// Pickers and the circle. Returns a root chosen on the circle.
fn controls_column(ui: &mut Ui, selection: &mut Selection, notes: &NoteSet) -> Option<Note> {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new("ROOT NOTE").small().color(CAPTION));
            egui::ComboBox::from_id_salt("root_combo")
                .selected_text(selection.root.name())
                .width(80.0)
                .show_ui(ui, |ui| {
                    for note in Note::ALL {
                        ui.selectable_value(&mut selection.root, note, note.name());
                    }
                });
        });
        ui.vertical(|ui| {
            ui.label(RichText::new("VARIATION").small().color(CAPTION));
            match selection.tab {
                ActiveTab::Scale => quality_combo::<ScaleQuality>(ui, "scale_combo", &mut selection.scale),
                ActiveTab::Chord => quality_combo::<ChordQuality>(ui, "chord_combo", &mut selection.chord),
            }
        });
    });
    ui.add_space(12.0);

    ui.vertical_centered(|ui| {
        ui.label(RichText::new("CIRCLE OF FIFTHS REFERENCE").small().color(CAPTION));
        circle_of_fifths_ui(ui, selection.root, notes)
    })
    .inner
}

fn quality_combo<Q>(ui: &mut Ui, id: &str, current: &mut Q)
where
    Q: Quality + PartialEq,
{
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.name())
        .width(150.0)
        .show_ui(ui, |ui| {
            for &quality in Q::ALL {
                ui.selectable_value(current, quality, quality.name());
            }
        });
}
