//! Circle of fifths root selector

use std::f32::consts::PI;

use egui::{Color32, Pos2, Sense, Stroke, Ui, Vec2};
use harmonia_core::{Note, NoteSet, CIRCLE_OF_FIFTHS};

const OUTER_RADIUS: f32 = 100.0;
const INNER_RADIUS: f32 = 70.0;
/// Slots sit at this fraction of the outer radius
const SLOT_RING: f32 = 0.85;
const SLOT_RADIUS: f32 = 18.0;

const RING_FILL: Color32 = Color32::WHITE;
const INNER_FILL: Color32 = Color32::from_rgb(248, 250, 252);
const RING_STROKE: Color32 = Color32::from_rgb(226, 232, 240);
const SELECTED: Color32 = Color32::from_rgb(79, 70, 229);
const MEMBER: Color32 = Color32::from_rgb(224, 231, 255);
const HOVER: Color32 = Color32::from_rgb(241, 245, 249);
const TEXT: Color32 = Color32::from_rgb(51, 65, 85);
const TEXT_DIM: Color32 = Color32::from_rgb(148, 163, 184);

/// Center of slot `i` (0 at twelve o'clock, clockwise, 30 degrees apart)
pub fn slot_center(center: Pos2, scale: f32, i: usize) -> Pos2 {
    let angle = (i as f32 * 30.0 - 90.0) * PI / 180.0;
    let r = OUTER_RADIUS * SLOT_RING * scale;
    Pos2::new(center.x + r * angle.cos(), center.y + r * angle.sin())
}

/// Slot under `pos`, if any
pub fn slot_at(center: Pos2, scale: f32, pos: Pos2) -> Option<usize> {
    (0..CIRCLE_OF_FIFTHS.len())
        .find(|&i| slot_center(center, scale, i).distance(pos) <= SLOT_RADIUS * scale)
}

/// Draw the circle. Returns the note the user clicked, if any.
pub fn circle_of_fifths_ui(ui: &mut Ui, selected: Note, notes: &NoteSet) -> Option<Note> {
    let side = ui.available_width().min(320.0);
    let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
    let center = response.rect.center();
    let scale = side / 240.0;

    painter.circle(center, OUTER_RADIUS * scale, RING_FILL, Stroke::new(1.0, RING_STROKE));
    painter.circle(center, INNER_RADIUS * scale, INNER_FILL, Stroke::new(1.0, RING_STROKE));

    let hovered = response.hover_pos().and_then(|p| slot_at(center, scale, p));

    for (i, &note) in CIRCLE_OF_FIFTHS.iter().enumerate() {
        let pos = slot_center(center, scale, i);
        let is_selected = note == selected;
        let radius = SLOT_RADIUS * scale * if is_selected { 1.1 } else { 1.0 };
        let fill = if is_selected {
            SELECTED
        } else if notes.contains(note) {
            MEMBER
        } else if hovered == Some(i) {
            HOVER
        } else {
            RING_FILL
        };
        painter.circle(pos, radius, fill, Stroke::new(1.0, RING_STROKE));
        painter.text(
            pos,
            egui::Align2::CENTER_CENTER,
            note.name(),
            egui::FontId::proportional(12.0 * scale),
            if is_selected { Color32::WHITE } else { TEXT },
        );
    }

    painter.text(
        center - Vec2::new(0.0, 8.0 * scale),
        egui::Align2::CENTER_CENTER,
        selected.name(),
        egui::FontId::proportional(24.0 * scale),
        TEXT,
    );
    painter.text(
        center + Vec2::new(0.0, 14.0 * scale),
        egui::Align2::CENTER_CENTER,
        "ROOT",
        egui::FontId::proportional(9.0 * scale),
        TEXT_DIM,
    );

    if !response.clicked() {
        return None;
    }
    response
        .interact_pointer_pos()
        .and_then(|p| slot_at(center, scale, p))
        .map(|i| CIRCLE_OF_FIFTHS[i])
}
