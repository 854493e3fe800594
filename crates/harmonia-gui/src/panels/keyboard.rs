//! Piano keyboard from C up to the E of the next octave, highlighting a note set

use egui::{Color32, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};
use harmonia_core::{Note, NoteSet};

/// Number of keys drawn: one octave plus C..E
const KEY_COUNT: usize = 17;
const BLACK_WIDTH_RATIO: f32 = 0.6;
const BLACK_HEIGHT_RATIO: f32 = 0.6;

const FRAME_BG: Color32 = Color32::from_rgb(15, 23, 42);
const WHITE_KEY: Color32 = Color32::from_rgb(255, 255, 255);
const WHITE_KEY_LIT: Color32 = Color32::from_rgb(224, 231, 255);
const BLACK_KEY: Color32 = Color32::from_rgb(30, 41, 59);
const BLACK_KEY_LIT: Color32 = Color32::from_rgb(99, 102, 241);
const LABEL_DIM: Color32 = Color32::from_rgb(148, 163, 184);
const LABEL_LIT: Color32 = Color32::from_rgb(79, 70, 229);
const KEY_BORDER: Color32 = Color32::from_rgb(226, 232, 240);

/// A single key of the drawn keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PianoKey {
    pub note: Note,
    /// 0 for the first C..B, 1 for the trailing C..E
    pub octave: u8,
}

impl PianoKey {
    pub fn is_black(&self) -> bool {
        self.note.is_black_key()
    }
}

/// Keys in left-to-right order
pub fn keyboard_keys() -> Vec<PianoKey> {
    (0..KEY_COUNT)
        .map(|i| PianoKey {
            note: Note::from_index(i as i32),
            octave: (i / 12) as u8,
        })
        .collect()
}

/// Screen rectangles for every key inside `rect`, white keys first so that
/// black keys paint over them
pub fn key_rects(rect: Rect) -> Vec<(PianoKey, Rect)> {
    let keys = keyboard_keys();
    let white_count = keys.iter().filter(|k| !k.is_black()).count();
    let white_w = rect.width() / white_count as f32;
    let black_w = white_w * BLACK_WIDTH_RATIO;
    let black_h = rect.height() * BLACK_HEIGHT_RATIO;

    let mut whites = Vec::with_capacity(white_count);
    let mut blacks = Vec::new();
    let mut white_idx = 0usize;

    for key in keys {
        if key.is_black() {
            // Centered on the boundary with the previous white key
            let x = rect.left() + white_idx as f32 * white_w - black_w / 2.0;
            let r = Rect::from_min_size(Pos2::new(x, rect.top()), Vec2::new(black_w, black_h));
            blacks.push((key, r));
            continue;
        }
        let x = rect.left() + white_idx as f32 * white_w;
        let r = Rect::from_min_size(Pos2::new(x, rect.top()), Vec2::new(white_w, rect.height()));
        whites.push((key, r));
        white_idx += 1;
    }

    whites.extend(blacks);
    whites
}

/// Draw the keyboard and highlight every key whose pitch class is in `notes`
pub fn keyboard_ui(ui: &mut Ui, notes: &NoteSet, height: f32) {
    let width = ui.available_width();
    let (response, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::hover());
    let outer = response.rect;
    painter.rect_filled(outer, 12.0, FRAME_BG);

    let inner = outer.shrink(8.0);
    for (key, r) in key_rects(inner) {
        let lit = notes.contains(key.note);
        let font = egui::FontId::proportional(if key.is_black() { 9.0 } else { 12.0 });
        if key.is_black() {
            painter.rect_filled(r, 4.0, if lit { BLACK_KEY_LIT } else { BLACK_KEY });
            painter.text(
                Pos2::new(r.center().x, r.bottom() - 6.0),
                egui::Align2::CENTER_BOTTOM,
                key.note.name(),
                font,
                LABEL_DIM,
            );
            continue;
        }
        painter.rect_filled(r, 6.0, if lit { WHITE_KEY_LIT } else { WHITE_KEY });
        painter.rect_stroke(r, 6.0, Stroke::new(1.0, KEY_BORDER), StrokeKind::Inside);
        painter.text(
            Pos2::new(r.center().x, r.bottom() - 8.0),
            egui::Align2::CENTER_BOTTOM,
            key.note.name(),
            font,
            if lit { LABEL_LIT } else { LABEL_DIM },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_sequence() {
        let keys = keyboard_keys();
        assert_eq!(keys.len(), 17);
        assert_eq!(keys[0], PianoKey { note: Note::C, octave: 0 });
        assert_eq!(keys[12], PianoKey { note: Note::C, octave: 1 });
        assert_eq!(keys[16], PianoKey { note: Note::E, octave: 1 });
        let pattern: Vec<bool> = keys.iter().map(|k| k.is_black()).collect();
        assert_eq!(
            pattern,
            [
                false, true, false, true, false, false, true, false, true, false, true, false,
                false, true, false, true, false,
            ]
        );
    }

    #[test]
    fn test_white_keys_tile_the_rect() {
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(500.0, 200.0));
        let rects = key_rects(rect);
        let whites: Vec<Rect> = rects.iter().filter(|(k, _)| !k.is_black()).map(|(_, r)| *r).collect();
        assert_eq!(whites.len(), 10);
        assert_eq!(whites[0].left(), 0.0);
        assert_eq!(whites[9].right(), 500.0);
        assert!(whites.iter().all(|r| (r.width() - 50.0).abs() < 1e-3));
    }

    #[test]
    fn test_black_keys_straddle_boundaries() {
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(500.0, 200.0));
        let rects = key_rects(rect);
        // Black keys come last so they paint on top
        assert!(rects[..10].iter().all(|(k, _)| !k.is_black()));
        let (key, r) = rects[10];
        assert_eq!(key.note, Note::CSharp);
        assert!((r.center().x - 50.0).abs() < 1e-3);
        assert!((r.height() - 120.0).abs() < 1e-3);
    }
}
