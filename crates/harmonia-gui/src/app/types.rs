use harmonia_core::{ChordQuality, Note, NoteSet, ScaleQuality};

/// Which table the visualizer is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Scale,
    Chord,
}

impl ActiveTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Scale => "Scales",
            Self::Chord => "Chords",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Scale => "MODE / SCALE",
            Self::Chord => "HARMONIC STRUCTURE",
        }
    }
}

/// Current root/quality choice. Each tab remembers its own quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub root: Note,
    pub scale: ScaleQuality,
    pub chord: ChordQuality,
    pub tab: ActiveTab,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            root: Note::C,
            scale: ScaleQuality::Major,
            chord: ChordQuality::Major,
            tab: ActiveTab::Scale,
        }
    }
}

impl Selection {
    /// Notes for the active tab, recomputed on every call
    pub fn note_set(&self) -> NoteSet {
        match self.tab {
            ActiveTab::Scale => NoteSet::from_quality(self.root, self.scale),
            ActiveTab::Chord => NoteSet::from_quality(self.root, self.chord),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_c_major_scale() {
        let set = Selection::default().note_set();
        assert_eq!(set.title(), "C Major");
        assert_eq!(set.notes.len(), 7);
    }

    #[test]
    fn test_tab_switch_keeps_each_quality() {
        let mut selection = Selection {
            root: Note::G,
            scale: ScaleQuality::Mixolydian,
            chord: ChordQuality::Dominant7,
            tab: ActiveTab::Chord,
        };
        assert_eq!(selection.note_set().notes, vec![Note::G, Note::B, Note::D, Note::F]);

        selection.tab = ActiveTab::Scale;
        assert_eq!(selection.note_set().title(), "G Mixolydian");
        assert!(!selection.note_set().contains(Note::FSharp));
    }
}
