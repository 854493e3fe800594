//! Projection of a root note through an interval pattern

use serde::Serialize;

use crate::error::{QualityKind, Result};
use crate::library::{ChordQuality, Quality, ScaleQuality};
use crate::note::Note;

/// Short interval names, indexed by semitone offset mod 12
const INTERVAL_NAMES: [&str; 12] = [
    "P1", "m2", "M2", "m3", "M3", "P4", "TT", "P5", "m6", "M6", "m7", "M7",
];

/// Apply an interval pattern to `root`
///
/// Each offset is reduced modulo 12, so out-of-range or negative offsets
/// still land on a valid note. Output order follows the pattern and repeated
/// offsets produce repeated notes.
///
/// # Example
/// ```
/// use harmonia_core::{project, Note};
/// let notes = project(Note::C, &[0u8, 4, 7]);
/// assert_eq!(notes, vec![Note::C, Note::E, Note::G]);
/// ```
pub fn project<T>(root: Note, offsets: &[T]) -> Vec<Note>
where
    T: Copy + Into<i32>,
{
    let base = root.index() as i32;
    offsets
        .iter()
        .map(|&offset| Note::from_index(base + offset.into().rem_euclid(12)))
        .collect()
}

/// Notes of the named scale built on the named root
///
/// # Example
/// ```
/// use harmonia_core::project_scale;
/// let names: Vec<String> = project_scale("A", "Minor")
///     .unwrap()
///     .iter()
///     .map(|n| n.to_string())
///     .collect();
/// assert_eq!(names, ["A", "B", "C", "D", "E", "F", "G"]);
/// ```
pub fn project_scale(root: &str, quality: &str) -> Result<Vec<Note>> {
    let root: Note = root.parse()?;
    let quality = ScaleQuality::from_name(quality)?;
    Ok(quality.notes(root))
}

/// Notes of the named chord built on the named root
pub fn project_chord(root: &str, quality: &str) -> Result<Vec<Note>> {
    let root: Note = root.parse()?;
    let quality = ChordQuality::from_name(quality)?;
    Ok(quality.notes(root))
}

/// Short name of the interval spanning `semitones` (reduced modulo 12)
pub fn interval_name(semitones: i32) -> &'static str {
    INTERVAL_NAMES[semitones.rem_euclid(12) as usize]
}

/// A projected scale or chord together with its interval labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteSet {
    pub root: Note,
    pub kind: QualityKind,
    pub quality: String,
    pub notes: Vec<Note>,
    pub intervals: Vec<&'static str>,
}

impl NoteSet {
    pub fn from_quality<Q: Quality>(root: Note, quality: Q) -> Self {
        let offsets = quality.intervals();
        Self {
            root,
            kind: Q::KIND,
            quality: quality.name().to_string(),
            notes: project(root, offsets),
            intervals: offsets.iter().map(|&o| interval_name(o as i32)).collect(),
        }
    }

    pub fn scale(root: &str, quality: &str) -> Result<Self> {
        let root: Note = root.parse()?;
        Ok(Self::from_quality(root, ScaleQuality::from_name(quality)?))
    }

    pub fn chord(root: &str, quality: &str) -> Result<Self> {
        let root: Note = root.parse()?;
        Ok(Self::from_quality(root, ChordQuality::from_name(quality)?))
    }

    /// Set-membership test used by the keyboard and circle views
    pub fn contains(&self, note: Note) -> bool {
        self.notes.contains(&note)
    }

    /// Heading such as "C Dominant 7"
    pub fn title(&self) -> String {
        format!("{} {}", self.root, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TheoryError;

    fn names(notes: &[Note]) -> Vec<&'static str> {
        notes.iter().map(|n| n.name()).collect()
    }

    #[test]
    fn test_concrete_scales() {
        assert_eq!(names(&project_scale("C", "Major").unwrap()), ["C", "D", "E", "F", "G", "A", "B"]);
        assert_eq!(names(&project_scale("A", "Minor").unwrap()), ["A", "B", "C", "D", "E", "F", "G"]);
        assert_eq!(names(&project_scale("D", "Pentatonic Major").unwrap()), ["D", "E", "F#", "A", "B"]);
    }

    #[test]
    fn test_concrete_chords() {
        assert_eq!(names(&project_chord("C", "Dominant 7").unwrap()), ["C", "E", "G", "A#"]);
        assert_eq!(names(&project_chord("G", "Diminished").unwrap()), ["G", "A#", "C#"]);
    }

    #[test]
    fn test_length_and_root_for_every_scale() {
        for root in Note::ALL {
            for q in ScaleQuality::ALL {
                let notes = project_scale(root.name(), q.name()).unwrap();
                assert_eq!(notes.len(), q.intervals().len());
                assert_eq!(notes[0], root);
            }
        }
    }

    #[test]
    fn test_length_and_root_for_every_chord() {
        for root in Note::ALL {
            for q in ChordQuality::ALL {
                let notes = project_chord(root.name(), q.name()).unwrap();
                assert_eq!(notes.len(), q.intervals().len());
                assert_eq!(notes[0], root);
            }
        }
    }

    #[test]
    fn test_transposition_equivariance() {
        for q in ScaleQuality::ALL {
            for r1 in Note::ALL {
                for r2 in Note::ALL {
                    let shift = r1.index() as i32 - r2.index() as i32;
                    let a = q.notes(r1);
                    let b = q.notes(r2);
                    for (x, y) in a.iter().zip(&b) {
                        assert_eq!(x.index() as i32, (y.index() as i32 + shift).rem_euclid(12));
                    }
                }
            }
        }
    }

    #[test]
    fn test_unknown_quality_and_invalid_note() {
        assert_eq!(
            project_scale("C", "Nonexistent"),
            Err(TheoryError::UnknownQuality { kind: QualityKind::Scale, name: "Nonexistent".into() })
        );
        assert_eq!(project_scale("H", "Major"), Err(TheoryError::InvalidNote("H".into())));
        // Root is validated first
        assert!(matches!(project_chord("H", "Nonexistent"), Err(TheoryError::InvalidNote(_))));
        // Scale names are not chord names
        assert!(matches!(
            project_chord("C", "Dorian"),
            Err(TheoryError::UnknownQuality { kind: QualityKind::Chord, .. })
        ));
    }

    #[test]
    fn test_project_tolerates_malformed_offsets() {
        let notes = project(Note::C, &[0i32, 12, -1, 4, 4, 26]);
        assert_eq!(notes, vec![Note::C, Note::C, Note::B, Note::E, Note::E, Note::D]);
        assert!(project::<u8>(Note::A, &[]).is_empty());
    }

    #[test]
    fn test_project_extreme_offsets() {
        let notes = project(Note::B, &[i32::MAX, i32::MIN, i32::MAX - 4]);
        assert_eq!(notes, vec![Note::FSharp, Note::DSharp, Note::D]);
    }

    #[test]
    fn test_note_set_intervals() {
        let set = NoteSet::scale("C", "Major").unwrap();
        assert_eq!(set.intervals, ["P1", "M2", "M3", "P4", "P5", "M6", "M7"]);
        assert_eq!(set.kind, QualityKind::Scale);
        assert_eq!(set.title(), "C Major");

        let set = NoteSet::chord("B", "Diminished 7").unwrap();
        assert_eq!(set.intervals, ["P1", "m3", "TT", "M6"]);
        assert!(set.contains(Note::GSharp));
        assert!(!set.contains(Note::C));
    }

    #[test]
    fn test_interval_name_wraps() {
        assert_eq!(interval_name(7), "P5");
        assert_eq!(interval_name(19), "P5");
        assert_eq!(interval_name(-1), "M7");
    }
}
