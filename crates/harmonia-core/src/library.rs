//! Named interval patterns for scales and chords

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{QualityKind, Result, TheoryError};
use crate::note::Note;
use crate::projection::project;

/// A named interval pattern drawn from one of the fixed tables
pub trait Quality: Copy + Sized + 'static {
    const KIND: QualityKind;

    /// Every quality, in table order
    const ALL: &'static [Self];

    fn name(&self) -> &'static str;

    /// Semitone offsets from the root
    fn intervals(&self) -> &'static [u8];

    fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|q| q.name() == name)
            .ok_or_else(|| TheoryError::UnknownQuality {
                kind: Self::KIND,
                name: name.to_string(),
            })
    }

    /// Concrete notes of this quality built on `root`
    fn notes(&self, root: Note) -> Vec<Note> {
        project(root, self.intervals())
    }
}

// ============================================================================
// Scales
// ============================================================================

/// Scale/mode types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleQuality {
    Major,
    Minor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Locrian,
    #[serde(rename = "Pentatonic Major")]
    PentatonicMajor,
    #[serde(rename = "Pentatonic Minor")]
    PentatonicMinor,
}

impl Quality for ScaleQuality {
    const KIND: QualityKind = QualityKind::Scale;

    // Traditional modes first, then pentatonics
    const ALL: &'static [Self] = &[
        Self::Major,
        Self::Minor,
        Self::Dorian,
        Self::Phrygian,
        Self::Lydian,
        Self::Mixolydian,
        Self::Locrian,
        Self::PentatonicMajor,
        Self::PentatonicMinor,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::Minor => "Minor",
            Self::Dorian => "Dorian",
            Self::Phrygian => "Phrygian",
            Self::Lydian => "Lydian",
            Self::Mixolydian => "Mixolydian",
            Self::Locrian => "Locrian",
            Self::PentatonicMajor => "Pentatonic Major",
            Self::PentatonicMinor => "Pentatonic Minor",
        }
    }

    fn intervals(&self) -> &'static [u8] {
        match self {
            Self::Major => &[0, 2, 4, 5, 7, 9, 11],
            Self::Minor => &[0, 2, 3, 5, 7, 8, 10],
            Self::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            Self::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            Self::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            Self::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            Self::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            Self::PentatonicMajor => &[0, 2, 4, 7, 9],
            Self::PentatonicMinor => &[0, 3, 5, 7, 10],
        }
    }
}

// ============================================================================
// Chords
// ============================================================================

/// Chord quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    #[serde(rename = "Major 7")]
    Major7,
    #[serde(rename = "Minor 7")]
    Minor7,
    #[serde(rename = "Dominant 7")]
    Dominant7,
    #[serde(rename = "Diminished 7")]
    Diminished7,
}

impl Quality for ChordQuality {
    const KIND: QualityKind = QualityKind::Chord;

    // Triads first, then sevenths
    const ALL: &'static [Self] = &[
        Self::Major,
        Self::Minor,
        Self::Diminished,
        Self::Augmented,
        Self::Major7,
        Self::Minor7,
        Self::Dominant7,
        Self::Diminished7,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::Minor => "Minor",
            Self::Diminished => "Diminished",
            Self::Augmented => "Augmented",
            Self::Major7 => "Major 7",
            Self::Minor7 => "Minor 7",
            Self::Dominant7 => "Dominant 7",
            Self::Diminished7 => "Diminished 7",
        }
    }

    fn intervals(&self) -> &'static [u8] {
        match self {
            Self::Major => &[0, 4, 7],
            Self::Minor => &[0, 3, 7],
            Self::Diminished => &[0, 3, 6],
            Self::Augmented => &[0, 4, 8],
            Self::Major7 => &[0, 4, 7, 11],
            Self::Minor7 => &[0, 3, 7, 10],
            Self::Dominant7 => &[0, 4, 7, 10],
            Self::Diminished7 => &[0, 3, 6, 9],
        }
    }
}

macro_rules! impl_display_from_str {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = TheoryError;

            fn from_str(s: &str) -> Result<Self> {
                Self::from_name(s)
            }
        }
    };
}

impl_display_from_str!(ScaleQuality);
impl_display_from_str!(ChordQuality);

/// Scale quality names in table order
pub fn list_scale_qualities() -> Vec<&'static str> {
    ScaleQuality::ALL.iter().map(|q| q.name()).collect()
}

/// Chord quality names in table order
pub fn list_chord_qualities() -> Vec<&'static str> {
    ChordQuality::ALL.iter().map(|q| q.name()).collect()
}
