//! The 12 chromatic pitch classes (sharps only)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};

/// A pitch class in canonical chromatic order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Note {
    C,
    #[serde(rename = "C#")]
    CSharp,
    D,
    #[serde(rename = "D#")]
    DSharp,
    E,
    F,
    #[serde(rename = "F#")]
    FSharp,
    G,
    #[serde(rename = "G#")]
    GSharp,
    A,
    #[serde(rename = "A#")]
    ASharp,
    B,
}

impl Note {
    /// All pitch classes, indexed by pitch-class number
    pub const ALL: [Note; 12] = [
        Self::C, Self::CSharp, Self::D, Self::DSharp, Self::E, Self::F,
        Self::FSharp, Self::G, Self::GSharp, Self::A, Self::ASharp, Self::B,
    ];

    /// Pitch-class number (0..=11)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Note for any integer, reduced modulo 12 (negative values wrap downward)
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(12) as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::CSharp => "C#",
            Self::D => "D",
            Self::DSharp => "D#",
            Self::E => "E",
            Self::F => "F",
            Self::FSharp => "F#",
            Self::G => "G",
            Self::GSharp => "G#",
            Self::A => "A",
            Self::ASharp => "A#",
            Self::B => "B",
        }
    }

    /// Raise by `semitones`, wrapping around the octave
    pub fn transpose(self, semitones: i32) -> Self {
        Self::from_index(self.index() as i32 + semitones.rem_euclid(12))
    }

    pub fn is_black_key(self) -> bool {
        matches!(
            self,
            Self::CSharp | Self::DSharp | Self::FSharp | Self::GSharp | Self::ASharp
        )
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|note| note.name() == s)
            .ok_or_else(|| TheoryError::InvalidNote(s.to_string()))
    }
}

/// Pitch-class number for a canonical note name
///
/// # Example
/// ```
/// use harmonia_core::note_to_index;
/// assert_eq!(note_to_index("F#").unwrap(), 6);
/// assert!(note_to_index("Gb").is_err());
/// ```
pub fn note_to_index(name: &str) -> Result<u8> {
    name.parse::<Note>().map(Note::index)
}

/// Note for a pitch-class number; never fails, wraps modulo 12
///
/// # Example
/// ```
/// use harmonia_core::{index_to_note, Note};
/// assert_eq!(index_to_note(-1), Note::B);
/// assert_eq!(index_to_note(12), Note::C);
/// ```
pub fn index_to_note(index: i32) -> Note {
    Note::from_index(index)
}
