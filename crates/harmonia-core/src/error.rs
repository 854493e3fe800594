//! Error types for the pitch-class engine

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which pattern table a quality name is looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityKind {
    Scale,
    Chord,
}

impl fmt::Display for QualityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scale => f.write_str("scale"),
            Self::Chord => f.write_str("chord"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("Invalid note name: {0:?}")]
    InvalidNote(String),
    #[error("Unknown {kind} quality: {name:?}")]
    UnknownQuality { kind: QualityKind, name: String },
}

pub type Result<T> = std::result::Result<T, TheoryError>;
