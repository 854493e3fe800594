//! harmonia-core: Pitch-class engine for the Harmonia theory reference

mod circle;
mod error;
pub mod library;
mod note;
pub mod projection;

pub use circle::{fifths_position, CIRCLE_OF_FIFTHS};
pub use error::{QualityKind, Result, TheoryError};
pub use library::{list_chord_qualities, list_scale_qualities, ChordQuality, Quality, ScaleQuality};
pub use note::{index_to_note, note_to_index, Note};
pub use projection::{interval_name, project, project_chord, project_scale, NoteSet};
