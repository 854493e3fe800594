//! Circle of fifths ordering

use crate::note::Note;

/// Clockwise from C at the top. Kept as literal data, independent of the
/// chromatic order in [`Note::ALL`].
pub const CIRCLE_OF_FIFTHS: [Note; 12] = [
    Note::C,
    Note::G,
    Note::D,
    Note::A,
    Note::E,
    Note::B,
    Note::FSharp,
    Note::CSharp,
    Note::GSharp,
    Note::DSharp,
    Note::ASharp,
    Note::F,
];

/// Clockwise slot of `note` on the circle (0 = top)
pub fn fifths_position(note: Note) -> usize {
    CIRCLE_OF_FIFTHS
        .iter()
        .position(|&n| n == note)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_is_a_permutation() {
        let mut seen = CIRCLE_OF_FIFTHS.to_vec();
        seen.sort();
        assert_eq!(seen, Note::ALL.to_vec());
    }

    #[test]
    fn test_adjacent_slots_are_a_fifth_apart() {
        for i in 0..12 {
            let a = CIRCLE_OF_FIFTHS[i];
            let b = CIRCLE_OF_FIFTHS[(i + 1) % 12];
            assert_eq!(a.transpose(7), b, "{a} -> {b}");
        }
    }

    #[test]
    fn test_positions() {
        assert_eq!(fifths_position(Note::C), 0);
        assert_eq!(fifths_position(Note::FSharp), 6);
        assert_eq!(fifths_position(Note::F), 11);
    }
}
