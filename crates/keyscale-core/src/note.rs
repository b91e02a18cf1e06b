//! Pitch-class names and enharmonic respelling.
//!
//! Note names come from two fixed palettes: the sharp-preferred names used
//! everywhere by default, and the flat respellings of the five black keys.
//! White keys have only one spelling.

use crate::degree::ToneOffset;

#[cfg(test)]
mod tests;

/// Sharp-preferred pitch-class names, indexed by semitone above C.
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat respellings for the five black keys.
const FLAT_NAMES: [(&str, &str); 5] = [
    ("C#", "Db"),
    ("D#", "Eb"),
    ("F#", "Gb"),
    ("G#", "Ab"),
    ("A#", "Bb"),
];

/// Resolves a tone offset to its sharp-preferred pitch-class name.
///
/// Offsets outside one octave wrap in both directions, so `pitch_class` is
/// invariant under octave shifts.
pub fn pitch_class(tone: ToneOffset) -> &'static str {
    SHARP_NAMES[tone.semitone_index()]
}

/// Respells a sharp-spelled black key with its flat equivalent.
///
/// Every other name, white keys and already-flat names included, passes
/// through unchanged, which makes the respelling idempotent.
pub fn using_flats(name: &'static str) -> &'static str {
    FLAT_NAMES
        .iter()
        .find(|(sharp, _)| *sharp == name)
        .map_or(name, |&(_, flat)| flat)
}

/// Applies [`using_flats`] element-wise over a note sequence.
pub fn flatten_all(notes: &[&'static str]) -> Vec<&'static str> {
    notes.iter().map(|&note| using_flats(note)).collect()
}
