//! Tests for pitch-class resolution and enharmonic respelling.

use pretty_assertions::assert_eq;

use super::*;
use crate::degree::ToneOffset;

#[test]
fn whole_semitones_walk_the_sharp_palette() {
    for (semitone, expected) in SHARP_NAMES.iter().enumerate() {
        let tone = ToneOffset::from_quarters(semitone as i32 * 2);
        assert_eq!(pitch_class(tone), *expected);
    }
}

#[test]
fn quarter_tones_floor_to_the_semitone_below() {
    // 2.25 tones (9 quarters) floors to 4 semitones: E, not F.
    assert_eq!(pitch_class(ToneOffset::from_quarters(9)), "E");
    // A quarter tone below the root floors to the semitone below it.
    assert_eq!(pitch_class(ToneOffset::from_quarters(-1)), "B");
    // A quarter tone below the fifth floors to the fourth's sharp.
    assert_eq!(pitch_class(ToneOffset::from_quarters(13)), "F#");
}

#[test]
fn octave_shifts_leave_the_pitch_class_unchanged() {
    for quarters in -30..=30 {
        let tone = ToneOffset::from_quarters(quarters);
        assert_eq!(pitch_class(tone), pitch_class(tone + ToneOffset::OCTAVE));
        assert_eq!(
            pitch_class(tone + ToneOffset::OCTAVE),
            pitch_class(tone + ToneOffset::OCTAVE + ToneOffset::OCTAVE)
        );
    }
}

#[test]
fn offsets_below_the_root_wrap_to_the_top_of_the_octave() {
    // One semitone below the root is index 11, not -1.
    assert_eq!(pitch_class(ToneOffset::from_quarters(-2)), "B");
    assert_eq!(pitch_class(ToneOffset::from_quarters(-4)), "A#");
}

#[test]
fn fractional_offsets_below_the_root_match_their_octave_shift() {
    // Odd quarter counts below the root (reachable from tokens like +b1)
    // must resolve like the same pitch an octave up.
    for quarters in [-1, -3, -5] {
        let below = ToneOffset::from_quarters(quarters);
        assert_eq!(
            pitch_class(below),
            pitch_class(below + ToneOffset::OCTAVE),
            "{quarters} quarters"
        );
    }
    assert_eq!(pitch_class(ToneOffset::from_quarters(-5)), "A");
    assert_eq!(pitch_class(ToneOffset::from_quarters(19)), "A");
}

#[test]
fn only_black_keys_are_respelled() {
    assert_eq!(using_flats("C#"), "Db");
    assert_eq!(using_flats("D#"), "Eb");
    assert_eq!(using_flats("F#"), "Gb");
    assert_eq!(using_flats("G#"), "Ab");
    assert_eq!(using_flats("A#"), "Bb");
    assert_eq!(using_flats("C"), "C");
    assert_eq!(using_flats("E"), "E");
    assert_eq!(using_flats("B"), "B");
}

#[test]
fn respelling_is_idempotent() {
    for name in SHARP_NAMES {
        assert_eq!(using_flats(using_flats(name)), using_flats(name));
    }
}

#[test]
fn flatten_all_respells_element_wise() {
    let notes = ["C#", "D#", "F", "F#", "G#", "A#", "C"];
    assert_eq!(
        flatten_all(&notes),
        ["Db", "Eb", "F", "Gb", "Ab", "Bb", "C"]
    );
}
