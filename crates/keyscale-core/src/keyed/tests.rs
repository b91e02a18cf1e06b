//! Tests for keyed-scale generation and enharmonic twinning.

use pretty_assertions::assert_eq;

use super::*;
use crate::degree::degree_to_tones;
use crate::parse::load_scale_table;

const MAJOR: &str = "1 2 3 4 5 6 7";

#[test]
fn major_scale_in_c_is_all_naturals() {
    let tones = degree_to_tones(MAJOR).unwrap();
    let keyed = KeyedScale::new("Major", 0, &tones);
    assert_eq!(keyed.tonic, "C");
    assert_eq!(keyed.notes, ["C", "D", "E", "F", "G", "A", "B"]);
    assert!(!keyed.has_sharps());
    assert!(!keyed.has_flats());
}

#[test]
fn major_scale_in_c_sharp_spells_with_sharps() {
    let tones = degree_to_tones(MAJOR).unwrap();
    let keyed = KeyedScale::new("Major", 1, &tones);
    assert_eq!(keyed.tonic, "C#");
    // Degree 4 (an exact 2.5 tones) lands on F with no accidental.
    assert_eq!(keyed.notes, ["C#", "D#", "F", "F#", "G#", "A#", "C"]);
    assert!(keyed.has_sharps());
    assert!(!keyed.has_flats());
}

#[test]
fn flat_twin_respells_tonic_and_notes() {
    let tones = degree_to_tones(MAJOR).unwrap();
    let twin = KeyedScale::new("Major", 1, &tones).with_flats();
    assert_eq!(twin.tonic, "Db");
    assert_eq!(twin.notes, ["Db", "Eb", "F", "Gb", "Ab", "Bb", "C"]);
    assert_eq!(twin.scale, "Major");
    assert!(!twin.has_sharps());
    assert!(twin.has_flats());
}

#[test]
fn note_count_matches_formula_for_every_tonic() {
    let tones = degree_to_tones("1 2 b3 4 5 b6 b7").unwrap();
    for position in 0..12 {
        let keyed = KeyedScale::new("Minor", position, &tones);
        assert_eq!(keyed.notes.len(), tones.len(), "tonic position {position}");
    }
}

#[test]
fn expansion_emits_the_flat_twin_right_after_its_sharp_instance() {
    let table = load_scale_table("Major\t1 2 3 4 5 6 7\n").unwrap();
    let keyed = keyed_scales(&table).unwrap();

    // C major has no sharps, so the next instance is already the next tonic.
    assert_eq!(keyed[0].tonic, "C");
    assert_eq!(keyed[1].tonic, "C#");
    assert_eq!(keyed[2].tonic, "Db");
    assert_eq!(keyed[2].notes, keyed[1].with_flats().notes);
}

#[test]
fn sharp_free_combinations_get_no_twin() {
    // Of the 12 major tonics only C comes out sharp-free, so the expansion
    // holds 11 twins on top of the 12 sharp-spelled instances.
    let table = load_scale_table("Major\t1 2 3 4 5 6 7\n").unwrap();
    let keyed = keyed_scales(&table).unwrap();
    assert_eq!(keyed.len(), 23);
    assert_eq!(keyed.iter().filter(|k| k.has_flats()).count(), 11);
}

#[test]
fn scales_expand_in_name_order() {
    let table =
        load_scale_table("Minor\t1 2 b3 4 5 b6 b7\nMajor\t1 2 3 4 5 6 7\n").unwrap();
    let keyed = keyed_scales(&table).unwrap();
    assert_eq!(keyed[0].scale, "Major");
    assert_eq!(keyed.last().unwrap().scale, "Minor");
    // The natural-minor scale on A is all white keys and gets no twin.
    assert!(keyed
        .iter()
        .any(|k| k.scale == "Minor" && k.tonic == "A" && !k.has_sharps()));
}

#[test]
fn bad_formula_aborts_the_expansion() {
    let table = load_scale_table("Broken\t1 2 x3\n").unwrap();
    let err = keyed_scales(&table).unwrap_err();
    assert_eq!(err.code(), "SCALE_002");
}

#[test]
fn keyed_scale_serializes_to_json() {
    let tones = degree_to_tones(MAJOR).unwrap();
    let keyed = KeyedScale::new("Major", 0, &tones);
    let json = serde_json::to_value(&keyed).unwrap();
    assert_eq!(json["scale"], "Major");
    assert_eq!(json["tonic"], "C");
    assert_eq!(json["notes"][6], "B");
}
