//! HTML and CSV rendering of keyed scales.
//!
//! Both formatters are pure: one keyed scale in, one line of output out.
//! The CSV side uses a fixed 17-column note palette covering both spellings
//! of every black key, so enharmonic equivalents never share a column.

use crate::keyed::KeyedScale;


/// Fixed CSV column palette: every pitch class under every spelling.
pub const NOTE_PALETTE: [&str; 17] = [
    "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#", "Bb", "B",
];

/// CSV header matching the columns of [`csv_row`].
pub fn csv_header() -> String {
    format!(
        "Scale,Key,Has sharps,Has flats,Num pitch classes,{}",
        NOTE_PALETTE.join(",")
    )
}

/// Renders one keyed scale as a CSV row.
///
/// Summary columns first (scale, tonic, sharp/flat flags as literal
/// `true`/`false`, note count), then one column per palette entry holding
/// the note only when the keyed scale contains it under that exact
/// spelling. No quoting; names are assumed comma-free.
pub fn csv_row(keyed: &KeyedScale) -> String {
    let mut columns = vec![
        keyed.scale.clone(),
        keyed.tonic.to_string(),
        keyed.has_sharps().to_string(),
        keyed.has_flats().to_string(),
        keyed.notes.len().to_string(),
    ];
    for palette_note in NOTE_PALETTE {
        if keyed.notes.contains(&palette_note) {
            columns.push(palette_note.to_string());
        } else {
            columns.push(String::new());
        }
    }
    columns.join(",")
}

/// CSS class form of a note name: lower-cased with every `#` spelled
/// `-sharp` and every `b` spelled `-flat`.
fn note_class(note: &str) -> String {
    note.to_lowercase().replace('#', "-sharp").replace('b', "-flat")
}

/// Renders one keyed scale as a single-`<div>` HTML fragment.
///
/// The class list carries `has-sharps`/`has-flats` when applicable plus one
/// `note-<name>` class per note; the body reads
/// `<scale> in <tonic> (<count>): <notes>`.
pub fn html_fragment(keyed: &KeyedScale) -> String {
    let mut classes = Vec::new();
    if keyed.has_sharps() {
        classes.push("has-sharps".to_string());
    }
    if keyed.has_flats() {
        classes.push("has-flats".to_string());
    }
    for note in &keyed.notes {
        classes.push(format!("note-{}", note_class(note)));
    }
    format!(
        "<div class=\"{}\">{} in {} ({}): {}</div>",
        classes.join(" "),
        keyed.scale,
        keyed.tonic,
        keyed.notes.len(),
        keyed.notes.join(" "),
    )
}
