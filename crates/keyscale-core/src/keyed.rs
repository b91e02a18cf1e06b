//! Keyed scales: a scale realized in one concrete tonic.
//!
//! The generator walks the scale table in name order, transposes each
//! scale's tone offsets into all 12 chromatic tonics, and resolves the
//! result to sharp-spelled note names. Whenever a spelling comes out with
//! sharps, a flat-spelled enharmonic twin is emitted right after it for
//! contexts preferring flat notation.

use serde::Serialize;

use crate::degree::{degree_to_tones, ToneOffset};
use crate::error::ScaleError;
use crate::note::{flatten_all, pitch_class, using_flats, SHARP_NAMES};
use crate::parse::ScaleTable;

#[cfg(test)]
mod tests;

/// A scale expressed in one specific tonic, as concrete note names.
///
/// Spelling is consistent per instance: [`KeyedScale::new`] builds a
/// sharp-preferred instance and [`KeyedScale::with_flats`] its
/// flat-preferred twin. Mixed spelling within one instance never occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyedScale {
    /// Scale name as it appeared in the table.
    pub scale: String,
    /// Pitch-class name of the tonic.
    pub tonic: &'static str,
    /// One note name per formula degree, in degree order.
    pub notes: Vec<&'static str>,
}

impl KeyedScale {
    /// Realizes a scale at tonic position `p` (semitones above C, `0..12`),
    /// sharp-spelled.
    ///
    /// Every tone offset is shifted by the tonic's offset and reduced to a
    /// pitch class, so `notes.len()` always equals `tones.len()`.
    pub fn new(scale: impl Into<String>, tonic_position: usize, tones: &[ToneOffset]) -> Self {
        let tonic_offset = ToneOffset::from_quarters(tonic_position as i32 * 2);
        let notes = tones
            .iter()
            .map(|&tone| pitch_class(tone + tonic_offset))
            .collect();
        KeyedScale {
            scale: scale.into(),
            tonic: SHARP_NAMES[tonic_position],
            notes,
        }
    }

    /// True when the tonic or any note is sharp-spelled.
    pub fn has_sharps(&self) -> bool {
        self.tonic.contains('#') || self.notes.iter().any(|note| note.contains('#'))
    }

    /// True when the tonic or any note is flat-spelled.
    pub fn has_flats(&self) -> bool {
        self.tonic.contains('b') || self.notes.iter().any(|note| note.contains('b'))
    }

    /// The enharmonic twin: same scale, same pitches, flat-preferred
    /// spelling.
    pub fn with_flats(&self) -> KeyedScale {
        KeyedScale {
            scale: self.scale.clone(),
            tonic: using_flats(self.tonic),
            notes: flatten_all(&self.notes),
        }
    }
}

/// Expands a scale table into keyed scales in emission order.
///
/// Order is scale names ascending, then tonic positions 0..12 ascending,
/// each sharp-spelled instance followed immediately by its flat twin when
/// the spelling produced sharps. Combinations that come out without sharps
/// get no twin; the respelling only ever runs sharp-to-flat.
///
/// # Errors
/// The first formula token that fails to parse aborts the expansion.
pub fn keyed_scales(table: &ScaleTable) -> Result<Vec<KeyedScale>, ScaleError> {
    let mut out = Vec::new();
    for (scale, formula) in table {
        let tones = degree_to_tones(formula)?;
        for position in 0..SHARP_NAMES.len() {
            let keyed = KeyedScale::new(scale.clone(), position, &tones);
            let twin = keyed.has_sharps().then(|| keyed.with_flats());
            out.push(keyed);
            out.extend(twin);
        }
    }
    Ok(out)
}
