//! Degree-token interpretation: formula tokens to tone offsets.
//!
//! A degree formula is a space-separated list of tokens such as
//! `1 2 b3 4 5 6 b7`. Each token names a scale degree (`1`..`8`) with an
//! optional accidental modifier. This module parses tokens into a tagged
//! [`DegreeToken`] and evaluates them to exact [`ToneOffset`] values.

use crate::error::ScaleError;


/// Offset above the scale root, counted in quarter-tone steps.
///
/// Degree formulas only ever produce multiples of a quarter tone, so the
/// offset is stored exactly as an integer: 1 tone (whole step) = 4 quarters,
/// 1 semitone = 2 quarters. Degree 1 sits at 0 and degree 8 (the octave) at
/// 24 quarters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToneOffset(i32);

impl ToneOffset {
    /// One full octave (12 semitones).
    pub const OCTAVE: ToneOffset = ToneOffset(24);

    /// Builds an offset from quarter-tone steps.
    pub const fn from_quarters(quarters: i32) -> Self {
        ToneOffset(quarters)
    }

    /// Quarter-tone steps above the root.
    pub const fn quarters(self) -> i32 {
        self.0
    }

    /// Reduces the offset to a pitch-class index in `0..12`.
    ///
    /// Fractional semitones floor to the semitone below, and offsets
    /// outside one octave wrap in both directions: an offset one semitone
    /// below the root resolves to index 11, not -1. Flooring (rather than
    /// truncating toward zero) keeps the reduction invariant under octave
    /// shifts for quarter-tone offsets below the root.
    pub const fn semitone_index(self) -> usize {
        self.0.div_euclid(2).rem_euclid(12) as usize
    }
}

impl std::ops::Add for ToneOffset {
    type Output = ToneOffset;

    fn add(self, rhs: ToneOffset) -> ToneOffset {
        ToneOffset(self.0 + rhs.0)
    }
}

/// Accidental modifier attached to a degree token.
///
/// Beyond the common `#`/`b` semitone modifiers the formula language carries
/// quarter-tone accidentals written with a `-` (quarter) or `+` (three
/// quarter) prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accidental {
    /// Bare degree, no modifier.
    Natural,
    /// `#`: one semitone up.
    Sharp,
    /// `b`: one semitone down.
    Flat,
    /// `n`: explicit natural sign, no adjustment.
    NaturalSign,
    /// `-#`: one quarter tone up.
    QuarterSharp,
    /// `+#`: three quarter tones up.
    ThreeQuarterSharp,
    /// `-b`: one quarter tone down.
    QuarterFlat,
    /// `+b`: three quarter tones down.
    ThreeQuarterFlat,
}

impl Accidental {
    /// Parses the non-digit remainder of a degree token.
    ///
    /// # Errors
    /// [`ScaleError::UnrecognizedAccidental`] carrying the offending symbol
    /// string when it is not one of the eight known forms.
    pub fn from_symbol(symbol: &str) -> Result<Self, ScaleError> {
        match symbol {
            "" => Ok(Accidental::Natural),
            "#" => Ok(Accidental::Sharp),
            "b" => Ok(Accidental::Flat),
            "n" => Ok(Accidental::NaturalSign),
            "-#" => Ok(Accidental::QuarterSharp),
            "+#" => Ok(Accidental::ThreeQuarterSharp),
            "-b" => Ok(Accidental::QuarterFlat),
            "+b" => Ok(Accidental::ThreeQuarterFlat),
            other => Err(ScaleError::UnrecognizedAccidental {
                symbol: other.to_string(),
            }),
        }
    }

    /// Adjustment in quarter-tone steps.
    pub const fn quarters(self) -> i32 {
        match self {
            Accidental::Natural | Accidental::NaturalSign => 0,
            Accidental::Sharp => 2,
            Accidental::Flat => -2,
            Accidental::QuarterSharp => 1,
            Accidental::ThreeQuarterSharp => 3,
            Accidental::QuarterFlat => -1,
            Accidental::ThreeQuarterFlat => -3,
        }
    }
}

/// A scale degree, `1` through `8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Degree(u8);

impl Degree {
    /// Parses the digit remainder of a degree token.
    ///
    /// # Errors
    /// [`ScaleError::UnrecognizedDegree`] carrying the offending digit
    /// string when it is not `1`..`8`.
    pub fn from_digits(digits: &str) -> Result<Self, ScaleError> {
        match digits {
            "1" => Ok(Degree(1)),
            "2" => Ok(Degree(2)),
            "3" => Ok(Degree(3)),
            "4" => Ok(Degree(4)),
            "5" => Ok(Degree(5)),
            "6" => Ok(Degree(6)),
            "7" => Ok(Degree(7)),
            "8" => Ok(Degree(8)),
            other => Err(ScaleError::UnrecognizedDegree {
                digits: other.to_string(),
            }),
        }
    }

    /// Degree number, `1`..=`8`.
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Unmodified offset of this degree above the root.
    ///
    /// Major-scale spacing: whole steps everywhere except the half steps
    /// from 3 to 4 and from 7 to 8.
    pub fn base_tone(self) -> ToneOffset {
        let quarters = match self.0 {
            1 => 0,
            2 => 4,
            3 => 8,
            4 => 10,
            5 => 14,
            6 => 18,
            7 => 22,
            8 => 24,
            _ => unreachable!("degree is validated by from_digits"),
        };
        ToneOffset::from_quarters(quarters)
    }
}

/// A single parsed token of a degree formula, e.g. `b3` or `-#4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeToken {
    /// The scale degree named by the token's digits.
    pub degree: Degree,
    /// The modifier named by the token's remaining characters.
    pub accidental: Accidental,
}

impl DegreeToken {
    /// Parses one space-free formula token.
    ///
    /// The token's digits form the degree and every other character, in
    /// order, forms the accidental symbol; the two parts may interleave
    /// (`#4` and `4#` read the same). The accidental is checked first, so a
    /// token like `x3` reports the unknown symbol `x` rather than a degree
    /// problem.
    ///
    /// # Errors
    /// [`ScaleError::UnrecognizedAccidental`] or
    /// [`ScaleError::UnrecognizedDegree`] naming the offending fragment.
    pub fn parse(token: &str) -> Result<Self, ScaleError> {
        let (digits, symbol): (String, String) =
            token.chars().partition(|c| c.is_ascii_digit());
        let accidental = Accidental::from_symbol(&symbol)?;
        let degree = Degree::from_digits(&digits)?;
        Ok(DegreeToken { degree, accidental })
    }

    /// Offset above the root once the accidental is applied.
    pub fn tone_offset(self) -> ToneOffset {
        ToneOffset::from_quarters(self.degree.base_tone().quarters() + self.accidental.quarters())
    }
}

/// Evaluates a whole degree formula to its ordered tone-offset sequence.
///
/// Tokens are separated by spaces; runs of whitespace produce no empty
/// tokens. Order is preserved, one offset per token.
///
/// # Errors
/// The first token that fails to parse aborts the evaluation.
pub fn degree_to_tones(formula: &str) -> Result<Vec<ToneOffset>, ScaleError> {
    formula
        .split_whitespace()
        .map(|token| DegreeToken::parse(token).map(DegreeToken::tone_offset))
        .collect()
}
