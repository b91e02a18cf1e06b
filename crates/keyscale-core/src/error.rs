//! Error types for scale parsing and degree interpretation.

use thiserror::Error;

/// Errors that can occur while parsing scale definitions.
///
/// Every variant is fatal: the pipeline aborts on the first failure and
/// carries the offending input fragment in the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    /// A qualifying input line had fewer than two tab-separated fields.
    #[error("malformed record at line {line_number}: expected at least 2 tab-separated fields in {line:?}")]
    MalformedRecord {
        /// 1-based line number in the original input.
        line_number: usize,
        /// The offending line, verbatim.
        line: String,
    },

    /// A degree token carried an accidental symbol outside the known set.
    #[error("unrecognized accidental symbol {symbol:?} in degree token")]
    UnrecognizedAccidental {
        /// The token's non-digit remainder that failed to match.
        symbol: String,
    },

    /// A degree token named a scale degree outside `1`..`8`.
    #[error("unrecognized scale degree {digits:?} in degree token")]
    UnrecognizedDegree {
        /// The token's digit remainder that failed to match.
        digits: String,
    },
}

impl ScaleError {
    /// Returns the stable diagnostic code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            ScaleError::MalformedRecord { .. } => "SCALE_001",
            ScaleError::UnrecognizedAccidental { .. } => "SCALE_002",
            ScaleError::UnrecognizedDegree { .. } => "SCALE_003",
        }
    }
}
