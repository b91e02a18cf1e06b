//! Keyscale Core - Keyed-Scale Expansion of Tab-Delimited Scale Tables
//!
//! This crate turns a tab-delimited description of musical scales (named
//! scales and their scale-degree formulas) into the full table of "keyed
//! scales": every scale transposed into all 12 chromatic tonics, expressed
//! as concrete note names with sharp/flat spelling normalization.
//!
//! # Pipeline
//!
//! The whole computation is a single immutable pass:
//!
//! 1. [`parse`]: split the raw text into degree-formula records, carrying
//!    forward the previous scale name for unnamed variant rows, and collapse
//!    them into a name-ordered scale table.
//! 2. [`degree`]: interpret each space-separated formula token (`1`, `b3`,
//!    `-#4`, ...) as an exact quarter-tone offset above the root.
//! 3. [`note`]: resolve tone offsets to sharp-preferred pitch-class names,
//!    with flat respelling for the five black keys.
//! 4. [`keyed`]: transpose every scale into every tonic, producing a
//!    [`KeyedScale`] per combination plus a flat-spelled enharmonic twin
//!    whenever the sharp spelling produced sharps.
//! 5. [`render`]: format a keyed scale as an HTML fragment or a CSV row.
//!
//! # Example
//!
//! ```
//! use keyscale_core::{html_fragment, keyed_scales, load_scale_table};
//!
//! let table = load_scale_table("Major\t1 2 3 4 5 6 7\r\n")?;
//! let keyed = keyed_scales(&table)?;
//!
//! assert_eq!(keyed[0].notes, ["C", "D", "E", "F", "G", "A", "B"]);
//! println!("{}", html_fragment(&keyed[0]));
//! # Ok::<(), keyscale_core::ScaleError>(())
//! ```
//!
//! All failures are fatal and carry the offending input fragment; see
//! [`ScaleError`].

pub mod degree;
pub mod error;
pub mod keyed;
pub mod note;
pub mod parse;
pub mod render;

// Re-export the main types and entry points
pub use degree::{degree_to_tones, Accidental, Degree, DegreeToken, ToneOffset};
pub use error::ScaleError;
pub use keyed::{keyed_scales, KeyedScale};
pub use note::{flatten_all, pitch_class, using_flats, SHARP_NAMES};
pub use parse::{load_scale_table, parse_records, scale_table, DegreeRecord, ScaleTable};
pub use render::{csv_header, csv_row, html_fragment, NOTE_PALETTE};

/// Crate version for diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
