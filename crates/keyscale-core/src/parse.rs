//! Tab-delimited scale-definition parsing.
//!
//! Input files mix headers, blank lines, and free-form notes with the rows
//! that actually define scales. A defining row has the scale name in its
//! first tab-separated field and a degree formula starting at degree 1 in
//! its second, so the literal `\t1 ` marker is what qualifies a line for
//! processing. Rows with an empty name column are variants of the previous
//! scale and inherit its name with a `(2)` suffix.

use std::collections::BTreeMap;

use crate::error::ScaleError;


/// Marker identifying a line that starts a degree formula at degree 1.
const FORMULA_MARKER: &str = "\t1 ";

/// Suffix appended to a carried-forward name for an unnamed variant row.
const VARIANT_SUFFIX: &str = "(2)";

/// Scale name to degree formula, ordered by name.
///
/// The name ordering is what the driver emits in; duplicate names collapse
/// last-wins when the table is built.
pub type ScaleTable = BTreeMap<String, String>;

/// One degree-formula row with its effective scale name filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeRecord {
    /// Effective scale name (never empty after bulk-fill).
    pub name: String,
    /// Space-separated degree formula, verbatim from the input.
    pub formula: String,
}

/// Splits a qualifying line into its name and formula fields.
fn split_record(line: &str, line_number: usize) -> Result<(&str, &str), ScaleError> {
    let mut fields = line.split('\t');
    match (fields.next(), fields.next()) {
        (Some(name), Some(formula)) => Ok((name, formula)),
        _ => Err(ScaleError::MalformedRecord {
            line_number,
            line: line.to_string(),
        }),
    }
}

/// Extracts degree-formula records from raw input text.
///
/// Lines are split universally (LF, CRLF, or CR+LF all work) and only those
/// containing the `\t1 ` marker are kept. Bulk-fill runs as a left-to-right
/// scan carrying the previous effective name: an empty name column becomes
/// the previous name plus `(2)`. The output has exactly one record per kept
/// line, in file order.
///
/// # Errors
/// [`ScaleError::MalformedRecord`] when a qualifying line has fewer than
/// two tab-separated fields.
pub fn parse_records(input: &str) -> Result<Vec<DegreeRecord>, ScaleError> {
    let mut records = Vec::new();
    let mut previous_name = String::new();

    for (index, line) in input.lines().enumerate() {
        if !line.contains(FORMULA_MARKER) {
            continue;
        }
        let (name, formula) = split_record(line, index + 1)?;
        let effective = if name.is_empty() {
            format!("{previous_name}{VARIANT_SUFFIX}")
        } else {
            name.to_string()
        };
        previous_name.clone_from(&effective);
        records.push(DegreeRecord {
            name: effective,
            formula: formula.to_string(),
        });
    }

    Ok(records)
}

/// Collapses records into a scale table, last duplicate winning.
pub fn scale_table(records: Vec<DegreeRecord>) -> ScaleTable {
    records
        .into_iter()
        .map(|record| (record.name, record.formula))
        .collect()
}

/// Parses raw input text straight into a scale table.
///
/// # Errors
/// Propagates [`parse_records`] failures.
pub fn load_scale_table(input: &str) -> Result<ScaleTable, ScaleError> {
    Ok(scale_table(parse_records(input)?))
}
