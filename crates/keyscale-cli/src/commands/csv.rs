//! Csv command implementation
//!
//! Emits the keyed-scale summary table: the fixed header plus one CSV row
//! per keyed scale, in the same emission order as the render command.

use anyhow::Result;
use std::process::ExitCode;

use keyscale_core::{csv_header, csv_row, keyed_scales, ScaleTable};

use crate::input::{load_table, write_output};

/// Run the csv command
///
/// # Arguments
/// * `input` - Path to the tab-delimited scale definition file
/// * `output` - Output file path, or `None` for stdout
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, output: Option<&str>) -> Result<ExitCode> {
    let table = load_table(input)?;
    write_output(output, &csv_stream(&table)?)?;
    Ok(ExitCode::SUCCESS)
}

/// Build the CSV table as one string, header first.
pub fn csv_stream(table: &ScaleTable) -> Result<String> {
    let mut out = String::new();
    out.push_str(&csv_header());
    out.push('\n');
    for keyed in keyed_scales(table)? {
        out.push_str(&csv_row(&keyed));
        out.push('\n');
    }
    Ok(out)
}
