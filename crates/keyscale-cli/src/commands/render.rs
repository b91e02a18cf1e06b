//! Render command implementation
//!
//! Expands every scale into all 12 tonics and streams one HTML `<div>`
//! fragment per keyed scale, preceded by the CSV header line.

use anyhow::Result;
use std::process::ExitCode;

use keyscale_core::{csv_header, html_fragment, keyed_scales, ScaleTable};

use crate::input::{load_table, write_output};

/// Run the render command
///
/// # Arguments
/// * `input` - Path to the tab-delimited scale definition file
/// * `output` - Output file path, or `None` for stdout
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, output: Option<&str>) -> Result<ExitCode> {
    let table = load_table(input)?;
    write_output(output, &render_stream(&table)?)?;
    Ok(ExitCode::SUCCESS)
}

/// Build the full output stream: CSV header, then one fragment per line in
/// emission order (scales by name, tonics 0..12, flat twins right after
/// their sharp instances).
pub fn render_stream(table: &ScaleTable) -> Result<String> {
    let mut out = String::new();
    out.push_str(&csv_header());
    out.push('\n');
    for keyed in keyed_scales(table)? {
        out.push_str(&html_fragment(&keyed));
        out.push('\n');
    }
    Ok(out)
}
