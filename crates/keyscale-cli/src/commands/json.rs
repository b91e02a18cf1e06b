//! Json command implementation
//!
//! Emits every keyed scale as machine-readable JSON.

use anyhow::Result;
use std::process::ExitCode;

use keyscale_core::keyed_scales;

use crate::input::{load_table, write_output};

/// Run the json command
///
/// # Arguments
/// * `input` - Path to the tab-delimited scale definition file
/// * `output` - Output file path, or `None` for stdout
/// * `pretty` - Whether to pretty-print the output JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, output: Option<&str>, pretty: bool) -> Result<ExitCode> {
    let table = load_table(input)?;
    let keyed = keyed_scales(&table)?;
    let mut json = if pretty {
        serde_json::to_string_pretty(&keyed)?
    } else {
        serde_json::to_string(&keyed)?
    };
    json.push('\n');
    write_output(output, &json)?;
    Ok(ExitCode::SUCCESS)
}
