//! Input and output plumbing shared by the CLI commands.

use anyhow::{Context, Result};
use std::fs;

use keyscale_core::{load_scale_table, ScaleTable};

/// Reads a scale definition file and builds its scale table.
pub fn load_table(path: &str) -> Result<ScaleTable> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path))?;
    let table = load_scale_table(&text)
        .with_context(|| format!("Invalid scale definition in {}", path))?;
    Ok(table)
}

/// Writes rendered output to a file, or to stdout when no path was given.
pub fn write_output(output: Option<&str>, contents: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, contents)
            .with_context(|| format!("Failed to write output file: {}", path)),
        None => {
            print!("{}", contents);
            Ok(())
        }
    }
}
