//! Validate command implementation
//!
//! Parses a scale definition file and checks every degree formula without
//! emitting any rendered output.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use keyscale_core::{degree_to_tones, keyed_scales};

use crate::input::load_table;

/// Run the validate command
///
/// # Arguments
/// * `input` - Path to the tab-delimited scale definition file
///
/// # Returns
/// Exit code: 0 if every formula parses, 1 otherwise
pub fn run(input: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), input);
    println!(
        "{} keyscale-core {}",
        "Engine:".dimmed(),
        keyscale_core::VERSION
    );

    let table = load_table(input)?;
    for (scale, formula) in &table {
        let tones = degree_to_tones(formula)
            .with_context(|| format!("Invalid formula for scale '{}'", scale))?;
        println!("  {} {} ({} degrees)", "ok".green(), scale, tones.len());
    }

    let keyed = keyed_scales(&table)?;
    println!(
        "{} {} scales expand to {} keyed scales",
        "Valid:".green().bold(),
        table.len(),
        keyed.len()
    );
    Ok(ExitCode::SUCCESS)
}
