//! Keyscale CLI - keyed-scale tables from tab-delimited scale definitions
//!
//! This binary provides commands for rendering, exporting, and validating
//! scale definition files.

use clap::Parser;
use std::process::ExitCode;

// Use modules from the library crate
use keyscale_cli::cli_args::{Cli, Commands};
use keyscale_cli::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render { input, output } => commands::render::run(&input, output.as_deref()),
        Commands::Csv { input, output } => commands::csv::run(&input, output.as_deref()),
        Commands::Json {
            input,
            output,
            pretty,
        } => commands::json::run(&input, output.as_deref(), pretty),
        Commands::Validate { input } => commands::validate::run(&input),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
