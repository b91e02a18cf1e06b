//! CLI argument definitions for the keyscale command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// Keyscale - Keyed-Scale Tables from Tab-Delimited Scale Definitions
#[derive(Parser)]
#[command(name = "keyscale")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render every keyed scale as an HTML fragment stream
    Render {
        /// Path to the tab-delimited scale definition file
        #[arg(short, long)]
        input: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Emit the keyed-scale summary table as CSV
    Csv {
        /// Path to the tab-delimited scale definition file
        #[arg(short, long)]
        input: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Emit every keyed scale as JSON
    Json {
        /// Path to the tab-delimited scale definition file
        #[arg(short, long)]
        input: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the output JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Validate a scale definition file without rendering
    Validate {
        /// Path to the tab-delimited scale definition file
        #[arg(short, long)]
        input: String,
    },
}
