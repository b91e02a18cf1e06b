//! Keyscale CLI library.
//!
//! This crate provides the command implementations behind the `keyscale`
//! binary: rendering the HTML fragment stream, exporting the CSV summary
//! table or JSON, and validating scale definition files.

pub mod cli_args;
pub mod commands;
pub mod input;
