//! Core library entry for the `smaudit` CLI.
//!
//! `smaudit` audits a gathered page snapshot for source-map health: every
//! script's map is classified, large scripts with no working map fail the
//! audit, and the result is rendered as a sorted table.

pub mod adapters;
pub mod artifacts;
pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod ports;
pub mod report;

use clap::Parser;

pub use error::{Error, Result};

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> std::result::Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
