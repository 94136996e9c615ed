//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ConfigOverrides;

/// Top-level CLI parser for `smaudit`.
#[derive(Debug, Parser)]
#[command(name = "smaudit", version, about = "Audit source map health of a page snapshot")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the audit over a snapshot file.
    Check {
        /// Path to the snapshot JSON (`Scripts` and `SourceMaps` arrays).
        snapshot: PathBuf,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
        /// Config overrides.
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Describe the audit, its table columns, and the effective threshold.
    Explain {
        /// Config overrides.
        #[command(flatten)]
        config: ConfigArgs,
    },
}

/// Flags shared by commands that resolve an audit config.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// YAML config file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Minimum script size, in characters, that requires a source map.
    #[arg(long, value_name = "CHARS")]
    pub threshold: Option<usize>,
}

impl ConfigArgs {
    /// Converts the flags into config overrides.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides { config_path: self.config.clone(), threshold: self.threshold }
    }
}
