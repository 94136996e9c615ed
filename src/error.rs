//! Error types for loading snapshots and configuration.
//!
//! The audit itself never fails: per-script problems are reported as
//! diagnostic rows. Errors only arise at the edges, when reading files or
//! resolving configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the audit core.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read through the filesystem port.
    #[error("Failed to read {}: {message}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying error text.
        message: String,
    },

    /// A file was read but its contents could not be decoded.
    #[error("Failed to parse {}: {message}", .path.display())]
    Parse {
        /// Path that was being parsed.
        path: PathBuf,
        /// Decoder error text.
        message: String,
    },

    /// A configuration value was rejected.
    #[error("Configuration error: {0}")]
    Config(String),
}
