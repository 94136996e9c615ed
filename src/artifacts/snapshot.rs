//! Snapshot loading: reads gathered artifacts from disk.
//!
//! A snapshot is a single JSON document with two top-level arrays:
//!
//! ```text
//! {
//!   "Scripts":    [ { "url": ..., "content": ... }, ... ],
//!   "SourceMaps": [ { "scriptUrl": ..., "sourceMapUrl": ..., "map" | "errorMessage": ... }, ... ]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{ScriptRecord, SourceMapResolution};
use crate::context::ServiceContext;
use crate::error::{Error, Result};

/// The two artifact collections the audit consumes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Snapshot {
    /// Script elements, in page order.
    #[serde(default, rename = "Scripts")]
    pub scripts: Vec<ScriptRecord>,
    /// Source map resolutions, in gathering order.
    #[serde(default, rename = "SourceMaps")]
    pub source_maps: Vec<SourceMapResolution>,
}

impl Snapshot {
    /// Parses a snapshot from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the decoder message if the document is not a valid snapshot.
    pub fn from_json(json: &str) -> std::result::Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}

/// Reads snapshots through the filesystem port.
pub struct SnapshotStore<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SnapshotStore<'a> {
    /// Creates a store backed by the context's filesystem.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Loads and parses the snapshot at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Parse`]
    /// if it is not a valid snapshot.
    pub fn load(&self, path: &Path) -> Result<Snapshot> {
        let contents = self
            .ctx
            .fs
            .read_to_string(path)
            .map_err(|e| Error::Io { path: path.to_path_buf(), message: e.to_string() })?;
        let snapshot = Snapshot::from_json(&contents)
            .map_err(|message| Error::Parse { path: path.to_path_buf(), message })?;
        debug!(
            path = %path.display(),
            scripts = snapshot.scripts.len(),
            source_maps = snapshot.source_maps.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }
}
