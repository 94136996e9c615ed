//! Gathered page artifacts consumed by the audit.
//!
//! These types mirror the snapshot written by the gathering stage. They are
//! read-only inputs: the audit never creates, mutates, or drops entries.

pub mod snapshot;

use serde::Deserialize;

pub use snapshot::{Snapshot, SnapshotStore};

/// One `<script>` element observed on the page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ScriptRecord {
    /// Script URL, or `None` for inline scripts.
    #[serde(default)]
    pub url: Option<String>,
    /// Script source text when it was captured.
    #[serde(default)]
    pub content: Option<String>,
}

impl ScriptRecord {
    /// Length of the captured content in characters, if content is present.
    #[must_use]
    pub fn content_length(&self) -> Option<usize> {
        self.content.as_ref().map(|c| c.chars().count())
    }
}

/// The subset of a parsed source map the audit looks at.
///
/// Other map fields (`version`, `mappings`, `names`, ...) are accepted and
/// discarded during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RawSourceMap {
    /// Original source paths, in map order.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Embedded original sources, meant to align index-for-index with `sources`.
    #[serde(default, rename = "sourcesContent")]
    pub sources_content: Option<Vec<Option<String>>>,
}

/// Result of trying to load and parse a script's source map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapOutcome {
    /// The map was fetched and parsed.
    Parsed(RawSourceMap),
    /// The map could not be loaded or parsed.
    Failed(String),
}

/// One attempt to associate a script with a source map.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawResolution")]
pub struct SourceMapResolution {
    /// The script this resolution concerns.
    pub script_url: String,
    /// Where the map was (or would have been) fetched from.
    pub source_map_url: Option<String>,
    /// Parsed map or load error.
    pub outcome: MapOutcome,
}

impl SourceMapResolution {
    /// Builds a resolution for a successfully parsed map.
    #[must_use]
    pub fn parsed(script_url: &str, source_map_url: Option<&str>, map: RawSourceMap) -> Self {
        Self {
            script_url: script_url.to_string(),
            source_map_url: source_map_url.map(String::from),
            outcome: MapOutcome::Parsed(map),
        }
    }

    /// Builds a resolution for a map that failed to load.
    #[must_use]
    pub fn failed(script_url: &str, source_map_url: Option<&str>, message: &str) -> Self {
        Self {
            script_url: script_url.to_string(),
            source_map_url: source_map_url.map(String::from),
            outcome: MapOutcome::Failed(message.to_string()),
        }
    }

    /// Returns the parsed map, if loading succeeded.
    #[must_use]
    pub fn map(&self) -> Option<&RawSourceMap> {
        match &self.outcome {
            MapOutcome::Parsed(map) => Some(map),
            MapOutcome::Failed(_) => None,
        }
    }
}

/// Wire shape of a resolution before the map/error exclusivity is enforced.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResolution {
    script_url: String,
    #[serde(default)]
    source_map_url: Option<String>,
    #[serde(default)]
    map: Option<RawSourceMap>,
    #[serde(default)]
    error_message: Option<String>,
}

impl TryFrom<RawResolution> for SourceMapResolution {
    type Error = String;

    fn try_from(raw: RawResolution) -> Result<Self, Self::Error> {
        let outcome = match (raw.map, raw.error_message) {
            (Some(map), _) => MapOutcome::Parsed(map),
            (None, Some(message)) => MapOutcome::Failed(message),
            (None, None) => {
                return Err(format!(
                    "source map entry for {} has neither `map` nor `errorMessage`",
                    raw.script_url
                ))
            }
        };
        Ok(Self { script_url: raw.script_url, source_map_url: raw.source_map_url, outcome })
    }
}
