//! Resolution classification: one diagnostic row per source map outcome.

use tracing::debug;

use super::DiagnosticRow;
use crate::artifacts::{MapOutcome, RawSourceMap, SourceMapResolution};

/// Classifies every resolution, in input order.
///
/// Load failures carry their error message through unchanged. Parsed maps
/// are checked for `sourcesContent` coverage; full coverage yields a row
/// with no error.
#[must_use]
pub fn classify(resolutions: &[SourceMapResolution]) -> Vec<DiagnosticRow> {
    resolutions.iter().map(classify_one).collect()
}

fn classify_one(resolution: &SourceMapResolution) -> DiagnosticRow {
    let error = match &resolution.outcome {
        MapOutcome::Failed(message) => Some(message.clone()),
        MapOutcome::Parsed(map) => match missing_content_count(map) {
            0 => None,
            missing => Some(format!("missing {missing} items in .sourcesContent")),
        },
    };
    debug!(
        script_url = %resolution.script_url,
        error = error.as_deref().unwrap_or("none"),
        "classified source map"
    );
    DiagnosticRow {
        script_url: Some(resolution.script_url.clone()),
        source_map_url: resolution.source_map_url.clone(),
        error,
    }
}

/// Counts the `sources` indices with no usable `sourcesContent` entry.
///
/// An entry is usable when it exists and is a non-empty string.
#[must_use]
pub fn missing_content_count(map: &RawSourceMap) -> usize {
    let content = map.sources_content.as_deref();
    (0..map.sources.len()).filter(|&i| !has_usable_content(content, i)).count()
}

fn has_usable_content(content: Option<&[Option<String>]>, i: usize) -> bool {
    let Some(content) = content else {
        return false;
    };
    // Bound is `len < i`, not `len <= i`; the entry lookup below still
    // catches `len == i`.
    if content.len() < i {
        return false;
    }
    content.get(i).and_then(Option::as_deref).is_some_and(|text| !text.is_empty())
}
