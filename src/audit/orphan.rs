//! Orphan detection: large scripts that ship without a working source map.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::DiagnosticRow;
use crate::artifacts::{ScriptRecord, SourceMapResolution};

/// Error text for a large script with no working map.
pub const LARGE_SCRIPT_MISSING_MAP: &str = "Large JavaScript file is missing a source map.";

/// Rows produced by the detector and whether any orphan was found.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrphanScan {
    /// One row per orphaned large script, in script order.
    pub rows: Vec<DiagnosticRow>,
    /// `true` if at least one large script lacks a working map.
    pub has_orphan_large_script: bool,
}

/// Flags scripts at or above `threshold` characters that have no parsed map.
///
/// Inline scripts (no URL) and scripts without captured content are
/// skipped. When several resolutions share a script URL, the first wins.
#[must_use]
pub fn detect_orphans(
    scripts: &[ScriptRecord],
    resolutions: &[SourceMapResolution],
    threshold: usize,
) -> OrphanScan {
    let by_url = index_by_script_url(resolutions);
    let mut scan = OrphanScan::default();

    for script in scripts {
        let Some(url) = script.url.as_deref() else {
            continue;
        };
        let resolution = by_url.get(url).copied();
        if resolution.is_some_and(|r| r.map().is_some()) {
            continue;
        }
        let Some(length) = script.content_length() else {
            continue;
        };
        if length < threshold {
            continue;
        }

        debug!(script_url = url, length, threshold, "large script has no working source map");
        scan.has_orphan_large_script = true;
        scan.rows.push(DiagnosticRow {
            script_url: Some(url.to_string()),
            source_map_url: resolution.and_then(|r| r.source_map_url.clone()),
            error: Some(LARGE_SCRIPT_MISSING_MAP.to_string()),
        });
    }

    scan
}

fn index_by_script_url(
    resolutions: &[SourceMapResolution],
) -> HashMap<&str, &SourceMapResolution> {
    let mut by_url = HashMap::with_capacity(resolutions.len());
    for resolution in resolutions {
        if by_url.contains_key(resolution.script_url.as_str()) {
            warn!(script_url = %resolution.script_url, "duplicate source map entry; keeping first");
            continue;
        }
        by_url.insert(resolution.script_url.as_str(), resolution);
    }
    by_url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::RawSourceMap;

    const THRESHOLD: usize = 500_000;

    fn script(url: Option<&str>, len: Option<usize>) -> ScriptRecord {
        ScriptRecord { url: url.map(String::from), content: len.map(|n| "x".repeat(n)) }
    }

    #[test]
    fn large_script_without_any_resolution_is_orphan() {
        let scan = detect_orphans(&[script(Some("big.js"), Some(THRESHOLD))], &[], THRESHOLD);
        assert!(scan.has_orphan_large_script);
        assert_eq!(
            scan.rows,
            vec![DiagnosticRow {
                script_url: Some("big.js".to_string()),
                source_map_url: None,
                error: Some(LARGE_SCRIPT_MISSING_MAP.to_string()),
            }]
        );
    }

    #[test]
    fn failed_resolution_lends_its_map_url() {
        let resolutions = [SourceMapResolution::failed("big.js", Some("big.js.map"), "404")];
        let scan =
            detect_orphans(&[script(Some("big.js"), Some(600_000))], &resolutions, THRESHOLD);
        assert!(scan.has_orphan_large_script);
        assert_eq!(scan.rows[0].source_map_url.as_deref(), Some("big.js.map"));
    }

    #[test]
    fn parsed_map_covers_large_script() {
        let resolutions = [SourceMapResolution::parsed("big.js", None, RawSourceMap::default())];
        let scan =
            detect_orphans(&[script(Some("big.js"), Some(600_000))], &resolutions, THRESHOLD);
        assert_eq!(scan, OrphanScan::default());
    }

    #[test]
    fn just_below_threshold_is_ignored() {
        let scan =
            detect_orphans(&[script(Some("mid.js"), Some(THRESHOLD - 1))], &[], THRESHOLD);
        assert!(!scan.has_orphan_large_script);
        assert!(scan.rows.is_empty());
    }

    #[test]
    fn inline_and_uncaptured_scripts_are_skipped() {
        let scripts = [script(None, Some(THRESHOLD * 2)), script(Some("lost.js"), None)];
        let scan = detect_orphans(&scripts, &[], THRESHOLD);
        assert!(!scan.has_orphan_large_script);
    }

    #[test]
    fn first_resolution_wins_for_duplicate_urls() {
        let resolutions = [
            SourceMapResolution::failed("big.js", Some("first.map"), "404"),
            SourceMapResolution::parsed("big.js", Some("second.map"), RawSourceMap::default()),
        ];
        let scan =
            detect_orphans(&[script(Some("big.js"), Some(600_000))], &resolutions, THRESHOLD);
        assert!(scan.has_orphan_large_script);
        assert_eq!(scan.rows[0].source_map_url.as_deref(), Some("first.map"));
    }

    #[test]
    fn threshold_is_configurable() {
        let scan = detect_orphans(&[script(Some("a.js"), Some(10))], &[], 10);
        assert!(scan.has_orphan_large_script);
    }
}
