//! Source-map health audit.
//!
//! The audit runs as a fixed pipeline over a gathered snapshot:
//!
//! 1. [`classify`] turns every source map resolution into a row.
//! 2. [`detect_orphans`] flags large scripts with no working map.
//! 3. [`sort_rows`] orders the combined rows.
//! 4. [`score`] derives the verdict.
//!
//! Only an orphaned large script fails the audit. Load errors and missing
//! `sourcesContent` are reported but never change the score.

pub mod classify;
pub mod orphan;
pub mod score;
pub mod sort;

use serde::Serialize;
use tracing::info;

use crate::artifacts::{ScriptRecord, SourceMapResolution};
use crate::config::AuditConfig;

pub use classify::{classify, missing_content_count};
pub use orphan::{detect_orphans, OrphanScan, LARGE_SCRIPT_MISSING_MAP};
pub use score::score;
pub use sort::sort_rows;

/// One line of the audit table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRow {
    /// Script the row is about.
    pub script_url: Option<String>,
    /// Source map URL, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_map_url: Option<String>,
    /// Problem description; `None` means the map is fully healthy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Final audit outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// `1` for pass, `0` for fail.
    pub score: u8,
    /// `true` when there were no source map resolutions to evaluate.
    pub not_applicable: bool,
    /// Sorted diagnostic rows.
    pub rows: Vec<DiagnosticRow>,
    /// Number of large scripts without a working source map.
    pub orphan_count: usize,
}

impl Verdict {
    /// Passing verdict with nothing to evaluate.
    #[must_use]
    pub fn not_applicable() -> Self {
        Self { score: 1, not_applicable: true, rows: Vec::new(), orphan_count: 0 }
    }

    /// Number of rows that carry an error.
    #[must_use]
    pub fn errored_count(&self) -> usize {
        self.rows.iter().filter(|r| r.error.is_some()).count()
    }
}

/// Runs the full audit over gathered scripts and source map resolutions.
#[must_use]
pub fn audit(
    scripts: &[ScriptRecord],
    resolutions: &[SourceMapResolution],
    config: &AuditConfig,
) -> Verdict {
    if resolutions.is_empty() {
        info!(scripts = scripts.len(), "no source maps gathered; audit not applicable");
        return Verdict::not_applicable();
    }

    let mut rows = classify(resolutions);
    let scan = detect_orphans(scripts, resolutions, config.large_script_threshold);
    let orphan_count = scan.rows.len();
    rows.extend(scan.rows);
    sort_rows(&mut rows);

    let verdict = Verdict {
        orphan_count,
        ..score(resolutions.len(), scan.has_orphan_large_script, rows)
    };
    info!(
        score = verdict.score,
        rows = verdict.rows.len(),
        orphans = verdict.orphan_count,
        errors = verdict.errored_count(),
        "source map audit complete"
    );
    verdict
}
