//! Verdict scoring.

use super::{DiagnosticRow, Verdict};

/// Derives the verdict for an audit run.
///
/// With no resolutions at all the audit is not applicable and passes with
/// no rows. Otherwise only an orphaned large script fails it; other rows
/// are informational and always attached. The orphan count is left at
/// zero for the caller to fill in.
#[must_use]
pub fn score(
    resolution_count: usize,
    has_orphan_large_script: bool,
    rows: Vec<DiagnosticRow>,
) -> Verdict {
    if resolution_count == 0 {
        return Verdict::not_applicable();
    }
    Verdict {
        score: u8::from(!has_orphan_large_script),
        not_applicable: false,
        rows,
        orphan_count: 0,
    }
}
