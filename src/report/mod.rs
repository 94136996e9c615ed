//! Report assembly and rendering.
//!
//! Wraps a [`Verdict`] with the audit's metadata and a table description
//! for renderers, and formats it as text or JSON.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::audit::{DiagnosticRow, Verdict};
use crate::config::AuditConfig;
use crate::context::ServiceContext;

/// Stable audit identifier.
pub const AUDIT_ID: &str = "valid-source-maps";
/// Title shown when the audit passes.
pub const TITLE: &str = "Page has valid source maps";
/// Title shown when the audit fails.
pub const FAILURE_TITLE: &str = "Missing source maps for large first-party JavaScript";
/// What the audit checks and why it matters.
pub const DESCRIPTION: &str = "Source maps translate minified code back to the original \
source code, which helps developers debug in production. Large scripts shipped without a \
usable source map are hard to diagnose. Deploy source maps, with `sourcesContent` embedded, \
for your JavaScript bundles.";

/// How a table column's values should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Rendered as a link.
    Url,
    /// Rendered as a code snippet.
    Code,
}

/// One column of the report table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    /// Row field this column reads.
    pub key: &'static str,
    /// Rendering hint.
    pub value_type: ValueType,
    /// Column label.
    pub label: &'static str,
}

/// Table description plus row data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Column descriptions, in display order.
    pub headings: Vec<Heading>,
    /// Sorted rows.
    pub items: Vec<DiagnosticRow>,
}

/// Complete audit output handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// Audit identifier.
    pub id: &'static str,
    /// Title matching the outcome.
    pub title: &'static str,
    /// Audit description.
    pub description: &'static str,
    /// Identifier of this run.
    pub run_id: String,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Threshold the run used.
    pub large_script_threshold: usize,
    /// `1` for pass, `0` for fail.
    pub score: u8,
    /// `true` when nothing was evaluated.
    pub not_applicable: bool,
    /// Number of large scripts without a working source map.
    pub orphan_count: usize,
    /// Table of rows; omitted when not applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Table>,
}

/// The three table columns, in display order.
#[must_use]
pub fn headings() -> Vec<Heading> {
    vec![
        Heading { key: "scriptUrl", value_type: ValueType::Url, label: "URL" },
        Heading { key: "sourceMapUrl", value_type: ValueType::Url, label: "Map URL" },
        Heading { key: "error", value_type: ValueType::Code, label: "Error" },
    ]
}

/// Builds a report for `verdict`, stamped through the context's clock and ID ports.
#[must_use]
pub fn build_report(ctx: &ServiceContext, verdict: Verdict, config: &AuditConfig) -> AuditReport {
    let title = if verdict.score == 1 { TITLE } else { FAILURE_TITLE };
    let details = (!verdict.not_applicable)
        .then(|| Table { headings: headings(), items: verdict.rows });
    AuditReport {
        id: AUDIT_ID,
        title,
        description: DESCRIPTION,
        run_id: ctx.id_gen.generate_id(),
        generated_at: ctx.clock.now(),
        large_script_threshold: config.large_script_threshold,
        score: verdict.score,
        not_applicable: verdict.not_applicable,
        orphan_count: verdict.orphan_count,
        details,
    }
}

impl AuditReport {
    /// Returns `true` if the audit passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.score == 1
    }
}

/// Serializes a report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error string if serialization fails.
pub fn to_json(report: &AuditReport) -> Result<String, String> {
    serde_json::to_string_pretty(report).map_err(|e| format!("Failed to serialize report: {e}"))
}

/// Formats a report as a human-readable table.
#[must_use]
pub fn format_report(report: &AuditReport) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{}: {}", report.id, report.title));
    lines.push(format!("Run: {} at {}", report.run_id, report.generated_at.to_rfc3339()));
    lines.push(String::new());

    match &report.details {
        None => lines.push("No source maps were gathered; nothing to evaluate.".to_string()),
        Some(table) => lines.extend(format_table(table)),
    }

    lines.push(String::new());
    let outcome = if report.not_applicable {
        "NOT APPLICABLE"
    } else if report.passed() {
        "PASSED"
    } else {
        "FAILED"
    };
    lines.push(format!("Score: {} ({outcome})", report.score));
    lines.join("\n")
}

fn format_table(table: &Table) -> Vec<String> {
    let cells: Vec<[&str; 3]> = table
        .items
        .iter()
        .map(|row| {
            [
                row.script_url.as_deref().unwrap_or("-"),
                row.source_map_url.as_deref().unwrap_or("-"),
                row.error.as_deref().unwrap_or("-"),
            ]
        })
        .collect();

    let mut widths = [0usize; 3];
    for (i, heading) in table.headings.iter().take(3).enumerate() {
        widths[i] = heading.label.len();
    }
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }
    let [url_w, map_w, _] = widths;

    let labels: Vec<&str> = table.headings.iter().map(|h| h.label).collect();
    let mut lines = vec![
        format!(
            "{:<url_w$}  {:<map_w$}  {}",
            labels.first().copied().unwrap_or_default(),
            labels.get(1).copied().unwrap_or_default(),
            labels.get(2).copied().unwrap_or_default(),
        ),
        format!("{:-<url_w$}  {:-<map_w$}  {:-<w$}", "", "", "", w = widths[2]),
    ];
    for [url, map, error] in &cells {
        lines.push(format!("{url:<url_w$}  {map:<map_w$}  {error}").trim_end().to_string());
    }

    // A script can own several rows, e.g. a load error plus an orphan row.
    let scripts: BTreeSet<Option<&str>> =
        table.items.iter().map(|r| r.script_url.as_deref()).collect();
    let with_problems: BTreeSet<Option<&str>> = table
        .items
        .iter()
        .filter(|r| r.error.is_some())
        .map(|r| r.script_url.as_deref())
        .collect();
    lines.push(String::new());
    lines.push(format!(
        "{} script{} checked, {} with problems.",
        scripts.len(),
        if scripts.len() == 1 { "" } else { "s" },
        with_problems.len()
    ));
    lines
}
