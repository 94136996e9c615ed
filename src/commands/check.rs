//! `smaudit check` command.

use std::path::Path;

use tracing::info;

use crate::artifacts::SnapshotStore;
use crate::audit;
use crate::config::{AuditConfig, ConfigOverrides};
use crate::context::ServiceContext;
use crate::report::{self, AuditReport};

/// Execute the `check` command: audit `snapshot` and print the report.
///
/// # Errors
///
/// Returns an error string if the config or snapshot cannot be loaded, or
/// if the audit fails because a large script has no working source map.
pub fn run(
    ctx: &ServiceContext,
    snapshot: &Path,
    json: bool,
    overrides: &ConfigOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<(), String> {
    let report = evaluate(ctx, snapshot, overrides, env)?;
    println!("{}", render(&report, json)?);

    if report.passed() {
        Ok(())
    } else {
        Err(format!(
            "Source map audit failed: {} large script(s) missing a source map",
            report.orphan_count
        ))
    }
}

/// Loads config and snapshot, runs the audit, and builds the report.
///
/// # Errors
///
/// Returns an error string if the config or snapshot cannot be loaded.
pub fn evaluate(
    ctx: &ServiceContext,
    snapshot: &Path,
    overrides: &ConfigOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<AuditReport, String> {
    let config = AuditConfig::resolve(ctx, overrides, env).map_err(|e| e.to_string())?;
    let artifacts = SnapshotStore::new(ctx).load(snapshot).map_err(|e| e.to_string())?;
    info!(snapshot = %snapshot.display(), "auditing snapshot");

    let verdict = audit::audit(&artifacts.scripts, &artifacts.source_maps, &config);
    Ok(report::build_report(ctx, verdict, &config))
}

/// Renders a report as text or JSON.
///
/// # Errors
///
/// Returns an error string if JSON serialization fails.
pub fn render(report: &AuditReport, json: bool) -> Result<String, String> {
    if json {
        report::to_json(report)
    } else {
        Ok(report::format_report(report))
    }
}
