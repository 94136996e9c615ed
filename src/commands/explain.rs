//! `smaudit explain` command.

use crate::config::{AuditConfig, ConfigOverrides};
use crate::context::ServiceContext;
use crate::report::{self, ValueType, AUDIT_ID, DESCRIPTION, FAILURE_TITLE, TITLE};

/// Execute the `explain` command.
///
/// # Errors
///
/// Returns an error string if the config cannot be resolved.
pub fn run(
    ctx: &ServiceContext,
    overrides: &ConfigOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<(), String> {
    let config = AuditConfig::resolve(ctx, overrides, env).map_err(|e| e.to_string())?;
    println!("{}", describe(&config));
    Ok(())
}

/// Describes the audit for the given config.
#[must_use]
pub fn describe(config: &AuditConfig) -> String {
    let mut lines = vec![
        format!("Audit: {AUDIT_ID}"),
        format!("Pass title: {TITLE}"),
        format!("Fail title: {FAILURE_TITLE}"),
        String::new(),
        DESCRIPTION.to_string(),
        String::new(),
        "Columns:".to_string(),
    ];
    for heading in report::headings() {
        let kind = match heading.value_type {
            ValueType::Url => "url",
            ValueType::Code => "code",
        };
        lines.push(format!("  {:<14} {:<8} {kind}", heading.key, heading.label));
    }
    lines.push(String::new());
    lines.push(format!(
        "Fails when a script of {} characters or more has no working source map.",
        config.large_script_threshold
    ));
    lines.join("\n")
}
