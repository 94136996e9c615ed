//! Command dispatch and handlers.

pub mod check;
pub mod explain;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler using live adapters.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails, including
/// when `check` produces a failing verdict.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = ServiceContext::live();
    dispatch_with_context(command, &ctx, |key| std::env::var(key).ok())
}

/// Dispatch a command with the given service context and env lookup.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    env: impl Fn(&str) -> Option<String>,
) -> Result<(), String> {
    match command {
        Command::Check { snapshot, json, config } => {
            check::run(ctx, snapshot, *json, &config.overrides(), env)
        }
        Command::Explain { config } => explain::run(ctx, &config.overrides(), env),
    }
}
