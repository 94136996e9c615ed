//! Logging setup.
//!
//! Diagnostics go to stderr so stdout stays clean for `--json` output.

use tracing_subscriber::EnvFilter;

/// Env var holding the log filter (e.g. `debug`, `smaudit::audit=trace`).
pub const LOG_ENV: &str = "SMAUDIT_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Safe to call more than once.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::init;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
    }
}
