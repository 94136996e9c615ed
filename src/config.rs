//! Audit configuration.
//!
//! Values are layered, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. a YAML config file (`--config` or `SMAUDIT_CONFIG`)
//! 3. `SMAUDIT_LARGE_SCRIPT_THRESHOLD`
//! 4. `--threshold`

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::context::ServiceContext;
use crate::error::{Error, Result};

/// Scripts at or above this many characters must ship a working source map.
pub const DEFAULT_LARGE_SCRIPT_THRESHOLD: usize = 500_000;

/// Env var naming a YAML config file.
pub const CONFIG_PATH_ENV: &str = "SMAUDIT_CONFIG";

/// Env var overriding the large-script threshold.
pub const THRESHOLD_ENV: &str = "SMAUDIT_LARGE_SCRIPT_THRESHOLD";

/// Tunables for a single audit run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    /// Minimum content length, in characters, for a script to count as large.
    pub large_script_threshold: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self { large_script_threshold: DEFAULT_LARGE_SCRIPT_THRESHOLD }
    }
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Explicit config file path.
    pub config_path: Option<PathBuf>,
    /// Explicit threshold.
    pub threshold: Option<usize>,
}

impl AuditConfig {
    /// Parses a config from YAML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the decoder message on malformed YAML or unknown keys.
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, String> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| e.to_string())
    }

    /// Resolves the effective config from file, environment, and overrides.
    ///
    /// `env` looks up environment variables; commands pass
    /// `|key| std::env::var(key).ok()`.
    ///
    /// # Errors
    ///
    /// Returns an error if a named config file cannot be read or parsed, if
    /// the threshold env var is not a number, or if the final threshold is 0.
    pub fn resolve(
        ctx: &ServiceContext,
        overrides: &ConfigOverrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let path =
            overrides.config_path.clone().or_else(|| env(CONFIG_PATH_ENV).map(PathBuf::from));
        let mut config = match path {
            Some(path) => Self::load_file(ctx, &path)?,
            None => Self::default(),
        };

        if let Some(raw) = env(THRESHOLD_ENV) {
            config.large_script_threshold = raw.trim().parse().map_err(|_| {
                Error::Config(format!("{THRESHOLD_ENV} must be a positive integer, got `{raw}`"))
            })?;
        }
        if let Some(threshold) = overrides.threshold {
            config.large_script_threshold = threshold;
        }

        config.validate()?;
        debug!(large_script_threshold = config.large_script_threshold, "resolved audit config");
        Ok(config)
    }

    fn load_file(ctx: &ServiceContext, path: &Path) -> Result<Self> {
        let contents = ctx
            .fs
            .read_to_string(path)
            .map_err(|e| Error::Io { path: path.to_path_buf(), message: e.to_string() })?;
        Self::from_yaml(&contents)
            .map_err(|message| Error::Parse { path: path.to_path_buf(), message })
    }

    fn validate(&self) -> Result<()> {
        if self.large_script_threshold == 0 {
            return Err(Error::Config(
                "large_script_threshold must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
