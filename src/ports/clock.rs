//! Clock port for stamping reports.

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// Tests substitute a fixed clock so rendered reports are deterministic.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
