//! Service context bundling all port trait objects.

use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::id_gen::LiveIdGenerator;
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;
use crate::ports::id_gen::IdGenerator;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Commands build a
/// live context; tests swap individual fields for in-memory fakes.
pub struct ServiceContext {
    /// Clock for stamping reports.
    pub clock: Box<dyn Clock>,
    /// Filesystem for reading snapshots and config.
    pub fs: Box<dyn FileSystem>,
    /// ID generator for run identifiers.
    pub id_gen: Box<dyn IdGenerator>,
}

impl ServiceContext {
    /// Creates a live context backed by the system clock, disk, and UUIDs.
    #[must_use]
    pub fn live() -> Self {
        Self {
            clock: Box::new(LiveClock),
            fs: Box::new(LiveFileSystem),
            id_gen: Box::new(LiveIdGenerator),
        }
    }

    /// Creates a context from explicit port implementations.
    #[must_use]
    pub fn new(
        clock: Box<dyn Clock>,
        fs: Box<dyn FileSystem>,
        id_gen: Box<dyn IdGenerator>,
    ) -> Self {
        Self { clock, fs, id_gen }
    }
}
