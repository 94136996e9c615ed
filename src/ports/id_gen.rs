//! ID generator port for tagging audit runs.

/// Generates unique identifiers.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
