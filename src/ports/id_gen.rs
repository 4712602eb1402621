//! ID generator port for producing unique identifiers.

/// Generates unique identifiers for tasks and subtasks.
///
/// IDs are opaque strings, never reused; abstracting generation lets
/// tests use a predictable sequence.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
