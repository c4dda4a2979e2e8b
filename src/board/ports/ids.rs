//! Identifier source port.

use uuid::Uuid;

/// Source of fresh identifiers for projects and tasks.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Returns an identifier not handed out before by this generator.
    fn next_id(&self) -> Uuid;
}
