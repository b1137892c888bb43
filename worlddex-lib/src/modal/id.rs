//! Unique prompt identifiers.

use uuid::Uuid;

/// Unique identifier assigned to a prompt when it is enqueued.
///
/// Ids are random and carry no ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PromptId(Uuid);

impl PromptId {
    /// Create a new unique prompt ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PromptId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PromptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
