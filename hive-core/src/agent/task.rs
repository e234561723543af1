//! Task type consumed by agents

use serde::{Deserialize, Serialize};

/// A free-text task for an agent to execute
///
/// Fully replaced on each workflow invocation; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Human-readable task description
    pub description: String,
}

impl Task {
    /// Create a task from a description
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl From<&str> for Task {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
