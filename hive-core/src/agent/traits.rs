//! Agent trait definition
//!
//! The Agent trait is the primary abstraction for workers in the swarm.

use async_trait::async_trait;

use super::task::Task;
use super::types::AgentRole;
use crate::tools::Tool;

/// Core trait for all agent implementations
///
/// Agents are role-tagged workers that turn a text task into a text result.
/// They have:
/// - Identity (name, role)
/// - Zero or more tools bound at construction
/// - A single `execute` operation
///
/// `execute` is infallible by contract: the only agent with an external
/// failure path (code generation) folds errors into its result string.
///
/// # Object Safety
///
/// This trait is designed to be object-safe, allowing `Box<dyn Agent>`.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Human-readable name, unique within a swarm
    fn name(&self) -> &str;

    /// Role classification, fixed at construction
    fn role(&self) -> AgentRole;

    /// Tools bound to this agent
    fn tools(&self) -> &[Tool];

    /// Execute a task and report the result as text
    async fn execute(&self, task: &Task) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verify that the Agent trait is object-safe
    fn _assert_object_safe(_: Box<dyn Agent>) {}
}
