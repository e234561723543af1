//! Agent system for hive
//!
//! This module provides the worker side of the swarm:
//! - The object-safe [`Agent`] trait
//! - Role classification ([`AgentRole`])
//! - The three formatting agents and the code-generation agent
//! - The [`Task`] type consumed by `execute`

pub mod codegen;
pub mod roles;
pub mod task;
pub mod traits;
pub mod types;

pub use codegen::CodeGenAgent;
pub use roles::{ApiIntegrationAgent, DataAnalysisAgent, WebScrapingAgent};
pub use task::Task;
pub use traits::Agent;
pub use types::AgentRole;
