//! hive-core: Core library for the hive agent swarm
//!
//! This crate provides the foundational components for hive:
//!
//! - **Tool packs** - [`Tool`] and [`ToolPack`] presets that equip agents
//! - **Agents** - the [`Agent`] trait plus the four role implementations
//! - **Swarm** - [`Swarm`] assembly and the `run_workflow` dispatcher
//! - **Generation seam** - [`TextGenerator`] for the one external model call
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use hive_core::{Swarm, TaskMap, generator::TextGenerator};
//!
//! async fn example(generator: Arc<dyn TextGenerator>) {
//!     let swarm = Swarm::assemble("basic", generator);
//!
//!     let mut tasks = TaskMap::new();
//!     tasks.insert("DataAgent".to_string(), "Analyze sales data".to_string());
//!
//!     let results = swarm.run_workflow(&tasks).await;
//!     println!("{}", results["DataAgent"]);
//! }
//! ```

pub mod agent;
pub mod error;
pub mod generator;
pub mod swarm;
pub mod tools;

// Re-export key types for convenience
pub use agent::{
    Agent, AgentRole, ApiIntegrationAgent, CodeGenAgent, DataAnalysisAgent, Task,
    WebScrapingAgent,
};
pub use error::{AgentError, GenerateError, HiveError, HiveResult};
pub use generator::TextGenerator;
pub use swarm::{ResultMap, Swarm, TaskMap};
pub use tools::{Tool, ToolPack};
