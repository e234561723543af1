//! Swarm assembly and the workflow dispatcher
//!
//! The Swarm is responsible for:
//! - Assembling the fixed agent roster from a tool-pack preset
//! - Looking up agents by name
//! - Running a TaskMap through the agents and collecting a ResultMap

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::instrument;

use crate::agent::{
    Agent, ApiIntegrationAgent, CodeGenAgent, DataAnalysisAgent, Task, WebScrapingAgent,
};
use crate::error::AgentError;
use crate::generator::TextGenerator;
use crate::tools::ToolPack;

/// Mapping from agent name to task description, replaced per invocation
pub type TaskMap = BTreeMap<String, String>;

/// Mapping from agent name to result string, produced fresh per invocation
pub type ResultMap = BTreeMap<String, String>;

/// The list of currently active agents for a session
///
/// Flat and unordered semantically: agents share no state and the
/// dispatcher imposes no dependency between them. Rebuilt whenever the
/// tool pack changes.
pub struct Swarm {
    pack_name: String,
    agents: Vec<Box<dyn Agent>>,
}

impl Swarm {
    /// Assemble the fixed agent roster from a tool-pack preset
    ///
    /// Unknown preset names are valid: agents then hold empty tool lists.
    #[instrument(name = "swarm::assemble", skip(generator))]
    pub fn assemble(pack_name: &str, generator: Arc<dyn TextGenerator>) -> Self {
        let pack = ToolPack::named(pack_name);
        let tools = pack.tools().to_vec();

        let agents: Vec<Box<dyn Agent>> = vec![
            Box::new(DataAnalysisAgent::new("DataAgent", tools.clone())),
            Box::new(WebScrapingAgent::new("ScraperAgent", tools.clone())),
            Box::new(ApiIntegrationAgent::new("APIAgent", tools)),
            Box::new(CodeGenAgent::new("CodeGenAgent", generator)),
        ];

        tracing::debug!(pack = %pack_name, agents = agents.len(), "swarm assembled");

        Self {
            pack_name: pack_name.to_string(),
            agents,
        }
    }

    /// The preset this swarm was assembled from
    pub fn pack_name(&self) -> &str {
        &self.pack_name
    }

    /// All agents, in roster order
    pub fn agents(&self) -> &[Box<dyn Agent>] {
        &self.agents
    }

    /// Look up an agent by name
    pub fn get(&self, name: &str) -> Option<&dyn Agent> {
        self.agents
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    /// Run a workflow: execute each named agent's task independently
    ///
    /// The result map carries exactly the task map's keys. A key with no
    /// matching agent maps to a not-found message rather than being
    /// dropped.
    #[instrument(name = "swarm::run_workflow", skip(self, tasks), fields(tasks = tasks.len()))]
    pub async fn run_workflow(&self, tasks: &TaskMap) -> ResultMap {
        let mut results = ResultMap::new();

        for (name, description) in tasks {
            let result = match self.get(name) {
                Some(agent) => agent.execute(&Task::new(description.clone())).await,
                None => AgentError::NotFound(name.clone()).to_string(),
            };
            results.insert(name.clone(), result);
        }

        results
    }
}
