//! Formatting agents
//!
//! The data-analysis, web-scraping, and API-integration agents are pure
//! string formatters: their result is a deterministic function of
//! (name, tools, task). Each role names a preferred tool slot in its pack;
//! when the pack is shorter than that slot the first tool stands in, and an
//! empty pack switches to the tool-less phrasing.

use async_trait::async_trait;
use tracing::instrument;

use super::task::Task;
use super::traits::Agent;
use super::types::AgentRole;
use crate::tools::Tool;

/// Pick the tool a role reports using, if the agent holds any
fn preferred_tool(tools: &[Tool], slot: usize) -> Option<Tool> {
    tools.get(slot).or_else(|| tools.first()).copied()
}

/// Agent that formats data-analysis reports
pub struct DataAnalysisAgent {
    name: String,
    tools: Vec<Tool>,
}

impl DataAnalysisAgent {
    /// Slot in the tool pack this role reports using
    const TOOL_SLOT: usize = 0;

    pub fn new(name: impl Into<String>, tools: Vec<Tool>) -> Self {
        Self {
            name: name.into(),
            tools,
        }
    }
}

#[async_trait]
impl Agent for DataAnalysisAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> AgentRole {
        AgentRole::DataAnalysis
    }

    fn tools(&self) -> &[Tool] {
        &self.tools
    }

    #[instrument(name = "agent::execute", skip(self, task), fields(agent = %self.name))]
    async fn execute(&self, task: &Task) -> String {
        match preferred_tool(&self.tools, Self::TOOL_SLOT) {
            Some(tool) => format!(
                "{} used {} to analyze: {}",
                self.name, tool, task.description
            ),
            None => format!("{} completed analysis: {}", self.name, task.description),
        }
    }
}

/// Agent that formats web-scraping reports
pub struct WebScrapingAgent {
    name: String,
    tools: Vec<Tool>,
}

impl WebScrapingAgent {
    const TOOL_SLOT: usize = 1;

    pub fn new(name: impl Into<String>, tools: Vec<Tool>) -> Self {
        Self {
            name: name.into(),
            tools,
        }
    }
}

#[async_trait]
impl Agent for WebScrapingAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> AgentRole {
        AgentRole::WebScraping
    }

    fn tools(&self) -> &[Tool] {
        &self.tools
    }

    #[instrument(name = "agent::execute", skip(self, task), fields(agent = %self.name))]
    async fn execute(&self, task: &Task) -> String {
        match preferred_tool(&self.tools, Self::TOOL_SLOT) {
            Some(tool) => format!(
                "{} used {} to scrape: {}",
                self.name, tool, task.description
            ),
            None => format!("{} scraped: {}", self.name, task.description),
        }
    }
}

/// Agent that formats API-integration reports
pub struct ApiIntegrationAgent {
    name: String,
    tools: Vec<Tool>,
}

impl ApiIntegrationAgent {
    const TOOL_SLOT: usize = 2;

    pub fn new(name: impl Into<String>, tools: Vec<Tool>) -> Self {
        Self {
            name: name.into(),
            tools,
        }
    }
}

#[async_trait]
impl Agent for ApiIntegrationAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> AgentRole {
        AgentRole::ApiIntegration
    }

    fn tools(&self) -> &[Tool] {
        &self.tools
    }

    #[instrument(name = "agent::execute", skip(self, task), fields(agent = %self.name))]
    async fn execute(&self, task: &Task) -> String {
        match preferred_tool(&self.tools, Self::TOOL_SLOT) {
            Some(tool) => format!(
                "{} used {} to integrate: {}",
                self.name, tool, task.description
            ),
            None => format!("{} integrated: {}", self.name, task.description),
        }
    }
}
