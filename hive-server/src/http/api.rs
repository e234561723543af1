//! REST API handlers

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use hive_core::{Agent, AgentRole, ResultMap, Swarm, TaskMap};

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the server
    pub status: String,
    /// Server version
    pub version: String,
    /// Seconds since server started
    pub uptime_seconds: i64,
    /// Number of agents in the active swarm
    pub agents: usize,
}

/// Health check endpoint
///
/// Returns server status, version, uptime, and the active swarm size.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let agents = state.swarm.read().await.agents().len();

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        agents,
    })
}

/// Summary of an agent for list views
#[derive(Debug, Serialize, Deserialize)]
pub struct AgentSummary {
    /// Agent name
    pub name: String,
    /// Agent role
    pub role: AgentRole,
    /// Display names of the agent's tools
    pub tools: Vec<String>,
}

impl AgentSummary {
    fn from_agent(agent: &dyn Agent) -> Self {
        Self {
            name: agent.name().to_string(),
            role: agent.role(),
            tools: agent.tools().iter().map(|t| t.name().to_string()).collect(),
        }
    }
}

/// Response describing the active swarm
#[derive(Debug, Serialize, Deserialize)]
pub struct AgentListResponse {
    /// The preset the swarm was assembled from
    pub tool_pack: String,
    /// Agents in roster order
    pub agents: Vec<AgentSummary>,
}

fn describe_swarm(swarm: &Swarm) -> AgentListResponse {
    AgentListResponse {
        tool_pack: swarm.pack_name().to_string(),
        agents: swarm
            .agents()
            .iter()
            .map(|a| AgentSummary::from_agent(a.as_ref()))
            .collect(),
    }
}

/// List the agents in the active swarm
pub async fn list_agents(State(state): State<Arc<AppState>>) -> Json<AgentListResponse> {
    let swarm = state.swarm.read().await;
    Json(describe_swarm(&swarm))
}

/// Request to reassemble the swarm from a preset
#[derive(Debug, Serialize, Deserialize)]
pub struct SelectSwarmRequest {
    /// Preset name; unknown names yield agents with empty tool lists
    pub tool_pack: String,
}

/// Reassemble the swarm from a tool-pack preset
pub async fn select_swarm(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectSwarmRequest>,
) -> Json<AgentListResponse> {
    state.select_pack(&request.tool_pack).await;
    let swarm = state.swarm.read().await;
    Json(describe_swarm(&swarm))
}

/// Request to run a workflow
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkflowRequest {
    /// Agent name to task description
    pub tasks: TaskMap,
}

/// Workflow results, keyed exactly like the request's tasks
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkflowResponse {
    /// Agent name to result string
    pub results: ResultMap,
}

/// Run a workflow over the active swarm
pub async fn run_workflow(
    State(state): State<Arc<AppState>>,
    Json(request): Json<WorkflowRequest>,
) -> Json<WorkflowResponse> {
    let swarm = state.swarm.read().await;
    let results = swarm.run_workflow(&request.tasks).await;

    Json(WorkflowResponse { results })
}
