//! HTTP server module

mod api;
mod static_files;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

pub use api::{
    AgentListResponse, AgentSummary, HealthResponse, SelectSwarmRequest, WorkflowRequest,
    WorkflowResponse,
};

/// Create the HTTP router with all routes configured
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(api::health))
        .route("/api/agents", get(api::list_agents))
        .route("/api/swarm", post(api::select_swarm))
        .route("/api/workflow", post(api::run_workflow))
        .fallback(static_files::static_handler)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;

    use async_trait::async_trait;
    use hive_core::{GenerateError, TextGenerator};

    struct StubGenerator;

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
            Ok("ok".to_string())
        }
    }

    #[tokio::test]
    async fn test_router_has_health_endpoint() {
        let state = Arc::new(AppState::new("basic", Arc::new(StubGenerator)));
        let server = TestServer::new(create_router(state)).unwrap();

        let response = server.get("/api/health").await;
        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_router_serves_the_form_at_root() {
        let state = Arc::new(AppState::new("basic", Arc::new(StubGenerator)));
        let server = TestServer::new(create_router(state)).unwrap();

        let response = server.get("/").await;
        response.assert_status_ok();
        assert!(response.text().contains("Execute Workflow"));
    }
}
