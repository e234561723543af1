//! Code-generation agent
//!
//! The only agent with a real external failure path. It forwards a prompt
//! built from the task to a [`TextGenerator`] and folds any failure into
//! its result string, so `execute` keeps the infallible contract of the
//! [`Agent`] trait.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use super::task::Task;
use super::traits::Agent;
use super::types::AgentRole;
use crate::generator::TextGenerator;
use crate::tools::Tool;

/// Agent that generates code through a generative model
pub struct CodeGenAgent {
    name: String,
    generator: Arc<dyn TextGenerator>,
}

impl CodeGenAgent {
    pub fn new(name: impl Into<String>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            name: name.into(),
            generator,
        }
    }
}

#[async_trait]
impl Agent for CodeGenAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> AgentRole {
        AgentRole::CodeGeneration
    }

    fn tools(&self) -> &[Tool] {
        &[]
    }

    #[instrument(name = "agent::execute", skip(self, task), fields(agent = %self.name))]
    async fn execute(&self, task: &Task) -> String {
        let prompt = format!("Generate Python code for: {}", task.description);

        match self.generator.generate(&prompt).await {
            Ok(text) => {
                tracing::debug!(agent = %self.name, "code generation succeeded");
                format!("{} generated code:\n```python\n{}\n```", self.name, text)
            }
            Err(e) => {
                tracing::warn!(agent = %self.name, error = %e, "code generation failed");
                format!("{} failed to generate code: {}", self.name, e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;

    struct CannedGenerator(String);

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
            Ok(self.0.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
            Err(GenerateError::Api("quota exceeded".to_string()))
        }
    }

    /// Captures the prompt it was handed, for assertion
    struct EchoGenerator;

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
            Ok(prompt.to_string())
        }
    }

    #[tokio::test]
    async fn success_wraps_output_in_code_fence() {
        let agent = CodeGenAgent::new(
            "CodeGenAgent",
            Arc::new(CannedGenerator("def factorial(n): ...".to_string())),
        );

        let result = agent.execute(&Task::new("factorial function")).await;

        assert_eq!(
            result,
            "CodeGenAgent generated code:\n```python\ndef factorial(n): ...\n```"
        );
    }

    #[tokio::test]
    async fn failure_is_folded_into_result_string() {
        let agent = CodeGenAgent::new("CodeGenAgent", Arc::new(FailingGenerator));

        let result = agent.execute(&Task::new("anything")).await;

        assert!(result.starts_with("CodeGenAgent failed to generate code:"));
        assert!(result.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn prompt_carries_the_task_description() {
        let agent = CodeGenAgent::new("CodeGenAgent", Arc::new(EchoGenerator));

        let result = agent
            .execute(&Task::new("calculate factorial"))
            .await;

        assert!(result.contains("Generate Python code for: calculate factorial"));
    }

    #[test]
    fn codegen_agent_holds_no_tools() {
        let agent = CodeGenAgent::new("CodeGenAgent", Arc::new(EchoGenerator));
        assert!(agent.tools().is_empty());
        assert_eq!(agent.role(), AgentRole::CodeGeneration);
    }
}
