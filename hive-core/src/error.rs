//! Error types for hive-core

use thiserror::Error;

/// Result type alias using the crate's top-level error type.
pub type HiveResult<T> = std::result::Result<T, HiveError>;

/// Top-level error type for hive-core
#[derive(Error, Debug)]
pub enum HiveError {
    #[error("Agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("Generation error: {0}")]
    Generate(#[from] GenerateError),
}

/// Errors related to agent lookup and assembly
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("no agent named {0} in swarm")]
    NotFound(String),
}

/// Errors from a [`TextGenerator`](crate::generator::TextGenerator) backend
///
/// Agents never propagate these; the code-generation agent folds them into
/// its result string. The split lets providers distinguish transport
/// failures from API-level rejections.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("model API error: {0}")]
    Api(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_error_not_found_displays_name() {
        let error = AgentError::NotFound("GhostAgent".to_string());
        assert_eq!(error.to_string(), "no agent named GhostAgent in swarm");
    }

    #[test]
    fn generate_error_request_displays_detail() {
        let error = GenerateError::Request("connection refused".to_string());
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn hive_error_converts_from_agent_error() {
        let agent_error = AgentError::NotFound("x".to_string());
        let hive_error: HiveError = agent_error.into();
        assert!(matches!(hive_error, HiveError::Agent(_)));
    }

    #[test]
    fn hive_error_converts_from_generate_error() {
        let generate_error = GenerateError::Api("quota exceeded".to_string());
        let hive_error: HiveError = generate_error.into();
        assert!(matches!(hive_error, HiveError::Generate(_)));
        assert!(hive_error.to_string().contains("quota exceeded"));
    }
}
