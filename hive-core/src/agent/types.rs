//! Agent type definitions

use serde::{Deserialize, Serialize};

/// Agent role classification
///
/// Fixed at construction; determines the agent's result-string formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentRole {
    /// Formats data-analysis reports
    DataAnalysis,
    /// Formats web-scraping reports
    WebScraping,
    /// Formats API-integration reports
    ApiIntegration,
    /// Forwards prompts to a generative model
    CodeGeneration,
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AgentRole::DataAnalysis => "DataAnalysis",
            AgentRole::WebScraping => "WebScraping",
            AgentRole::ApiIntegration => "ApiIntegration",
            AgentRole::CodeGeneration => "CodeGeneration",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serialization_roundtrip() {
        let roles = [
            AgentRole::DataAnalysis,
            AgentRole::WebScraping,
            AgentRole::ApiIntegration,
            AgentRole::CodeGeneration,
        ];

        for role in roles {
            let json = serde_json::to_string(&role).unwrap();
            let deserialized: AgentRole = serde_json::from_str(&json).unwrap();
            assert_eq!(role, deserialized);
        }
    }

    #[test]
    fn role_display_matches_variant() {
        assert_eq!(AgentRole::DataAnalysis.to_string(), "DataAnalysis");
        assert_eq!(AgentRole::CodeGeneration.to_string(), "CodeGeneration");
    }
}
