//! Tools and tool-pack presets
//!
//! A [`ToolPack`] is a named, immutable bundle of capability handles that
//! gets bound to agents when the swarm is assembled. Unknown pack names
//! resolve to an empty pack rather than an error.

use serde::{Deserialize, Serialize};

/// A capability handle an agent can be equipped with
///
/// Tools are presentational at this layer: agents name them in their result
/// strings but never invoke them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    /// Read local files
    FileRead,
    /// Analyze CSV data
    CsvAnalysis,
    /// Search website content
    WebsiteSearch,
    /// Probe HTTP APIs
    ApiTest,
    /// Extract text from PDFs
    PdfExtraction,
}

impl Tool {
    /// Stable display name used in agent result strings and the API
    pub fn name(&self) -> &'static str {
        match self {
            Tool::FileRead => "FileReadTool",
            Tool::CsvAnalysis => "CSVAnalysisTool",
            Tool::WebsiteSearch => "WebsiteSearchTool",
            Tool::ApiTest => "APITestTool",
            Tool::PdfExtraction => "PDFExtractionTool",
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A named preset bundle of tools
///
/// Immutable once built. Lookup by preset name never fails: names outside
/// the known set yield an empty pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPack {
    name: String,
    tools: Vec<Tool>,
}

/// Names of the known presets, in selector order
pub const PRESET_NAMES: [&str; 4] = ["basic", "web", "data", "full"];

impl ToolPack {
    /// Resolve a preset by name
    ///
    /// Unknown names produce a pack with no tools.
    pub fn named(name: &str) -> Self {
        let tools = match name {
            "basic" => vec![Tool::FileRead, Tool::CsvAnalysis],
            "web" => vec![Tool::WebsiteSearch, Tool::ApiTest],
            "data" => vec![Tool::PdfExtraction, Tool::CsvAnalysis],
            "full" => vec![
                Tool::FileRead,
                Tool::WebsiteSearch,
                Tool::ApiTest,
                Tool::CsvAnalysis,
                Tool::PdfExtraction,
            ],
            _ => vec![],
        };
        Self {
            name: name.to_string(),
            tools,
        }
    }

    /// The preset name this pack was resolved from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tools in this pack, in preset order
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Whether the pack holds no tools
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_pack_has_file_read_first() {
        let pack = ToolPack::named("basic");
        assert_eq!(pack.tools(), &[Tool::FileRead, Tool::CsvAnalysis]);
    }

    #[test]
    fn full_pack_has_all_five_tools() {
        let pack = ToolPack::named("full");
        assert_eq!(pack.tools().len(), 5);
    }

    #[test]
    fn unknown_pack_is_empty_not_an_error() {
        let pack = ToolPack::named("does-not-exist");
        assert!(pack.is_empty());
        assert_eq!(pack.name(), "does-not-exist");
    }

    #[test]
    fn tool_names_match_display() {
        assert_eq!(Tool::FileRead.name(), "FileReadTool");
        assert_eq!(Tool::CsvAnalysis.to_string(), "CSVAnalysisTool");
        assert_eq!(Tool::ApiTest.name(), "APITestTool");
    }

    #[test]
    fn every_known_preset_resolves_non_empty() {
        for name in PRESET_NAMES {
            assert!(!ToolPack::named(name).is_empty(), "preset {name} is empty");
        }
    }

    #[test]
    fn tool_serializes_as_variant_name() {
        assert_eq!(
            serde_json::to_string(&Tool::WebsiteSearch).unwrap(),
            "\"WebsiteSearch\""
        );
    }
}
