//! Layered TOML configuration for the hive CLI
//!
//! Two layers, project over user, merged field by field; the environment
//! always wins for the Gemini API key.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default host for the hive server
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default port for the hive server
pub const DEFAULT_PORT: u16 = 7878;

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Configuration as stored in TOML files (optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawHiveConfig {
    #[serde(default)]
    pub server: RawServerSection,

    #[serde(default)]
    pub gemini: RawGeminiSection,
}

/// Server section as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawServerSection {
    /// Host for the hive server
    pub host: Option<String>,

    /// Port for the hive server
    pub port: Option<u16>,
}

/// Gemini section as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawGeminiSection {
    /// Model name (e.g. "gemini-pro")
    pub model: Option<String>,

    /// API base URL override
    pub base_url: Option<String>,

    /// API key; GEMINI_API_KEY takes precedence when set
    pub api_key: Option<String>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize)]
pub struct HiveConfig {
    pub server: ServerSection,
    pub gemini: GeminiSection,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeminiSection {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project + environment)
    pub fn load() -> Result<HiveConfig> {
        let mut raw = RawHiveConfig::default();

        // Layer 1: User config
        if let Some(user_path) = Self::user_config_path()
            && user_path.exists()
        {
            let contents = std::fs::read_to_string(&user_path)?;
            let user_config: RawHiveConfig = toml::from_str(&contents)?;
            raw = Self::merge_raw(raw, user_config);
        }

        // Layer 2: Project config
        let project_path = Self::project_config_path();
        if project_path.exists() {
            let contents = std::fs::read_to_string(&project_path)?;
            let project_config: RawHiveConfig = toml::from_str(&contents)?;
            raw = Self::merge_raw(raw, project_config);
        }

        // Layer 3: Environment for the API key
        if let Ok(key) = std::env::var(API_KEY_ENV)
            && !key.is_empty()
        {
            raw.gemini.api_key = Some(key);
        }

        Ok(Self::finalize(raw))
    }

    /// Get user config path (platform-specific)
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "hive").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Get project config path
    /// Can be overridden with HIVE_PROJECT_CONFIG_DIR env var (useful for isolated tests)
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("HIVE_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".hive/config.toml")
        }
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawHiveConfig, overlay: RawHiveConfig) -> RawHiveConfig {
        RawHiveConfig {
            server: RawServerSection {
                host: overlay.server.host.or(base.server.host),
                port: overlay.server.port.or(base.server.port),
            },
            gemini: RawGeminiSection {
                model: overlay.gemini.model.or(base.gemini.model),
                base_url: overlay.gemini.base_url.or(base.gemini.base_url),
                api_key: overlay.gemini.api_key.or(base.gemini.api_key),
            },
        }
    }

    /// Apply defaults to a merged raw config
    fn finalize(raw: RawHiveConfig) -> HiveConfig {
        HiveConfig {
            server: ServerSection {
                host: raw.server.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: raw.server.port.unwrap_or(DEFAULT_PORT),
            },
            gemini: GeminiSection {
                model: raw.gemini.model,
                base_url: raw.gemini.base_url,
                api_key: raw.gemini.api_key,
            },
        }
    }
}
