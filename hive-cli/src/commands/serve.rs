//! Hive serve command for running the web server
//!
//! The serve command runs the hive server which provides:
//! - REST API for swarm assembly and workflow execution
//! - The embedded single-page form

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use secrecy::SecretString;
use tracing::info;

use hive_models::GeminiProvider;
use hive_server::{AppState, HiveServer, ServerConfig};

use crate::config::{API_KEY_ENV, ConfigLoader, HiveConfig};

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Tool pack to assemble the initial swarm from
    #[arg(long, default_value = "basic")]
    pub pack: String,
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    let config = ConfigLoader::load()?;

    let server_config = ServerConfig {
        host: args.host.unwrap_or_else(|| config.server.host.clone()),
        port: args.port.unwrap_or(config.server.port),
    };

    let provider = build_provider(&config);

    info!(
        "Starting hive server on {}:{} with pack {}",
        server_config.host, server_config.port, args.pack
    );

    let state = Arc::new(AppState::new(&args.pack, Arc::new(provider)));
    let server = HiveServer::new(server_config, state);
    server.run().await.map_err(Into::into)
}

/// Build the Gemini provider from config and environment
///
/// A missing key is only warned about; the first code-generation request
/// will surface the authentication failure in its result string.
fn build_provider(config: &HiveConfig) -> GeminiProvider {
    let api_key = match &config.gemini.api_key {
        Some(key) => key.clone(),
        None => {
            tracing::warn!(
                "{} not set and no api_key in config; code generation will fail",
                API_KEY_ENV
            );
            String::new()
        }
    };

    let mut provider = GeminiProvider::new(SecretString::from(api_key));
    if let Some(model) = &config.gemini.model {
        provider = provider.with_model(model.clone());
    }
    if let Some(base_url) = &config.gemini.base_url {
        provider = provider.with_base_url(base_url.clone());
    }
    provider
}
