//! Hive agents command: print the swarm a tool pack assembles

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use secrecy::SecretString;

use hive_core::Swarm;
use hive_models::GeminiProvider;

use crate::config::ConfigLoader;

/// Arguments for the agents command
#[derive(Debug, Args)]
pub struct AgentsArgs {
    /// Tool pack to assemble the swarm from
    #[arg(long, default_value = "basic")]
    pub pack: String,
}

/// Run the agents command
pub fn run(args: AgentsArgs) -> Result<()> {
    let config = ConfigLoader::load()?;

    // No task is executed here, so a keyless provider is fine
    let provider = GeminiProvider::new(SecretString::from(
        config.gemini.api_key.unwrap_or_default(),
    ));
    let swarm = Swarm::assemble(&args.pack, Arc::new(provider));

    println!("{}", render_table(&swarm));
    Ok(())
}

fn render_table(swarm: &Swarm) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Agent", "Role", "Tools"]);

    for agent in swarm.agents() {
        let tools = if agent.tools().is_empty() {
            "none".to_string()
        } else {
            agent
                .tools()
                .iter()
                .map(|t| t.name())
                .collect::<Vec<_>>()
                .join(", ")
        };
        table.add_row(vec![
            agent.name().to_string(),
            agent.role().to_string(),
            tools,
        ]);
    }

    table
}
