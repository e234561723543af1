//! Shared application state for the hive server

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use hive_core::{Swarm, TextGenerator};

/// Shared application state accessible by all handlers
///
/// The swarm is the only mutable piece: it is rebuilt whole when the tool
/// pack changes, never mutated in place.
pub struct AppState {
    /// The session's active swarm
    pub swarm: RwLock<Swarm>,
    /// Generator backing the code-generation agent
    generator: Arc<dyn TextGenerator>,
    /// When the server started
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state with a swarm assembled from the given preset
    pub fn new(pack_name: &str, generator: Arc<dyn TextGenerator>) -> Self {
        let swarm = Swarm::assemble(pack_name, Arc::clone(&generator));
        Self {
            swarm: RwLock::new(swarm),
            generator,
            started_at: Utc::now(),
        }
    }

    /// Reassemble the swarm from a (possibly unknown) preset name
    pub async fn select_pack(&self, pack_name: &str) {
        let swarm = Swarm::assemble(pack_name, Arc::clone(&self.generator));
        *self.swarm.write().await = swarm;
        tracing::info!(pack = %pack_name, "swarm reassembled");
    }

    /// Returns how long the server has been running
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
