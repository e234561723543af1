//! Text generation seam
//!
//! The one external dependency of the swarm is a generative model used by
//! the code-generation agent. This trait keeps hive-core free of any HTTP
//! client; hive-models provides the Gemini-backed implementation.

use async_trait::async_trait;

use crate::error::GenerateError;

/// A backend that turns a text prompt into generated text
///
/// # Object Safety
///
/// This trait is designed to be object-safe, allowing `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt
    ///
    /// The call blocks the calling task for the duration of the request.
    /// No retry is attempted.
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}
