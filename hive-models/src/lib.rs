//! Model access for hive.
//!
//! This crate provides:
//! - The Gemini provider used by the code-generation agent
//! - Error types for transport and API failures
//! - The [`hive_core::TextGenerator`] implementation wiring the provider
//!   into the swarm

mod error;

pub mod gemini;

pub use error::{Error, Result};
pub use gemini::GeminiProvider;
