//! Port contracts for agent record storage.
//!
//! Ports define infrastructure-agnostic interfaces used by agent services.

pub mod directory;

pub use directory::{AgentDirectory, AgentDirectoryError, AgentDirectoryResult};
