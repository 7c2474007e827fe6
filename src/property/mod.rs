//! Properties managed by agents.
//!
//! A property is a simple keyed record: an address and the agent who manages
//! it. No search or pagination here; lookups are by identifier or by
//! managing agent. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Field rules in [`validation`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
