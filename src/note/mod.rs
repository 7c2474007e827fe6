//! Notes and reminders attached to agents or properties.
//!
//! Every note belongs to an agent; a note may also reference a property and
//! may carry a due date, in which case the reminder flag marks it for
//! follow-up. The module follows hexagonal architecture:
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
