//! Agent roster for Cadastre.
//!
//! Agents are the staff records of the agency and the densest context in the
//! crate: alongside keyed CRUD storage the roster offers a combined
//! text/date-range search with newest-first ordering and page arithmetic.
//! The module follows hexagonal architecture:
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
