//! Adapter implementations of the agent ports.

pub mod memory;
