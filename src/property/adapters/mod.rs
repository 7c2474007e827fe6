//! Adapter implementations of the property ports.

pub mod memory;

pub use memory::InMemoryPropertyDirectory;
