//! Adapter implementations of the note ports.

pub mod memory;

pub use memory::InMemoryNoteDirectory;
